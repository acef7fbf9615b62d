use crate::game_state::chess_types::*;

/// Pushes, double pushes from the start row, diagonal captures, and en-passant
/// captures onto the recorded target.
///
/// Promotion is not expanded here: a push or capture onto the last rank is a
/// single move whose `is_promotion` flag is resolved by `make_move`.
pub fn generate_pawn_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    let board = game_state.board();
    let dir = color.pawn_direction();

    if let Some(one_step) = from.offset(dir, 0) {
        if board.is_empty(one_step) {
            out.push(Move::new(from, one_step, board, false));

            if from.row == color.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * dir, 0) {
                    if board.is_empty(two_step) {
                        out.push(Move::new(from, two_step, board, false));
                    }
                }
            }
        }
    }

    // captures and en-passant
    for col_delta in [-1i8, 1i8] {
        let Some(to) = from.offset(dir, col_delta) else {
            continue;
        };

        match board.get(to) {
            Some(piece) if piece.color != color => out.push(Move::new(from, to, board, false)),
            None if game_state.en_passant_target() == Some(to)
                && to.row == color.en_passant_capture_row() =>
            {
                out.push(Move::new(from, to, board, true));
            }
            _ => {}
        }
    }
}
