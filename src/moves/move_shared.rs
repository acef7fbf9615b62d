//! Shared stepping and ray-casting helpers for the per-piece generators.

use crate::game_state::chess_types::*;

/// Knight jumps in generation order.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King steps in generation order.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// One move per offset that lands on the board and not on an ally.
pub fn step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(drow, dcol) in offsets {
        let Some(to) = from.offset(drow, dcol) else {
            continue;
        };
        match board.get(to) {
            Some(piece) if piece.color == color => {}
            _ => out.push(Move::new(from, to, board, false)),
        }
    }
}

/// Ray-cast each direction until the edge, an ally (exclusive), or an enemy
/// (inclusive).
pub fn slide_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(drow, dcol) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(drow, dcol) {
            match board.get(to) {
                None => out.push(Move::new(from, to, board, false)),
                Some(piece) if piece.color != color => {
                    out.push(Move::new(from, to, board, false));
                    break;
                }
                Some(_) => break,
            }
            cursor = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_stops_on_enemy_and_before_ally() {
        let mut board = Board::empty();
        let from = Square::new(7, 0);
        board.set(from, Some(Piece::new(Color::White, PieceKind::Rook)));
        board.set(Square::new(4, 0), Some(Piece::new(Color::Black, PieceKind::Knight)));
        board.set(Square::new(7, 3), Some(Piece::new(Color::White, PieceKind::King)));

        let mut out = Vec::new();
        slide_moves(&board, from, Color::White, &ROOK_DIRECTIONS, &mut out);

        let targets: Vec<Square> = out.iter().map(|mv| mv.end()).collect();
        assert_eq!(
            targets,
            vec![
                Square::new(6, 0),
                Square::new(5, 0),
                Square::new(4, 0),
                Square::new(7, 1),
                Square::new(7, 2),
            ]
        );
        assert!(out[2].is_capture());
    }

    #[test]
    fn step_skips_off_board_and_allies() {
        let mut board = Board::empty();
        let from = Square::new(7, 7);
        board.set(from, Some(Piece::new(Color::White, PieceKind::King)));
        board.set(Square::new(6, 7), Some(Piece::new(Color::White, PieceKind::Pawn)));

        let mut out = Vec::new();
        step_moves(&board, from, Color::White, &KING_OFFSETS, &mut out);

        let targets: Vec<Square> = out.iter().map(|mv| mv.end()).collect();
        assert_eq!(targets, vec![Square::new(6, 6), Square::new(7, 6)]);
    }
}
