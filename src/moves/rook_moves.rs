use crate::game_state::chess_types::*;
use crate::moves::move_shared::{slide_moves, ROOK_DIRECTIONS};

pub fn generate_rook_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    slide_moves(game_state.board(), from, color, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn rook_on_open_board_has_fourteen_squares() {
        let game = GameState::from_fen("k7/8/8/8/3R4/8/8/7K w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_rook_moves(&game, Square::new(4, 3), Color::White, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn boxed_in_rook_has_no_moves() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_rook_moves(&game, Square::new(7, 0), Color::White, &mut out);
        assert!(out.is_empty());
    }
}
