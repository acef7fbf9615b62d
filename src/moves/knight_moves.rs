use crate::game_state::chess_types::*;
use crate::moves::move_shared::{step_moves, KNIGHT_OFFSETS};

pub fn generate_knight_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    step_moves(game_state.board(), from, color, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn knight_in_center_has_eight_targets() {
        let game = GameState::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_knight_moves(&game, Square::new(4, 3), Color::White, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn knight_on_edge_reaches_first_file() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/1N2K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_knight_moves(&game, Square::new(7, 1), Color::White, &mut out);

        let targets: Vec<String> = out.iter().map(|mv| mv.chess_notation()).collect();
        assert_eq!(targets, vec!["b1a3", "b1c3", "b1d2"]);
    }
}
