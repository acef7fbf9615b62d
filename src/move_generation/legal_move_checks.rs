//! Check detection by re-running the pseudo-legal generator for the attacker.
//!
//! There is no dedicated attack map: a square counts as attacked when one of
//! the attacker's pseudo-legal moves ends on it. For a square holding a piece
//! of the defending color (the king in particular) this is exactly the set of
//! capturing moves. For empty squares pawn pushes count and pawn diagonals do
//! not, so callers should only ask about occupied squares.

use crate::game_state::chess_types::*;

impl GameState {
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        self.generate_pseudo_legal_moves_for(by_color)
            .iter()
            .any(|mv| mv.end() == square)
    }

    /// Whether `color`'s king can be captured by the other side.
    #[inline]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_location(color), color.opposite())
    }

    /// Whether the side to move is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::*;

    #[test]
    fn startpos_is_not_check() {
        let game = GameState::new_game();
        assert!(!game.in_check());
        assert!(!game.is_king_attacked(Color::Black));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/K3R3 b - - 0 1").expect("FEN should parse");
        assert!(game.in_check());
        assert!(game.is_square_attacked(Square::new(0, 4), Color::White));
    }

    #[test]
    fn blocked_ray_is_not_an_attack() {
        let game = GameState::from_fen("4k3/4p3/8/8/8/8/8/K3R3 b - - 0 1").expect("FEN should parse");
        assert!(!game.in_check());
        assert!(game.is_square_attacked(Square::new(1, 4), Color::White));
    }

    #[test]
    fn pawn_attacks_diagonally_onto_king() {
        let game = GameState::from_fen("8/8/8/8/8/3k4/4P3/4K3 b - - 0 1").expect("FEN should parse");
        assert!(game.in_check());
        assert_eq!(game.king_location(Color::Black), Square::new(5, 3));
    }

    #[test]
    fn attack_query_does_not_touch_state() {
        let game = GameState::new_game();
        let before = game.get_fen();
        let _ = game.is_square_attacked(Square::new(5, 4), Color::Black);
        assert_eq!(game.get_fen(), before);
        assert_eq!(game.side_to_move(), Color::White);
    }
}
