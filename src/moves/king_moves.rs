use crate::game_state::chess_types::*;
use crate::moves::move_shared::{step_moves, KING_OFFSETS};

/// Adjacent squares only; castling is never generated.
pub fn generate_king_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    step_moves(game_state.board(), from, color, &KING_OFFSETS, out);
}
