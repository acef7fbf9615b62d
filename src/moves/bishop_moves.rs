use crate::game_state::chess_types::*;
use crate::moves::move_shared::{slide_moves, BISHOP_DIRECTIONS};

pub fn generate_bishop_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    slide_moves(game_state.board(), from, color, &BISHOP_DIRECTIONS, out);
}
