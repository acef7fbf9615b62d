use crate::game_state::chess_types::*;

/// Single journal entry for `make_move` / `undo_last_move`.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub mv: Move,
    pub prev_en_passant_target: Option<Square>,
}
