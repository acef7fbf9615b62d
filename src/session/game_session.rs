//! Game session: the boundary used by input and rendering front-ends.
//!
//! Keeps the legal-move list for the current position cached, so move
//! requests given as (start, end) pairs can be checked and highlighted
//! without regenerating. Requests that are not in the list, undo on an empty
//! history, and moves after the game has ended are rejected with a
//! `ChessError`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::GameStatus;
use crate::moves::chess_move::encode_move_id;

#[derive(Debug, Clone)]
pub struct GameSession {
    game_state: GameState,
    initial_state: GameState,
    legal_moves: Vec<Move>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_state(GameState::new_game())
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Ok(Self::with_state(GameState::from_fen(fen)?))
    }

    fn with_state(game_state: GameState) -> Self {
        let mut session = Self {
            initial_state: game_state.clone(),
            game_state,
            legal_moves: Vec::new(),
        };
        session.refresh_legal_moves();
        session
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.game_state.side_to_move()
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.game_state.status()
    }

    /// End squares of the legal moves starting on `square`.
    pub fn destinations_from(&self, square: Square) -> Vec<Square> {
        self.legal_moves
            .iter()
            .filter(|mv| mv.start() == square)
            .map(|mv| mv.end())
            .collect()
    }

    /// Plays the legal move from `start` to `end`.
    pub fn try_move(&mut self, start: Square, end: Square) -> ChessResult<Move> {
        let status = self.status();
        if status.is_terminal() {
            log::warn!("Move requested after the game ended ({status})");
            return Err(ChessError::GameOver(status));
        }

        let move_id = encode_move_id(start, end);
        let Some(mv) = self.legal_moves.iter().find(|mv| mv.move_id() == move_id).copied() else {
            let err = ChessError::IllegalMove { start, end };
            log::warn!("Rejected move request: {err}");
            return Err(err);
        };

        log::info!(
            "{} plays {}",
            self.game_state.side_to_move().name(),
            mv.chess_notation()
        );
        self.game_state.make_move(mv);
        self.refresh_legal_moves();
        Ok(mv)
    }

    pub fn undo(&mut self) -> ChessResult<Move> {
        let Some(mv) = self.game_state.undo_last_move() else {
            log::warn!("Undo requested but there is no move to undo");
            return Err(ChessError::NothingToUndo);
        };

        log::warn!("Undid {}", mv.chess_notation());
        self.refresh_legal_moves();
        Ok(mv)
    }

    /// Back to the position the session started from.
    pub fn reset(&mut self) {
        log::info!("Resetting game");
        self.game_state = self.initial_state.clone();
        self.refresh_legal_moves();
    }

    fn refresh_legal_moves(&mut self) {
        self.legal_moves = self.game_state.get_legal_moves();
        log::debug!(
            "{} legal moves for {}",
            self.legal_moves.len(),
            self.game_state.side_to_move().name()
        );

        let status = self.status();
        if status.is_terminal() {
            log::info!("Game over: {status}");
        }
    }
}
