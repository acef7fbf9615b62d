//! Error type shared by position set-up, coordinate parsing, and the game
//! session layer.
//!
//! The engine core (generation, make/unmake, legality filtering) has no error
//! paths: `make_move` trusts its input and `undo_last_move` reports an empty
//! history through `Option`. Everything that validates outside input returns
//! `ChessResult`.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_generator::GameStatus;
use crate::utils::algebraic::square_to_algebraic;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A FEN string could not be turned into a playable position.
    InvalidFen(String),
    /// Coordinate text did not name a board square.
    InvalidSquare(String),
    /// The requested start/end pair is not in the current legal-move list.
    IllegalMove { start: Square, end: Square },
    NothingToUndo,
    /// A move was requested after checkmate or stalemate.
    GameOver(GameStatus),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::InvalidSquare(text) => write!(f, "invalid square: {text}"),
            ChessError::IllegalMove { start, end } => write!(
                f,
                "illegal move: {}{}",
                square_to_algebraic(*start),
                square_to_algebraic(*end)
            ),
            ChessError::NothingToUndo => write!(f, "no move to undo"),
            ChessError::GameOver(status) => write!(f, "game is over: {status}"),
        }
    }
}

impl Error for ChessError {}
