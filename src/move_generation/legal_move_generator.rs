//! Full legal move generation.
//!
//! Generates pseudo-legal candidates, plays each one in place, drops those
//! that leave the mover's king attacked, and records checkmate or stalemate
//! when nothing survives. Every candidate costs one full generation for the
//! opposing side.

use std::fmt;

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "{} wins", winner.name()),
            GameStatus::Stalemate => write!(f, "Stalemate"),
        }
    }
}

impl GameState {
    /// Legal moves for the side to move, in generation order.
    ///
    /// Also refreshes the checkmate/stalemate flags.
    pub fn get_legal_moves(&mut self) -> Vec<Move> {
        let en_passant_snapshot = self.en_passant_target;
        let mover = self.side_to_move;
        let was_in_check = self.in_check();

        let candidates = self.generate_pseudo_legal_moves();
        let mut legal = Vec::<Move>::with_capacity(candidates.len());

        for mv in candidates {
            self.make_move(mv);
            let exposes_king = self.is_king_attacked(mover);
            self.undo_last_move();

            if !exposes_king {
                legal.push(mv);
            }
        }

        debug_assert_eq!(self.en_passant_target, en_passant_snapshot);
        self.en_passant_target = en_passant_snapshot;

        if legal.is_empty() {
            self.is_checkmate = was_in_check;
            self.is_stalemate = !was_in_check;
        } else {
            self.is_checkmate = false;
            self.is_stalemate = false;
        }

        legal
    }

    /// Status as of the last `get_legal_moves` call.
    pub fn status(&self) -> GameStatus {
        if self.is_checkmate {
            GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            }
        } else if self.is_stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::InProgress
        }
    }
}
