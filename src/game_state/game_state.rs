//! Core mutable game state.
//!
//! `GameState` owns the mailbox board, the side to move, both king locations,
//! the en-passant target, and the make/unmake journal. Move generation,
//! make/unmake, and legality filtering are implemented on it in the
//! `move_generation` modules.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,

    // [color]
    pub(crate) king_locations: [Square; 2],
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) fullmove_number: u16,

    pub(crate) history: Vec<UndoState>,

    pub(crate) is_checkmate: bool,
    pub(crate) is_stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            side_to_move: Color::White,
            king_locations: [Square::new(7, 4), Square::new(0, 4)],
            en_passant_target: None,
            fullmove_number: 1,
            history: Vec::new(),
            is_checkmate: false,
            is_stalemate: false,
        }
    }

    /// Builds a state from its parts, locating both kings on `board`.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        en_passant_target: Option<Square>,
        fullmove_number: u16,
    ) -> ChessResult<Self> {
        let white_king = single_king(&board, Color::White)?;
        let black_king = single_king(&board, Color::Black)?;

        Ok(Self {
            board,
            side_to_move,
            king_locations: [white_king, black_king],
            en_passant_target,
            fullmove_number: fullmove_number.max(1),
            history: Vec::new(),
            is_checkmate: false,
            is_stalemate: false,
        })
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Square {
        self.king_locations[color.index()]
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Moves played so far, oldest first.
    pub fn move_history(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator {
        self.history.iter().map(|entry| &entry.mv)
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|entry| &entry.mv)
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.is_stalemate
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, content: Option<Piece>) {
        self.board.set(square, content);
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}

fn single_king(board: &Board, color: Color) -> ChessResult<Square> {
    match board.find_king(color).as_slice() {
        [square] => Ok(*square),
        kings => Err(ChessError::InvalidFen(format!(
            "expected exactly one {} king, found {}",
            color.name().to_lowercase(),
            kings.len()
        ))),
    }
}
