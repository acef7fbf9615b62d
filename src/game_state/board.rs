//! Mailbox board: an 8x8 grid of optional pieces indexed by `Square`.

use std::ops::Index;

use crate::game_state::chess_rules::{BACK_RANK_LAYOUT, BOARD_SIZE};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

const N: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; N]; N],
        }
    }

    /// Standard set-up: black on rows 0-1, white on rows 6-7.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            let col = col as u8;
            board.set(Square::new(0, col), Some(Piece::new(Color::Black, *kind)));
            board.set(Square::new(1, col), Some(Piece::new(Color::Black, PieceKind::Pawn)));
            board.set(Square::new(6, col), Some(Piece::new(Color::White, PieceKind::Pawn)));
            board.set(Square::new(7, col), Some(Piece::new(Color::White, *kind)));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, content: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = content;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Rows in board order (row 0 first).
    pub fn rows(&self) -> &[[Option<Piece>; N]; N] {
        &self.squares
    }

    /// Every occupied square with its piece, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn find_king(&self, color: Color) -> Vec<Square> {
        self.occupied()
            .filter(|(_, piece)| *piece == Piece::new(color, PieceKind::King))
            .map(|(square, _)| square)
            .collect()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, square: Square) -> &Self::Output {
        &self.squares[square.row as usize][square.col as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_thirty_two_pieces() {
        let board = Board::starting_position();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(
            board[Square::new(7, 4)],
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board[Square::new(0, 3)],
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert!(board.is_empty(Square::new(4, 4)));
    }

    #[test]
    fn find_king_reports_each_color() {
        let board = Board::starting_position();
        assert_eq!(board.find_king(Color::White), vec![Square::new(7, 4)]);
        assert_eq!(board.find_king(Color::Black), vec![Square::new(0, 4)]);
        assert!(Board::empty().find_king(Color::White).is_empty());
    }
}
