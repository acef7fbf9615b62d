//! Immutable move record.
//!
//! A `Move` is a projection of a board snapshot: the piece on the start square,
//! whatever stood on the destination before the move, and the promotion and
//! en-passant flags. Equality and hashing only look at the four coordinates,
//! packed into `move_id`.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::{Board, Piece, PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Option<Piece>,
    piece_captured: Option<Piece>,
    is_promotion: bool,
    is_en_passant: bool,
    move_id: u16,
}

impl Move {
    /// Reads the moved and captured pieces off `board`.
    ///
    /// For an en-passant capture the destination is empty, so the captured
    /// piece is set to the opposing pawn instead.
    pub fn new(start: Square, end: Square, board: &Board, is_en_passant: bool) -> Self {
        let piece_moved = board.get(start);
        let mut piece_captured = board.get(end);

        let is_promotion = matches!(
            piece_moved,
            Some(Piece { color, kind: PieceKind::Pawn }) if end.row == color.promotion_row()
        );

        if is_en_passant {
            if let Some(mover) = piece_moved {
                piece_captured = Some(Piece::new(mover.color.opposite(), PieceKind::Pawn));
            }
        }

        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_promotion,
            is_en_passant,
            move_id: encode_move_id(start, end),
        }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    #[inline]
    pub fn piece_moved(&self) -> Option<Piece> {
        self.piece_moved
    }

    #[inline]
    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.is_promotion
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn move_id(&self) -> u16 {
        self.move_id
    }

    pub fn is_two_square_pawn_advance(&self) -> bool {
        matches!(self.piece_moved, Some(Piece { kind: PieceKind::Pawn, .. }))
            && self.start.col == self.end.col
            && self.row_delta().abs() == 2
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub fn en_passant_capture_square(&self) -> Square {
        Square::new(self.start.row, self.end.col)
    }

    #[inline]
    pub fn row_delta(&self) -> i8 {
        self.end.row as i8 - self.start.row as i8
    }

    #[inline]
    pub fn col_delta(&self) -> i8 {
        self.end.col as i8 - self.start.col as i8
    }

    /// Manhattan distance covered, used to pace move-replay animation.
    #[inline]
    pub fn travel_distance(&self) -> u8 {
        self.row_delta().unsigned_abs() + self.col_delta().unsigned_abs()
    }

    /// Coordinate notation, e.g. `e2e4`.
    pub fn chess_notation(&self) -> String {
        format!(
            "{}{}",
            square_to_algebraic(self.start),
            square_to_algebraic(self.end)
        )
    }
}

#[inline]
pub const fn encode_move_id(start: Square, end: Square) -> u16 {
    start.row as u16 * 1000 + start.col as u16 * 100 + end.row as u16 * 10 + end.col as u16
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.move_id == other.move_id
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.chess_notation())
    }
}
