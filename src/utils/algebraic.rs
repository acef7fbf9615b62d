//! Conversions between board squares and coordinate text such as `e4`.
//!
//! Column 0 is file `a`; row 7 is rank `1`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Square;

/// Parse coordinate text (for example: "e4") into a square.
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    let col = file - b'a';
    let row = BOARD_SIZE - (rank - b'0');
    Ok(Square::new(row, col))
}

/// Render a square as coordinate text (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col);
    let rank_char = char::from(b'0' + BOARD_SIZE - square.row);
    format!("{file_char}{rank_char}")
}

/// Split four-character coordinate move text (for example: "e2e4").
pub fn parse_coordinate_move(text: &str) -> ChessResult<(Square, Square)> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }
    let start = algebraic_to_square(&text[0..2])?;
    let end = algebraic_to_square(&text[2..4])?;
    Ok((start, end))
}
