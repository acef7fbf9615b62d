//! Canonical chess-rule constants.
//!
//! Static literals used to set up and validate game state: the board size, the
//! back-rank layout, the starting position FEN, and the fixed promotion piece.

use crate::game_state::chess_types::PieceKind;

pub const BOARD_SIZE: u8 = 8;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Piece order on both back ranks, file a through h.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Pawns reaching the last rank always become this piece.
pub const PROMOTION_PIECE_KIND: PieceKind = PieceKind::Queen;
