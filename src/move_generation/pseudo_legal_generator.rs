//! Pseudo-legal move generation.
//!
//! Scans the board row-major and dispatches every piece of the requested color
//! to its movement rule. King safety is not considered here; see
//! `legal_move_generator` for the filtering pass.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

impl GameState {
    /// Pseudo-legal moves for the side to move.
    pub fn generate_pseudo_legal_moves(&self) -> Vec<Move> {
        self.generate_pseudo_legal_moves_for(self.side_to_move)
    }

    /// Pseudo-legal moves for `color`, whichever side is to move.
    pub fn generate_pseudo_legal_moves_for(&self, color: Color) -> Vec<Move> {
        let mut out = Vec::<Move>::with_capacity(64);

        for (from, piece) in self.board.occupied() {
            if piece.color != color {
                continue;
            }

            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(self, from, color, &mut out),
                PieceKind::Knight => generate_knight_moves(self, from, color, &mut out),
                PieceKind::Bishop => generate_bishop_moves(self, from, color, &mut out),
                PieceKind::Rook => generate_rook_moves(self, from, color, &mut out),
                PieceKind::Queen => generate_queen_moves(self, from, color, &mut out),
                PieceKind::King => generate_king_moves(self, from, color, &mut out),
            }
        }

        out
    }
}
