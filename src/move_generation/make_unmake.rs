//! In-place make/unmake.
//!
//! `make_move` journals the move together with the en-passant target it
//! replaced, so `undo_last_move` can restore the previous state exactly.

use crate::game_state::chess_rules::PROMOTION_PIECE_KIND;
use crate::game_state::chess_types::*;

impl GameState {
    /// Applies `mv` without checking it against the legal-move list.
    pub fn make_move(&mut self, mv: Move) {
        let prev_en_passant_target = self.en_passant_target;
        let mover = self.side_to_move;

        self.set_piece(mv.start(), None);
        self.set_piece(mv.end(), mv.piece_moved());

        if let Some(piece) = mv.piece_moved() {
            if piece.kind == PieceKind::King {
                self.king_locations[piece.color.index()] = mv.end();
            }
            if mv.is_promotion() {
                self.set_piece(mv.end(), Some(Piece::new(piece.color, PROMOTION_PIECE_KIND)));
            }
        }

        if mv.is_en_passant() {
            self.set_piece(mv.en_passant_capture_square(), None);
        }

        self.en_passant_target = if mv.is_two_square_pawn_advance() {
            Some(Square::new((mv.start().row + mv.end().row) / 2, mv.start().col))
        } else {
            None
        };

        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = mover.opposite();
        self.is_checkmate = false;
        self.is_stalemate = false;

        self.history.push(UndoState {
            mv,
            prev_en_passant_target,
        });
    }

    /// Reverts the most recent move. Returns `None` when there is nothing to
    /// undo.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let UndoState {
            mv,
            prev_en_passant_target,
        } = self.history.pop()?;

        self.set_piece(mv.start(), mv.piece_moved());
        self.set_piece(mv.end(), mv.piece_captured());

        if mv.is_en_passant() {
            // The captured pawn was never on the destination square.
            self.set_piece(mv.end(), None);
            self.set_piece(mv.en_passant_capture_square(), mv.piece_captured());
        }

        if let Some(piece) = mv.piece_moved() {
            if piece.kind == PieceKind::King {
                self.king_locations[piece.color.index()] = mv.start();
            }
        }

        self.side_to_move = self.side_to_move.opposite();
        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_sub(1).max(1);
        }
        self.en_passant_target = prev_en_passant_target;
        self.is_checkmate = false;
        self.is_stalemate = false;

        Some(mv)
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::*;

    fn find_move(game: &mut GameState, notation: &str) -> Move {
        game.get_legal_moves()
            .into_iter()
            .find(|mv| mv.chess_notation() == notation)
            .unwrap_or_else(|| panic!("{notation} should be legal"))
    }

    fn snapshot(game: &GameState) -> (Board, Color, Square, Square, Option<Square>, u16) {
        (
            *game.board(),
            game.side_to_move(),
            game.king_location(Color::White),
            game.king_location(Color::Black),
            game.en_passant_target(),
            game.fullmove_number(),
        )
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut game = GameState::new_game();
        let before = snapshot(&game);
        assert!(game.undo_last_move().is_none());
        assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn make_then_undo_restores_quiet_move() {
        let mut game = GameState::new_game();
        let before = snapshot(&game);

        let mv = find_move(&mut game, "g1f3");
        game.make_move(mv);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.last_move(), Some(&mv));
        assert!(game.piece_at(Square::new(7, 6)).is_none());

        assert_eq!(game.undo_last_move(), Some(mv));
        assert_eq!(snapshot(&game), before);
        assert_eq!(game.move_history().len(), 0);
    }

    #[test]
    fn two_square_advance_sets_midpoint_and_next_move_clears_it() {
        let mut game = GameState::new_game();
        let e4 = find_move(&mut game, "e2e4");
        game.make_move(e4);
        assert_eq!(game.en_passant_target(), Some(Square::new(5, 4)));

        let nf6 = find_move(&mut game, "g8f6");
        game.make_move(nf6);
        assert_eq!(game.en_passant_target(), None);
        assert_eq!(game.fullmove_number(), 2);

        game.undo_last_move();
        assert_eq!(game.en_passant_target(), Some(Square::new(5, 4)));
        game.undo_last_move();
        assert_eq!(game.en_passant_target(), None);
    }

    #[test]
    fn undoing_a_reply_double_push_restores_the_previous_target() {
        let mut game = GameState::new_game();
        let e4 = find_move(&mut game, "e2e4");
        game.make_move(e4);
        let d5 = find_move(&mut game, "d7d5");
        game.make_move(d5);
        assert_eq!(game.en_passant_target(), Some(Square::new(2, 3)));

        game.undo_last_move();
        assert_eq!(game.en_passant_target(), Some(Square::new(5, 4)));
    }

    #[test]
    fn en_passant_capture_removes_passed_pawn_and_undo_restores_it() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let e4 = find_move(&mut game, "e2e4");
        game.make_move(e4);
        let before_capture = snapshot(&game);

        let capture = find_move(&mut game, "d4e3");
        assert!(capture.is_en_passant());
        game.make_move(capture);

        assert_eq!(game.piece_at(Square::new(4, 4)), None);
        assert_eq!(
            game.piece_at(Square::new(5, 4)),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert_eq!(game.piece_at(Square::new(4, 3)), None);
        assert_eq!(game.en_passant_target(), None);

        game.undo_last_move();
        assert_eq!(snapshot(&game), before_capture);
        assert_eq!(game.piece_at(Square::new(5, 4)), None);
        assert_eq!(
            game.piece_at(Square::new(4, 4)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
    }

    #[test]
    fn promotion_places_queen_and_undo_restores_pawn() {
        let mut game =
            GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let before = snapshot(&game);

        for notation in ["a7a8", "a7b8"] {
            let mv = find_move(&mut game, notation);
            game.make_move(mv);
            assert_eq!(
                game.piece_at(mv.end()),
                Some(Piece::new(Color::White, PieceKind::Queen))
            );
            game.undo_last_move();
            assert_eq!(snapshot(&game), before);
        }
        assert_eq!(
            game.piece_at(Square::new(0, 1)),
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
    }

    #[test]
    fn black_promotion_on_row_seven_and_undo() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/8/6p1/K6N b - - 0 7").expect("FEN should parse");
        let before = snapshot(&game);

        for notation in ["g2g1", "g2h1"] {
            let mv = find_move(&mut game, notation);
            assert!(mv.is_promotion());
            game.make_move(mv);
            assert_eq!(mv.end().row, 7);
            assert_eq!(
                game.piece_at(mv.end()),
                Some(Piece::new(Color::Black, PieceKind::Queen))
            );
            assert_eq!(game.piece_at(mv.start()), None);
            assert_eq!(game.fullmove_number(), 8);

            assert_eq!(game.undo_last_move(), Some(mv));
            assert_eq!(snapshot(&game), before);
            assert_eq!(
                game.piece_at(Square::new(6, 6)),
                Some(Piece::new(Color::Black, PieceKind::Pawn))
            );
        }
        assert_eq!(
            game.piece_at(Square::new(7, 7)),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
    }

    #[test]
    fn king_moves_update_and_restore_king_location() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mv = find_move(&mut game, "e1d2");
        game.make_move(mv);
        assert_eq!(game.king_location(Color::White), Square::new(6, 3));

        game.undo_last_move();
        assert_eq!(game.king_location(Color::White), Square::new(7, 4));
    }
}
