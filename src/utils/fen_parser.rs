//! FEN-to-GameState parser.
//!
//! Builds a playable position from a Forsyth-Edwards Notation string. Castling
//! rights and the halfmove clock are validated but not kept, since neither
//! affects move generation here.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next();
    let fullmove_part = parts.next();

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    validate_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_target(en_passant_part, side_to_move, &board)?;

    if let Some(halfmove) = halfmove_part {
        halfmove
            .parse::<u16>()
            .map_err(|_| invalid(format!("invalid halfmove clock: {halfmove}")))?;
    }
    let fullmove_number = match fullmove_part {
        Some(fullmove) => fullmove
            .parse::<u16>()
            .map_err(|_| invalid(format!("invalid fullmove number: {fullmove}")))?,
        None => 1,
    };

    let game_state =
        GameState::from_parts(board, side_to_move, en_passant_target, fullmove_number)?;

    if game_state.is_king_attacked(side_to_move.opposite()) {
        return Err(invalid("side not to move is in check"));
    }

    Ok(game_state)
}

fn invalid(reason: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(reason.into())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as u8;
                if col > BOARD_SIZE {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}' in board layout")))?;

            if col >= BOARD_SIZE {
                return Err(invalid("board rank has too many files"));
            }

            board.set(Square::new(row as u8, col), Some(piece));
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side-to-move: {side_part}"))),
    }
}

fn validate_castling_rights(castling_part: &str) -> ChessResult<()> {
    if castling_part == "-" {
        return Ok(());
    }
    if castling_part.is_empty() || castling_part.chars().any(|ch| !"KQkq".contains(ch)) {
        return Err(invalid(format!("invalid castling rights: {castling_part}")));
    }
    Ok(())
}

/// The target must sit behind a pawn that just made a two-square advance:
/// the target and the pawn's start square empty, the pawn one row beyond.
fn parse_en_passant_target(
    en_passant_part: &str,
    side_to_move: Color,
    board: &Board,
) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(format!("invalid en-passant square: {en_passant_part}")))?;
    if square.row != side_to_move.en_passant_capture_row() {
        return Err(invalid(format!(
            "en-passant square {en_passant_part} is not capturable by the side to move"
        )));
    }

    let pusher = side_to_move.opposite();
    let direction = pusher.pawn_direction();
    let pawn_square = square.offset(direction, 0);
    let start_square = square.offset(-direction, 0);
    let pushed_pawn = Some(Piece::new(pusher, PieceKind::Pawn));

    match (pawn_square, start_square) {
        (Some(pawn_square), Some(start_square))
            if board.is_empty(square)
                && board.is_empty(start_square)
                && board.get(pawn_square) == pushed_pawn =>
        {
            Ok(Some(square))
        }
        _ => Err(invalid(format!(
            "en-passant square {en_passant_part} does not follow a two-square pawn advance"
        ))),
    }
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
