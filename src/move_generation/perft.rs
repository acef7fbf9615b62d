//! Perft node counting over in-place make/unmake.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Number of leaf positions `depth` plies below `game_state`.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game_state.get_legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        game_state.make_move(mv);
        nodes += perft(game_state, depth - 1);
        game_state.undo_last_move();
    }
    nodes
}

/// Like `perft`, but also classifies every leaf move.
pub fn perft_detailed(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in game_state.get_legal_moves() {
        game_state.make_move(mv);
        if depth == 1 {
            total.merge(classify_leaf(game_state, &mv));
        } else {
            total.merge(perft_detailed(game_state, depth - 1));
        }
        game_state.undo_last_move();
    }
    total
}

/// `game_state` is the position right after `mv`.
fn classify_leaf(game_state: &mut GameState, mv: &Move) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant() {
        counts.en_passant += 1;
    }
    if mv.is_promotion() {
        counts.promotions += 1;
    }
    if game_state.in_check() {
        counts.checks += 1;
        if game_state.get_legal_moves().is_empty() {
            counts.checkmates += 1;
        }
    }

    counts
}
