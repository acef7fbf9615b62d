//! Crate root module declarations.
//!
//! Exposes the mailbox game state, per-piece move rules, legal move
//! generation, the game session used by front-ends, and coordinate/FEN/render
//! helpers so the console binary, benches, and external tooling can import
//! stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod make_unmake;
    pub mod perft;
    pub mod pseudo_legal_generator;
}

pub mod session {
    pub mod console;
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
