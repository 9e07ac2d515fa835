//! Crate root module declarations for the notation chess rules engine.
//!
//! Exposes the board model, the move-notation parser, move validation and
//! application, and the two-player terminal session so the binary, benches
//! and tests can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod piece_register;
}

pub mod moves {
    pub mod move_descriptions;
}

pub mod notation {
    pub mod notation_parser;
}

pub mod move_validation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_moves_castling;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliders;
    pub mod move_processor;
}

pub mod session {
    pub mod game_session;
    pub mod session_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod placement;
    pub mod render_game_state;
}
