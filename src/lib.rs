//! Crate root module declarations for the Plum Checkers search engine.
//!
//! This file exposes the board model, move generation, search, engines, and
//! text/harness utilities so binaries, benches, and tests can import stable
//! module paths.

pub mod game_state {
    pub mod checkers_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod perft;
    pub mod piece_moves;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_parser;
    pub mod engine_match_harness;
    pub mod render_game_state;
}
