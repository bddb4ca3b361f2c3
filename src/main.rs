//! Solve a checkers position from a board file.
//!
//! Run with:
//! `cargo run --release -- board.txt 6`
//! `cargo run --release -- board.txt 6 --play`

use std::fs;

use plum_checkers::engines::engine_alpha_beta::AlphaBetaEngine;
use plum_checkers::engines::engine_trait::SearchParams;
use plum_checkers::game_state::checkers_types::Side;
use plum_checkers::game_state::game_state::GameState;
use plum_checkers::search::alpha_beta::{search_for_side, SearchConfig};
use plum_checkers::utils::engine_match_harness::{play_engine_match, MatchConfig};

const USAGE: &str = "usage: plum_checkers <board-file> [depth] [--play]";

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let play = args.iter().any(|a| a == "--play");
    let mut positional = args.iter().filter(|a| !a.starts_with("--"));

    let path = positional.next().ok_or(USAGE)?;
    let depth = match positional.next() {
        Some(raw) => raw
            .parse::<u8>()
            .map_err(|e| format!("invalid depth '{raw}': {e}"))?,
        None => SearchConfig::default().max_depth,
    };

    let text = fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
    let state = GameState::from_board_text(&text).map_err(|e| e.to_string())?;
    print!("{state}");

    if play {
        let config = MatchConfig {
            max_plies: 200,
            search_params: SearchParams { depth: Some(depth) },
            ..MatchConfig::default()
        };
        let mut red = AlphaBetaEngine::new(depth);
        let mut black = AlphaBetaEngine::new(depth);
        let result = play_engine_match(&mut red, &mut black, state, &config)?;
        for (ply, played) in result.played_states.iter().enumerate() {
            println!("\n# ply {}", ply + 1);
            print!("{played}");
        }
        println!("\noutcome: {:?}", result.outcome);
        return Ok(());
    }

    let result = search_for_side(&state, Side::Red, SearchConfig { max_depth: depth });
    match result.best_state {
        Some(next) => {
            println!("\n# red to move, depth {depth}, score {}", result.best_score);
            print!("{next}");
        }
        None => println!("\nno move: position is terminal"),
    }
    Ok(())
}
