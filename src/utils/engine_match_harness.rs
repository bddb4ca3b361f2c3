//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from a given
//! position, alternating turns until one side is out of pieces or moves, or
//! the ply limit is reached.

use log::{debug, info};
use std::time::Instant;

use crate::engines::engine_trait::{Engine, SearchParams};
use crate::game_state::{checkers_types::Side, game_state::GameState};
use crate::move_generation::move_generator::{expand_all, has_any_successor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    RedWin,
    BlackWin,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, side: Side },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub first_to_move: Side,
    pub search_params: SearchParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            first_to_move: Side::Red,
            search_params: SearchParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    /// Position after every turn, in play order.
    pub played_states: Vec<GameState>,
    pub red_move_count: u32,
    pub black_move_count: u32,
    pub red_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            average_ms(self.player1_total_time_ns, self.player1_moves),
            average_ms(self.player2_total_time_ns, self.player2_moves),
        )
    }
}

fn average_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1.0e6
    }
}

/// Side that has lost in `game_state` with `to_move` to play, if any.
///
/// A side with no pieces or no turn to play has lost. Both sides are
/// checked, mover first, so the game ends exactly where the search sees a
/// terminal position.
pub fn losing_side(game_state: &GameState, to_move: Side) -> Option<Side> {
    [to_move, to_move.opposite()].into_iter().find(|&side| {
        game_state.piece_count(side) == 0 || !has_any_successor(game_state, side)
    })
}

/// Play one match from `start_state`. `engine_red` plays red.
pub fn play_engine_match(
    engine_red: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    start_state: GameState,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    engine_red.new_game();
    engine_black.new_game();

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: start_state,
        played_states: Vec::new(),
        red_move_count: 0,
        black_move_count: 0,
        red_total_time_ns: 0,
        black_total_time_ns: 0,
    };
    let mut state = start_state;
    let mut mover = config.first_to_move;

    for ply in 0..config.max_plies {
        if let Some(loser) = losing_side(&state, mover) {
            result.outcome = match loser {
                Side::Red => MatchOutcome::BlackWin,
                Side::Black => MatchOutcome::RedWin,
            };
            break;
        }

        let engine: &mut dyn Engine = match mover {
            Side::Red => &mut *engine_red,
            Side::Black => &mut *engine_black,
        };
        let started = Instant::now();
        let out = engine.choose_move(&state, mover, &config.search_params)?;
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Side::Red => {
                result.red_move_count = result.red_move_count.saturating_add(1);
                result.red_total_time_ns = result.red_total_time_ns.saturating_add(elapsed_ns);
            }
            Side::Black => {
                result.black_move_count = result.black_move_count.saturating_add(1);
                result.black_total_time_ns =
                    result.black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out
            .best_state
            .ok_or_else(|| format!("{} returned no move for {mover:?}", engine.name()))?;
        if !expand_all(&state, mover).contains(&chosen) {
            return Err(format!("{} returned an illegal move", engine.name()));
        }
        debug!("ply {ply}: {mover:?} ({}) moved", engine.name());

        result.played_states.push(chosen);
        state = chosen;
        mover = mover.opposite();
    }

    result.final_state = state;
    info!(
        "match finished: {:?} after {} plies",
        result.outcome,
        result.played_states.len()
    );
    Ok(result)
}

/// Play a series of matches from `start_state` and aggregate results.
///
/// Player 1 plays red in even-numbered games and black in odd ones.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    start_state: GameState,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for i in 0..config.games {
        let player1_is_red = i % 2 == 0;
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory(seed);
        let mut player2 = player2_factory(seed);

        if config.verbose {
            let (red, black) = if player1_is_red {
                (player1.name(), player2.name())
            } else {
                (player2.name(), player1.name())
            };
            println!(
                "[series] game {}/{} seed={} red={} black={}",
                i + 1,
                config.games,
                seed,
                red,
                black
            );
        }

        let result = if player1_is_red {
            play_engine_match(
                player1.as_mut(),
                player2.as_mut(),
                start_state,
                &config.per_game,
            )?
        } else {
            play_engine_match(
                player2.as_mut(),
                player1.as_mut(),
                start_state,
                &config.per_game,
            )?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_red {
            (
                result.red_move_count,
                result.red_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.red_move_count,
                result.red_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let winner_side = match result.outcome {
            MatchOutcome::RedWin => Some(Side::Red),
            MatchOutcome::BlackWin => Some(Side::Black),
            MatchOutcome::DrawMaxPlies => None,
        };
        let mapped = match winner_side {
            Some(side) => {
                let player = if (side == Side::Red) == player1_is_red {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, side }
            }
            None => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            println!(
                "[series] game {}/{} result={:?} p1_wins={} p2_wins={} draws={}\n",
                i + 1,
                config.games,
                mapped,
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    info!("series finished: {}", stats.report());
    Ok(stats)
}
