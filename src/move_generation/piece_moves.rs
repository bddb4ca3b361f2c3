//! Per-piece successor generation, including multi-jump capture chains.
//!
//! A turn for one piece is either a single diagonal step or a capture that
//! keeps jumping while another capture is available from the landing
//! square. Crowning ends the turn immediately, even mid-chain. Every fork
//! of a capture tree is followed to its end, and only those fully extended
//! end states are reported.

use crate::game_state::{checkers_types::*, game_state::GameState};

/// Upper bound on jumps in one chain. A jump keeps the mover on squares of
/// one colour, so at most 31 opposing pieces can ever be in its path.
pub const MAX_CAPTURE_CHAIN: usize = 32;

/// Every state reachable by moving the `side` piece on `square` for one
/// full turn. Returns an empty list when the square holds no piece of
/// `side` or the piece is blocked.
pub fn expand_piece(game_state: &GameState, square: Square, side: Side) -> Vec<GameState> {
    let mut out = Vec::new();
    let Some(piece) = game_state.piece_at(square) else {
        return out;
    };
    if piece.side != side {
        return out;
    }

    for &(dx, dy) in piece.directions() {
        let Some(to) = offset_square(square, dx, dy) else {
            continue;
        };
        let Some(step) = game_state.apply_step(square, to) else {
            continue;
        };

        if !step.is_capture() || step.promoted {
            out.push(step.state);
        } else {
            extend_capture_chain(&step.state, step.landing, 1, &mut out);
        }
    }

    out
}

/// Whether the piece on `square` has at least one legal step or jump.
///
/// Equivalent to `!expand_piece(..).is_empty()` for the piece's own side,
/// since any applicable first step yields at least one end state.
pub fn piece_can_move(game_state: &GameState, square: Square) -> bool {
    let Some(piece) = game_state.piece_at(square) else {
        return false;
    };
    piece.directions().iter().any(|&(dx, dy)| {
        offset_square(square, dx, dy)
            .and_then(|to| game_state.apply_step(square, to))
            .is_some()
    })
}

/// Opposing pieces adjacent to `square` that the piece standing there can
/// jump right now, in the piece's direction order.
pub fn capturable_neighbors(game_state: &GameState, square: Square) -> Vec<Square> {
    let Some(piece) = game_state.piece_at(square) else {
        return Vec::new();
    };

    piece
        .directions()
        .iter()
        .filter_map(|&(dx, dy)| {
            let target = offset_square(square, dx, dy)?;
            let victim = game_state.piece_at(target)?;
            let landing = offset_square(target, dx, dy)?;
            (victim.side != piece.side && !game_state.is_occupied(landing)).then_some(target)
        })
        .collect()
}

fn extend_capture_chain(
    game_state: &GameState,
    square: Square,
    jumps_made: usize,
    out: &mut Vec<GameState>,
) {
    assert!(
        jumps_made < MAX_CAPTURE_CHAIN,
        "capture chain from square {square} exceeded {MAX_CAPTURE_CHAIN} jumps"
    );

    let targets = capturable_neighbors(game_state, square);
    if targets.is_empty() {
        out.push(*game_state);
        return;
    }

    for target in targets {
        let Some(jump) = game_state.apply_step(square, target) else {
            continue;
        };
        if jump.promoted {
            out.push(jump.state);
        } else {
            extend_capture_chain(&jump.state, jump.landing, jumps_made + 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [&str; 8]) -> GameState {
        GameState::from_board_text(&rows.join("\n")).expect("test board should parse")
    }

    #[test]
    fn man_has_two_forward_steps_and_king_has_four() {
        let state = board([
            "........", "........", "........", "...R....", "........", "........", "....r...",
            "........",
        ]);
        assert_eq!(expand_piece(&state, square_at(4, 6), Side::Red).len(), 2);
        assert_eq!(expand_piece(&state, square_at(3, 3), Side::Red).len(), 4);
    }

    #[test]
    fn wrong_side_or_empty_square_expands_to_nothing() {
        let state = GameState::puzzle_position();
        assert!(expand_piece(&state, square_at(7, 4), Side::Black).is_empty());
        assert!(expand_piece(&state, square_at(0, 0), Side::Red).is_empty());
    }

    #[test]
    fn single_capture_lands_beyond_victim() {
        let state = board([
            "........", "........", "........", "......b.", ".......r", "........", "........",
            "........",
        ]);
        let results = expand_piece(&state, square_at(7, 4), Side::Red);
        assert_eq!(results.len(), 1);
        let after = results[0];
        assert_eq!(after.piece_at(square_at(5, 2)), Some(Piece::RED_MAN));
        assert_eq!(after.piece_at(square_at(6, 3)), None);
        assert_eq!(after.piece_count(Side::Red), state.piece_count(Side::Red));
        assert_eq!(after.piece_count(Side::Black), state.piece_count(Side::Black) - 1);
    }

    #[test]
    fn double_jump_only_reports_the_finished_chain() {
        let state = board([
            "........", "........", "........", "...b....", "........", ".b......", "r.......",
            "........",
        ]);
        let results = expand_piece(&state, square_at(0, 6), Side::Red);
        assert_eq!(results.len(), 1);
        let after = results[0];
        assert_eq!(after.piece_count(Side::Black), 0);
        assert_eq!(after.piece_at(square_at(4, 2)), Some(Piece::RED_MAN));
    }

    #[test]
    fn forked_chain_reports_every_branch() {
        let state = board([
            "........", "........", "........", ".b.b....", "........", "...b....", "....r...",
            "........",
        ]);
        let results = expand_piece(&state, square_at(4, 6), Side::Red);
        // One plain step to (5,5) plus two chains forking at (2,4).
        assert_eq!(results.len(), 3);
        let chains: Vec<&GameState> =
            results.iter().filter(|s| s.piece_count(Side::Black) == 1).collect();
        assert_eq!(chains.len(), 2);
        assert!(chains.iter().any(|s| s.piece_at(square_at(0, 2)) == Some(Piece::RED_MAN)));
        assert!(chains.iter().any(|s| s.piece_at(square_at(4, 2)) == Some(Piece::RED_MAN)));
    }

    #[test]
    fn capture_onto_back_rank_crowns() {
        let state = board([
            "........", "..b.....", ".r......", "........", "........", "........", "........",
            "........",
        ]);
        let results = expand_piece(&state, square_at(1, 2), Side::Red);
        assert_eq!(results.len(), 2);
        let jumped = results
            .iter()
            .find(|s| s.piece_count(Side::Black) == 0)
            .expect("capture onto row 0");
        assert_eq!(jumped.piece_at(square_at(3, 0)), Some(Piece::RED_KING));
    }

    #[test]
    fn crowning_mid_chain_ends_the_turn() {
        // (2,4) jumps (3,3) to (4,2), then (3,1) to (2,0) where it is crowned.
        // A king on (2,0) could go on to jump (1,1), but the turn is over.
        let state = board([
            "........", ".b.b....", "........", "...b....", "..r.....", "........", "........",
            "........",
        ]);
        let results = expand_piece(&state, square_at(2, 4), Side::Red);
        let finished = results
            .iter()
            .find(|s| s.piece_at(square_at(2, 0)) == Some(Piece::RED_KING))
            .expect("chain should crown on (2, 0)");
        assert_eq!(finished.piece_at(square_at(1, 1)), Some(Piece::BLACK_MAN));
        assert_eq!(finished.piece_count(Side::Black), 1);
        assert!(results.iter().all(|s| s.piece_count(Side::Black) > 0));
    }

    #[test]
    fn men_do_not_capture_backwards() {
        let state = board([
            "........", "........", "........", "..r.....", "...b....", "........", "........",
            "........",
        ]);
        assert!(capturable_neighbors(&state, square_at(2, 3)).is_empty());

        let king = board([
            "........", "........", "........", "..R.....", "...b....", "........", "........",
            "........",
        ]);
        assert_eq!(capturable_neighbors(&king, square_at(2, 3)), vec![square_at(3, 4)]);
    }

    #[test]
    fn can_move_agrees_with_expansion() {
        for state in [GameState::new_game(), GameState::puzzle_position()] {
            for side in [Side::Red, Side::Black] {
                for sq in state.side_squares(side) {
                    assert_eq!(
                        piece_can_move(&state, sq),
                        !expand_piece(&state, sq, side).is_empty()
                    );
                }
            }
        }
    }
}
