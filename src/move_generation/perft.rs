//! Successor-tree node counting for generator checks and benchmarks.

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    /// Leaf turns that removed at least one opposing piece.
    pub captures: usize,
    /// Leaf turns that crowned a man.
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

/// Counts leaf states `depth` turns ahead, sides alternating from `side`.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    side: Side,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for next in generator.generate_successors(game_state, side) {
        if depth == 1 {
            total.merge(classify_leaf(game_state, &next, side));
        } else {
            total.merge(perft(generator, &next, side.opposite(), depth - 1));
        }
    }
    total
}

fn classify_leaf(before: &GameState, after: &GameState, side: Side) -> PerftCounts {
    let opponent = side.opposite();
    PerftCounts {
        nodes: 1,
        captures: usize::from(after.piece_count(opponent) < before.piece_count(opponent)),
        promotions: usize::from(after.king_count(side) > before.king_count(side)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::CheckersMoveGenerator;

    #[test]
    fn depth_zero_is_a_single_node() {
        let counts = perft(&CheckersMoveGenerator, &GameState::new_game(), Side::Red, 0);
        assert_eq!(counts.nodes, 1);
    }

    #[test]
    fn opening_perft_two_plies() {
        let game = GameState::new_game();
        let one = perft(&CheckersMoveGenerator, &game, Side::Red, 1);
        assert_eq!(one, PerftCounts { nodes: 7, captures: 0, promotions: 0 });

        // Black's reply count does not depend on red's first step.
        let two = perft(&CheckersMoveGenerator, &game, Side::Red, 2);
        assert_eq!(two.nodes, 49);
        assert_eq!(two.captures, 0);
    }

    #[test]
    fn counts_captures_and_promotions_at_leaves() {
        let state = GameState::from_board_text(
            "........\n..b.....\n.r......\n........\n........\n........\n........\n........",
        )
        .expect("board should parse");
        let counts = perft(&CheckersMoveGenerator, &state, Side::Red, 1);
        assert_eq!(counts, PerftCounts { nodes: 2, captures: 1, promotions: 1 });
    }
}
