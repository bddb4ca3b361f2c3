//! Board snapshot and the single-step transition that all move generation
//! is built on.
//!
//! `GameState` stores one bitboard per side and piece kind plus occupancy
//! caches. It carries no side-to-move; callers of generation and search
//! supply that. Two states compare equal when every piece sits on the same
//! square, which falls out of comparing the bitboards.

use std::fmt;

use crate::game_state::checkers_types::*;
use crate::utils::board_parser::{parse_board, BoardParseError};
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GameState {
    // [side][piece_kind]
    pub(crate) pieces: [[u64; 2]; 2],

    pub(crate) occupancy_by_side: [u64; 2],
    pub(crate) occupancy_all: u64,
}

/// Result of a successful one-square diagonal step or single jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub state: GameState,
    /// Where the moving piece ended up.
    pub landing: Square,
    /// Square of the piece removed by a jump.
    pub captured: Option<Square>,
    /// A man was crowned on `landing`.
    pub promoted: bool,
}

impl StepOutcome {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard opening: twelve men per side on the dark squares, black on
    /// rows 0-2 moving down the board, red on rows 5-7 moving up.
    pub fn new_game() -> Self {
        let mut state = Self::new_empty();
        for y in 0..BOARD_WIDTH {
            for x in 0..BOARD_WIDTH {
                if (x + y) % 2 == 0 {
                    continue;
                }
                match y {
                    0..=2 => state.put_piece(square_at(x, y), Piece::BLACK_MAN),
                    5..=7 => state.put_piece(square_at(x, y), Piece::RED_MAN),
                    _ => {}
                }
            }
        }
        state
    }

    /// Small endgame puzzle used by the demos and tests.
    pub fn puzzle_position() -> Self {
        let mut state = Self::new_empty();
        state.put_piece(square_at(7, 2), Piece::RED_KING);
        state.put_piece(square_at(7, 4), Piece::RED_MAN);
        state.put_piece(square_at(3, 6), Piece::RED_MAN);
        state.put_piece(square_at(4, 1), Piece::BLACK_MAN);
        state.put_piece(square_at(2, 3), Piece::BLACK_MAN);
        state.put_piece(square_at(4, 3), Piece::BLACK_MAN);
        state.put_piece(square_at(3, 4), Piece::BLACK_MAN);
        state.put_piece(square_at(4, 7), Piece::BLACK_KING);
        state
    }

    #[inline]
    pub fn from_board_text(text: &str) -> Result<Self, BoardParseError> {
        parse_board(text)
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupancy_all & (1u64 << square) != 0
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let mask = 1u64 << square;
        if self.occupancy_all & mask == 0 {
            return None;
        }
        for side in [Side::Red, Side::Black] {
            for kind in [PieceKind::Man, PieceKind::King] {
                if self.pieces[side.index()][kind.index()] & mask != 0 {
                    return Some(Piece::new(side, kind));
                }
            }
        }
        None
    }

    /// Places `piece` on an empty square.
    ///
    /// Panics if the square is already occupied, which keeps the two sides'
    /// piece sets disjoint.
    pub fn put_piece(&mut self, square: Square, piece: Piece) {
        assert!((square as usize) < SQUARE_COUNT, "square {square} is off the board");
        assert!(!self.is_occupied(square), "square {square} is already occupied");
        let mask = 1u64 << square;
        self.pieces[piece.side.index()][piece.kind.index()] |= mask;
        self.occupancy_by_side[piece.side.index()] |= mask;
        self.occupancy_all |= mask;
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_at(square)?;
        let clear = !(1u64 << square);
        self.pieces[piece.side.index()][piece.kind.index()] &= clear;
        self.occupancy_by_side[piece.side.index()] &= clear;
        self.occupancy_all &= clear;
        Some(piece)
    }

    /// Occupied squares of `side`, in ascending square order.
    #[inline]
    pub fn side_squares(&self, side: Side) -> SquareIter {
        SquareIter(self.occupancy_by_side[side.index()])
    }

    #[inline]
    pub fn piece_count(&self, side: Side) -> u32 {
        self.occupancy_by_side[side.index()].count_ones()
    }

    #[inline]
    pub fn king_count(&self, side: Side) -> u32 {
        self.pieces[side.index()][PieceKind::King.index()].count_ones()
    }

    #[inline]
    pub fn man_count(&self, side: Side) -> u32 {
        self.pieces[side.index()][PieceKind::Man.index()].count_ones()
    }

    /// Moves the piece on `from` one diagonal step toward `to`, jumping over
    /// `to` when it holds an opposing piece.
    ///
    /// Returns `None` when the step has no effect: `to` is not diagonally
    /// adjacent, holds a friendly piece, or the jump's landing square is off
    /// the board or occupied. A man landing on its side's promotion row is
    /// crowned. Direction of travel is not checked here; move generation
    /// restricts men to forward steps.
    ///
    /// Panics if either square is off the board or `from` is empty.
    pub fn apply_step(&self, from: Square, to: Square) -> Option<StepOutcome> {
        assert!(
            (from as usize) < SQUARE_COUNT && (to as usize) < SQUARE_COUNT,
            "step {from} -> {to} leaves the board"
        );
        let Some(piece) = self.piece_at(from) else {
            panic!("no piece on square {from}");
        };

        let dx = square_x(to) as i8 - square_x(from) as i8;
        let dy = square_y(to) as i8 - square_y(from) as i8;
        if dx.abs() != 1 || dy.abs() != 1 {
            return None;
        }

        match self.piece_at(to) {
            None => {
                let mut next = *self;
                let promoted = next.relocate(from, to, piece);
                Some(StepOutcome {
                    state: next,
                    landing: to,
                    captured: None,
                    promoted,
                })
            }
            Some(target) if target.side != piece.side => {
                let landing = offset_square(to, dx, dy)?;
                if self.is_occupied(landing) {
                    return None;
                }
                let mut next = *self;
                next.remove_piece(to);
                let promoted = next.relocate(from, landing, piece);
                Some(StepOutcome {
                    state: next,
                    landing,
                    captured: Some(to),
                    promoted,
                })
            }
            Some(_) => None,
        }
    }

    fn relocate(&mut self, from: Square, to: Square, piece: Piece) -> bool {
        self.remove_piece(from);
        let promotes =
            piece.kind == PieceKind::Man && square_y(to) == piece.side.promotion_row();
        let placed = if promotes {
            Piece::new(piece.side, PieceKind::King)
        } else {
            piece
        };
        self.put_piece(to, placed);
        promotes
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}

/// Iterates set bits of an occupancy mask as squares.
#[derive(Debug, Clone, Copy)]
pub struct SquareIter(u64);

impl Iterator for SquareIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let square = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}
