//! Core value types shared by the board model, move generation, and search.
//!
//! Squares are packed as `y * 8 + x`, so row 0 occupies indices `0..8` and
//! row 7 occupies indices `56..64`.

pub use crate::game_state::game_state::GameState;

pub const BOARD_WIDTH: u8 = 8;
pub const SQUARE_COUNT: usize = 64;

/// Board square index (`0..=63`).
pub type Square = u8;

/// Side owning a piece. Turn order is supplied by callers, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Red,
    Black,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row delta for a man of this side moving toward its far rank.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// Row on which a man of this side is crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::Red => 0,
            Side::Black => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Man => 0,
            PieceKind::King => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub const RED_MAN: Piece = Piece::new(Side::Red, PieceKind::Man);
    pub const RED_KING: Piece = Piece::new(Side::Red, PieceKind::King);
    pub const BLACK_MAN: Piece = Piece::new(Side::Black, PieceKind::Man);
    pub const BLACK_KING: Piece = Piece::new(Side::Black, PieceKind::King);

    #[inline]
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'r' => Some(Piece::RED_MAN),
            'R' => Some(Piece::RED_KING),
            'b' => Some(Piece::BLACK_MAN),
            'B' => Some(Piece::BLACK_KING),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match (self.side, self.kind) {
            (Side::Red, PieceKind::Man) => 'r',
            (Side::Red, PieceKind::King) => 'R',
            (Side::Black, PieceKind::Man) => 'b',
            (Side::Black, PieceKind::King) => 'B',
        }
    }

    /// Diagonal step directions `(dx, dy)` available to this piece.
    pub fn directions(self) -> &'static [(i8, i8)] {
        const RED_MAN_DIRS: [(i8, i8); 2] = [(1, -1), (-1, -1)];
        const BLACK_MAN_DIRS: [(i8, i8); 2] = [(1, 1), (-1, 1)];
        const KING_DIRS: [(i8, i8); 4] = [(1, -1), (-1, -1), (1, 1), (-1, 1)];
        match (self.side, self.kind) {
            (_, PieceKind::King) => &KING_DIRS,
            (Side::Red, PieceKind::Man) => &RED_MAN_DIRS,
            (Side::Black, PieceKind::Man) => &BLACK_MAN_DIRS,
        }
    }
}

/// Packs a coordinate pair into a square index.
///
/// Panics if either coordinate is off the board.
#[inline]
pub fn square_at(x: u8, y: u8) -> Square {
    assert!(
        x < BOARD_WIDTH && y < BOARD_WIDTH,
        "coordinate ({x}, {y}) is off the board"
    );
    y * BOARD_WIDTH + x
}

#[inline]
pub const fn square_x(square: Square) -> u8 {
    square % BOARD_WIDTH
}

#[inline]
pub const fn square_y(square: Square) -> u8 {
    square / BOARD_WIDTH
}

/// Square reached by stepping `(dx, dy)` from `square`, if it stays on the board.
#[inline]
pub fn offset_square(square: Square, dx: i8, dy: i8) -> Option<Square> {
    let x = square_x(square) as i8 + dx;
    let y = square_y(square) as i8 + dy;
    if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_WIDTH as i8).contains(&y) {
        Some(y as u8 * BOARD_WIDTH + x as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_packing_matches_coordinates() {
        let sq = square_at(7, 4);
        assert_eq!(sq, 39);
        assert_eq!((square_x(sq), square_y(sq)), (7, 4));
    }

    #[test]
    fn offset_square_stops_at_board_edges() {
        assert_eq!(offset_square(square_at(0, 0), -1, 1), None);
        assert_eq!(offset_square(square_at(7, 7), 1, 1), None);
        assert_eq!(offset_square(square_at(3, 3), 1, -1), Some(square_at(4, 2)));
    }

    #[test]
    fn men_only_step_toward_far_rank() {
        assert!(Piece::RED_MAN.directions().iter().all(|&(_, dy)| dy == Side::Red.forward()));
        assert!(Piece::BLACK_MAN.directions().iter().all(|&(_, dy)| dy == Side::Black.forward()));
        assert_eq!(Piece::RED_KING.directions().len(), 4);
    }

    #[test]
    fn piece_chars_round_trip() {
        for ch in ['r', 'R', 'b', 'B'] {
            assert_eq!(Piece::from_char(ch).map(Piece::to_char), Some(ch));
        }
        assert_eq!(Piece::from_char('.'), None);
    }

    #[test]
    #[should_panic]
    fn square_at_rejects_out_of_range() {
        let _ = square_at(8, 0);
    }
}
