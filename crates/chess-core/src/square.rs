//! Board coordinates.

use std::fmt;

/// Side length of a standard board.
pub const BOARD_LENGTH: usize = 8;

/// Largest side length a board may have.
pub const MAX_BOARD_LENGTH: usize = 256;

/// A square on a board, addressed by 0-indexed row and column.
///
/// Row 0 is the bottom row; pieces that are "moving up" advance toward
/// higher rows.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: usize,
    col: usize,
}

impl Square {
    /// Creates a square without bounds checking against any board.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Square { row, col }
    }

    /// Creates a square if both coordinates lie in `[0, board_length)`.
    pub fn checked(row: i32, col: i32, board_length: usize) -> Option<Self> {
        let row = usize::try_from(row).ok().filter(|&r| r < board_length)?;
        let col = usize::try_from(col).ok().filter(|&c| c < board_length)?;
        Some(Square { row, col })
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Signed `(row, col)` distance from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Square) -> (i64, i64) {
        (
            signed(other.row) - signed(self.row),
            signed(other.col) - signed(self.col),
        )
    }

    /// The square `(dr, dc)` away, if it does not fall below zero.
    pub fn offset(self, dr: i64, dc: i64) -> Option<Square> {
        let row = usize::try_from(signed(self.row).checked_add(dr)?).ok()?;
        let col = usize::try_from(signed(self.col).checked_add(dc)?).ok()?;
        Some(Square { row, col })
    }
}

// Coordinates past i64::MAX saturate; no board is that large.
#[inline]
fn signed(coord: usize) -> i64 {
    i64::try_from(coord).unwrap_or(i64::MAX)
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
