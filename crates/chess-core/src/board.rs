//! Read-only board snapshots consulted by the move predicates.

use std::fmt;

use tracing::trace;

use crate::piece::Piece;
use crate::square::{Square, BOARD_LENGTH, MAX_BOARD_LENGTH};

/// A square grid of optional pieces.
///
/// The side length is fixed at construction. Each stored piece's
/// position matches the cell it sits in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    length: usize,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// A zero length, or one above [`MAX_BOARD_LENGTH`], falls back to
    /// [`BOARD_LENGTH`].
    pub fn new(length: usize) -> Self {
        let cells = Some(length)
            .filter(|&length| length > 0 && length <= MAX_BOARD_LENGTH)
            .and_then(|length| length.checked_mul(length));
        let (length, cells) = match cells {
            Some(cells) => (length, cells),
            None => {
                trace!(length, "unusable board length, using the default");
                (BOARD_LENGTH, BOARD_LENGTH * BOARD_LENGTH)
            }
        };
        Board {
            length,
            cells: vec![None; cells],
        }
    }

    /// Side length of the board.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the square at signed coordinates if it lies on this board.
    #[inline]
    pub fn square(&self, row: i32, col: i32) -> Option<Square> {
        Square::checked(row, col, self.length)
    }

    #[inline]
    fn slot(&self, square: Square) -> Option<usize> {
        (square.row() < self.length && square.col() < self.length)
            .then(|| square.row() * self.length + square.col())
    }

    /// The piece at `(row, col)`, or `None` for empty or off-board cells.
    pub fn cell(&self, row: i32, col: i32) -> Option<&Piece> {
        self.square(row, col).and_then(|square| self.get(square))
    }

    /// The piece on `square`, if any.
    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.slot(square).and_then(|i| self.cells[i].as_ref())
    }

    /// Returns true if `square` is on the board and holds no piece.
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.slot(square).is_some_and(|i| self.cells[i].is_none())
    }

    /// Puts `piece` on the cell named by its own position.
    ///
    /// Fails for unpositioned pieces, positions off this board,
    /// and cells that are already taken.
    pub fn place(&mut self, piece: Piece) -> bool {
        let Some(index) = piece.position().and_then(|square| self.slot(square)) else {
            trace!(%piece, "cannot place piece outside the board");
            return false;
        };
        if self.cells[index].is_some() {
            trace!(%piece, "cannot place piece on an occupied cell");
            return false;
        }
        self.cells[index] = Some(piece);
        true
    }

    /// Lifts the piece off `(row, col)`. The returned piece keeps its old position.
    pub fn take(&mut self, row: i32, col: i32) -> Option<Piece> {
        let index = self.square(row, col).and_then(|square| self.slot(square))?;
        self.cells[index].take()
    }

    /// Iterates over every piece on the board, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().flatten()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(BOARD_LENGTH)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.length).rev() {
            write!(f, "{} |", row)?;
            for col in 0..self.length {
                let symbol = match self.get(Square::new(row, col)) {
                    Some(piece) => piece.kind().symbol(),
                    None => '*',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
