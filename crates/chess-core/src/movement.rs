//! Move legality for each piece kind.
//!
//! Every predicate here reads the piece and the board and never changes
//! either. Shape rules:
//!
//! | Kind   | Shape                              | Path                        |
//! |--------|------------------------------------|-----------------------------|
//! | Bishop | diagonal                           | squares between are empty   |
//! | Rook   | same row or same column            | squares between are empty   |
//! | Queen  | bishop or rook shape               | squares between are empty   |
//! | King   | one step in any direction          | none                        |
//! | Knight | (1, 2) or (2, 1) jump              | none                        |
//! | Pawn   | forward step, double step, capture | checked per move            |

use crate::board::Board;
use crate::piece::{Piece, Role};
use crate::square::Square;

impl Piece {
    /// Returns true if this piece may move to `(target_row, target_col)` on `board`.
    ///
    /// The piece's own position is taken as its place on `board`. Unpositioned
    /// pieces, off-board targets, null moves and landing on an ally are all
    /// rejected before the kind-specific shape is checked.
    pub fn can_move(&self, target_row: i32, target_col: i32, board: &Board) -> bool {
        let Some(from) = self.position() else {
            return false;
        };
        let Some(to) = board.square(target_row, target_col) else {
            return false;
        };
        if from == to {
            return false;
        }
        let occupant = board.get(to);
        if occupant.is_some_and(|other| self.is_ally(other)) {
            return false;
        }

        let (dr, dc) = from.delta_to(to);
        let in_shape = match self.role() {
            Role::Bishop => is_diagonal(dr, dc),
            Role::Rook { .. } => is_straight(dr, dc),
            Role::Queen => is_diagonal(dr, dc) || is_straight(dr, dc),
            Role::King => dr.abs() <= 1 && dc.abs() <= 1,
            Role::Knight => matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1)),
            Role::Pawn { double_jump } => {
                let dir = if self.is_moving_up() { 1 } else { -1 };
                let forward_one = dc == 0 && dr == dir && occupant.is_none();
                let forward_two = double_jump
                    && dc == 0
                    && dr == 2 * dir
                    && occupant.is_none()
                    && from
                        .offset(dir, 0)
                        .is_some_and(|between| board.is_empty_at(between));
                // Allies were rejected above, so any occupant here is an enemy.
                let capture = dr == dir && dc.abs() == 1 && occupant.is_some();
                forward_one || forward_two || capture
            }
        };
        in_shape && (!self.kind().is_slider() || sliding_path_clear(board, from, to))
    }

    /// Returns true if this rook can castle with `other`.
    ///
    /// Requires castle moves left, a shared color, both pieces on the board,
    /// the same row and columns at most one apart. Non-rooks never castle.
    pub fn can_castle(&self, other: &Piece) -> bool {
        if self.castle_moves_left() == 0 || !self.is_ally(other) {
            return false;
        }
        match (self.position(), other.position()) {
            (Some(mine), Some(theirs)) => {
                mine.row() == theirs.row() && mine.col().abs_diff(theirs.col()) <= 1
            }
            _ => false,
        }
    }

    /// Returns true if this pawn stands on the last row in its direction.
    pub fn can_promote(&self, board_length: usize) -> bool {
        if !matches!(self.role(), Role::Pawn { .. }) {
            return false;
        }
        let Some(square) = self.position() else {
            return false;
        };
        if self.is_moving_up() {
            square.row() + 1 == board_length
        } else {
            square.row() == 0
        }
    }
}

#[inline]
fn is_diagonal(dr: i64, dc: i64) -> bool {
    dr.abs() == dc.abs()
}

#[inline]
fn is_straight(dr: i64, dc: i64) -> bool {
    (dr == 0) != (dc == 0)
}

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a row, a column or a diagonal.
pub fn sliding_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta_to(to);
    let (step_r, step_c) = (dr.signum(), dc.signum());
    let steps = dr.abs().max(dc.abs());
    (1..steps).all(|i| {
        from.offset(step_r * i, step_c * i)
            .is_some_and(|square| board.is_empty_at(square))
    })
}
