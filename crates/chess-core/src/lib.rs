//! Pieces, boards and move legality.
//!
//! This crate provides:
//! - [`PieceKind`] and [`Piece`] for piece representation, with [`Role`]
//!   carrying kind-specific state (pawn double jumps, rook castle moves)
//! - [`SideLabels`] for normalizing the color strings of the two sides
//! - [`Square`] and [`Board`] for read-only board snapshots
//! - Move predicates: [`Piece::can_move`], [`Piece::can_castle`] and
//!   [`Piece::can_promote`]
//!
//! # Example
//!
//! ```
//! use chess_core::{Board, Piece, PieceKind};
//!
//! let mut board = Board::default();
//! let bishop = Piece::at(PieceKind::Bishop, "white", 4, 4, board.length());
//! board.place(bishop.clone());
//!
//! assert!(bishop.can_move(6, 6, &board));
//! assert!(!bishop.can_move(4, 6, &board));
//! ```

mod board;
mod color;
pub mod movement;
mod piece;
mod square;

pub use board::Board;
pub use color::{
    normalize_label, SideLabels, DEFAULT_PIECE_COLOR, DEFAULT_SIDE1_COLOR, DEFAULT_SIDE2_COLOR,
};
pub use movement::sliding_path_clear;
pub use piece::{ParseKindError, Piece, PieceKind, Role, DEFAULT_CASTLE_MOVES, EMPTY_KIND};
pub use square::{Square, BOARD_LENGTH, MAX_BOARD_LENGTH};
