//! Boxes of variable-width items and a two-sided piece inventory.
//!
//! This crate provides:
//! - [`SizedItem`] - the contract stored items fulfil: a kind tag and a width in slots
//! - [`Container`] - the operations every box supports
//! - [`SlotArrayBox`] - a contiguous slot array, items kept in insertion order
//! - [`ChainBox`] - an owned linked chain, newest item first
//! - [`PieceInventory`] - one box per side, pieces routed by color
//! - [`BoxConfig`] - TOML configuration for inventories and boards
//!
//! # Example
//!
//! ```
//! use chess_box::{Container, PieceInventory, SlotArrayBox};
//! use chess_core::{Piece, PieceKind};
//!
//! let mut inventory: PieceInventory<SlotArrayBox<Piece>> =
//!     PieceInventory::new("black", "white", 8);
//! assert!(inventory.add_piece(&Piece::new(PieceKind::Queen, "WHITE")));
//! assert!(inventory.contains("QUEEN", "WHITE"));
//! assert_eq!(inventory.side2_pieces().size(), 4);
//! ```

mod chain;
mod config;
mod container;
mod inventory;
mod item;
mod slot_array;

pub use chain::{ChainBox, Iter};
pub use config::{BoxConfig, ConfigError};
pub use container::{resolve_capacity, Container, DEFAULT_CAPACITY};
pub use inventory::PieceInventory;
pub use item::SizedItem;
pub use slot_array::SlotArrayBox;
