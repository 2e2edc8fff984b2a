//! Two-sided piece inventory keyed by color.

use chess_core::{Piece, SideLabels};
use tracing::debug;

use crate::chain::ChainBox;
use crate::config::BoxConfig;
use crate::container::{Container, DEFAULT_CAPACITY};

/// One box of pieces per side.
///
/// Pieces are routed to a side by exact match of their color against the
/// normalized side labels. The backing defaults to [`ChainBox`]; any
/// [`Container`] works the same way.
#[derive(Debug, Clone)]
pub struct PieceInventory<C = ChainBox<Piece>> {
    labels: SideLabels,
    side1: C,
    side2: C,
}

impl<C: Container<Piece>> PieceInventory<C> {
    /// Creates an inventory with two empty boxes of `capacity` slots each.
    ///
    /// Labels are normalized as a pair (see [`SideLabels::normalize`]) and a
    /// non-positive capacity falls back to the default.
    pub fn new(color1: &str, color2: &str, capacity: i64) -> Self {
        PieceInventory {
            labels: SideLabels::normalize(color1, color2),
            side1: C::with_capacity(capacity),
            side2: C::with_capacity(capacity),
        }
    }

    /// Creates an inventory from loaded configuration.
    pub fn from_config(config: &BoxConfig) -> Self {
        PieceInventory::new(&config.side1_color, &config.side2_color, config.capacity)
    }

    fn side(&self, color: &str) -> Option<&C> {
        match self.labels.side_of(color)? {
            0 => Some(&self.side1),
            _ => Some(&self.side2),
        }
    }

    fn side_mut(&mut self, color: &str) -> Option<&mut C> {
        match self.labels.side_of(color)? {
            0 => Some(&mut self.side1),
            _ => Some(&mut self.side2),
        }
    }

    /// Adds a copy of `piece` to the box of its color.
    ///
    /// Fails if the color names neither side or the box is too full.
    pub fn add_piece(&mut self, piece: &Piece) -> bool {
        match self.side_mut(piece.color()) {
            Some(side) => side.add_item(piece),
            None => {
                debug!(color = piece.color(), "piece color matches neither side");
                false
            }
        }
    }

    /// Removes one piece tagged `kind` from the box of `color`.
    pub fn remove_piece(&mut self, kind: &str, color: &str) -> bool {
        match self.side_mut(color) {
            Some(side) => side.remove(kind),
            None => {
                debug!(color, "color matches neither side");
                false
            }
        }
    }

    /// Returns true if the box of `color` holds a piece tagged `kind`.
    pub fn contains(&self, kind: &str, color: &str) -> bool {
        self.side(color).is_some_and(|side| side.contains(kind))
    }

    pub fn side1_color(&self) -> &str {
        self.labels.first()
    }

    pub fn side2_color(&self) -> &str {
        self.labels.second()
    }

    pub fn labels(&self) -> &SideLabels {
        &self.labels
    }

    pub fn side1_pieces(&self) -> &C {
        &self.side1
    }

    pub fn side2_pieces(&self) -> &C {
        &self.side2
    }
}

impl<C: Container<Piece>> Default for PieceInventory<C> {
    fn default() -> Self {
        PieceInventory {
            labels: SideLabels::default(),
            side1: C::with_capacity(DEFAULT_CAPACITY as i64),
            side2: C::with_capacity(DEFAULT_CAPACITY as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot_array::SlotArrayBox;
    use chess_core::PieceKind;

    #[test]
    fn default_sides() {
        let inventory: PieceInventory = PieceInventory::default();
        assert_eq!(inventory.side1_color(), "BLACK");
        assert_eq!(inventory.side2_color(), "WHITE");
        assert_eq!(inventory.side1_pieces().capacity(), 64);
        assert_eq!(inventory.side2_pieces().size(), 0);
    }

    #[test]
    fn labels_normalize_as_a_pair() {
        let inventory: PieceInventory = PieceInventory::new("red", "blue", 16);
        assert_eq!(inventory.side1_color(), "RED");
        assert_eq!(inventory.side2_color(), "BLUE");

        let inventory: PieceInventory = PieceInventory::new("red", "blue!", 16);
        assert_eq!(inventory.side1_color(), "BLACK");
        assert_eq!(inventory.side2_color(), "WHITE");

        let inventory: PieceInventory = PieceInventory::new("Red", "rED", 16);
        assert_eq!(inventory.side1_color(), "BLACK");
        assert_eq!(inventory.side2_color(), "WHITE");
    }

    #[test]
    fn non_positive_capacity_uses_default() {
        let inventory: PieceInventory<SlotArrayBox<Piece>> = PieceInventory::new("a", "b", -2);
        assert_eq!(inventory.side1_pieces().capacity(), 64);
        assert_eq!(inventory.side2_pieces().capacity(), 64);
    }

    #[test]
    fn pieces_are_routed_by_color() {
        let mut inventory: PieceInventory = PieceInventory::new("black", "white", 16);
        assert!(inventory.add_piece(&Piece::new(PieceKind::Pawn, "BLACK")));
        assert!(inventory.add_piece(&Piece::new(PieceKind::Rook, "WHITE")));
        assert!(!inventory.add_piece(&Piece::new(PieceKind::Rook, "GREEN")));

        assert_eq!(inventory.side1_pieces().size(), 1);
        assert_eq!(inventory.side2_pieces().size(), 2);
        assert!(inventory.contains("PAWN", "BLACK"));
        assert!(!inventory.contains("PAWN", "WHITE"));
        assert!(inventory.contains("ROOK", "WHITE"));
        assert!(!inventory.contains("ROOK", "GREEN"));

        assert!(inventory.remove_piece("PAWN", "BLACK"));
        assert!(!inventory.remove_piece("PAWN", "BLACK"));
        assert!(!inventory.remove_piece("ROOK", "GREEN"));
        assert_eq!(inventory.side1_pieces().size(), 0);
    }

    #[test]
    fn full_side_rejects_pieces() {
        let mut inventory: PieceInventory<SlotArrayBox<Piece>> =
            PieceInventory::new("black", "white", 5);
        assert!(inventory.add_piece(&Piece::new(PieceKind::Queen, "WHITE")));
        assert!(!inventory.add_piece(&Piece::new(PieceKind::Rook, "WHITE")));
        assert!(inventory.add_piece(&Piece::new(PieceKind::Pawn, "WHITE")));
        assert!(inventory.add_piece(&Piece::new(PieceKind::Rook, "BLACK")));
        assert_eq!(inventory.side2_pieces().remaining(), 0);
    }

    #[test]
    fn from_config_uses_configured_sides() {
        let config = BoxConfig {
            capacity: 10,
            side1_color: "gold".to_string(),
            side2_color: "silver".to_string(),
            ..BoxConfig::default()
        };
        let inventory: PieceInventory = PieceInventory::from_config(&config);
        assert_eq!(inventory.side1_color(), "GOLD");
        assert_eq!(inventory.side2_color(), "SILVER");
        assert_eq!(inventory.side1_pieces().capacity(), 10);
    }
}
