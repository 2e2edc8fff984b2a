//! The contract every boxed element fulfils.

use chess_core::Piece;

/// An element that occupies a fixed number of contiguous box slots.
///
/// Boxes look elements up by their kind tag alone; two items with the same
/// tag are interchangeable as far as `remove`, `contains` and `count` go.
pub trait SizedItem: Clone {
    /// Discriminator used for lookups.
    fn kind_tag(&self) -> &str;

    /// Number of slots the item occupies. Must be at least 1.
    fn width(&self) -> usize;
}

/// Width as the boxes account for it. A zero width is treated as 1.
#[inline]
pub(crate) fn span_of<T: SizedItem>(item: &T) -> usize {
    item.width().max(1)
}

impl SizedItem for Piece {
    fn kind_tag(&self) -> &str {
        self.kind().tag()
    }

    fn width(&self) -> usize {
        self.kind().width()
    }
}
