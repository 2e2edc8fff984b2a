//! The capability set shared by every box backing.

use crate::item::SizedItem;

/// Capacity used when a non-positive one is requested.
pub const DEFAULT_CAPACITY: usize = 64;

/// Resolves a requested capacity, replacing non-positive values with [`DEFAULT_CAPACITY`].
pub fn resolve_capacity(requested: i64) -> usize {
    usize::try_from(requested)
        .ok()
        .filter(|&capacity| capacity > 0)
        .unwrap_or(DEFAULT_CAPACITY)
}

/// A fixed-capacity box of variable-width items.
///
/// Capacity and size are measured in slots: an item of width `w` uses `w`
/// of them. Failed operations leave the box untouched.
///
/// Implementations must agree on `size`, `capacity`, `contains` and `count`
/// for any sequence of operations; only the order of [`Container::iter`]
/// may differ.
pub trait Container<T: SizedItem> {
    /// Creates an empty box. Non-positive capacities fall back to [`DEFAULT_CAPACITY`].
    fn with_capacity(capacity: i64) -> Self
    where
        Self: Sized;

    /// Slots currently occupied.
    fn size(&self) -> usize;

    /// Total slots, fixed at construction.
    fn capacity(&self) -> usize;

    /// Stores a copy of `item`. Returns false if it does not fit.
    fn add_item(&mut self, item: &T) -> bool;

    /// Removes the first item tagged `kind`. Returns false if there is none.
    fn remove(&mut self, kind: &str) -> bool;

    /// Returns true if an item tagged `kind` is stored.
    fn contains(&self, kind: &str) -> bool;

    /// Number of stored items tagged `kind`, regardless of their width.
    fn count(&self, kind: &str) -> usize;

    /// Iterates over stored items in the backing's enumeration order.
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Slots still free.
    fn remaining(&self) -> usize {
        self.capacity() - self.size()
    }
}
