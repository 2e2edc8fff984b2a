//! Box backed by a flat, contiguous slot array.

use std::iter;

use chess_core::EMPTY_KIND;
use tracing::trace;

use crate::container::{resolve_capacity, Container};
use crate::item::{span_of, SizedItem};

/// A box storing each item as `width` identical copies in consecutive slots.
///
/// The first `size` slots are the live items in insertion order; every slot
/// after them is empty. Removing an item shifts everything behind it left,
/// so the free space is always one contiguous run at the end.
///
/// ```text
/// capacity 8, after adding PAWN(1) ROOK(2) QUEEN(3) PAWN(1):
/// PAWN ROOK ROOK QUEEN QUEEN QUEEN PAWN NONE
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotArrayBox<T> {
    slots: Vec<Option<T>>,
    size: usize,
}

impl<T: SizedItem> SlotArrayBox<T> {
    /// Creates an empty box. Non-positive capacities fall back to the default.
    pub fn new(capacity: i64) -> Self {
        let capacity = resolve_capacity(capacity);
        SlotArrayBox {
            slots: iter::repeat_with(|| None).take(capacity).collect(),
            size: 0,
        }
    }

    /// Finds the leftmost span in `[start, end)` whose item is tagged `kind`.
    ///
    /// `start` must be a span start. The scan jumps from span to span, so an
    /// item is examined once however wide it is. Returns `None` for an
    /// invalid range as well as for a miss.
    fn find_span_start(&self, kind: &str, start: usize, end: usize) -> Option<usize> {
        if start >= self.size || end > self.size || start >= end {
            return None;
        }
        let mut index = start;
        while index < end {
            let item = self.slots[index].as_ref()?;
            if item.kind_tag() == kind {
                return Some(index);
            }
            index += span_of(item);
        }
        None
    }

    /// The item copy held in slot `index`, if the slot is live.
    pub fn slot(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Kind tag of every slot, with [`EMPTY_KIND`] for unused ones.
    pub fn slot_kinds(&self) -> Vec<&str> {
        self.slots
            .iter()
            .map(|slot| slot.as_ref().map_or(EMPTY_KIND, SizedItem::kind_tag))
            .collect()
    }

    /// Iterates over `(span start, item)` pairs in insertion order.
    pub fn spans(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        let mut index = 0;
        iter::from_fn(move || {
            if index >= self.size {
                return None;
            }
            let start = index;
            let item = self.slots[start].as_ref()?;
            index += span_of(item);
            Some((start, item))
        })
    }
}

impl<T: SizedItem> Default for SlotArrayBox<T> {
    fn default() -> Self {
        SlotArrayBox::new(0)
    }
}

impl<T: SizedItem> Container<T> for SlotArrayBox<T> {
    fn with_capacity(capacity: i64) -> Self {
        SlotArrayBox::new(capacity)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn add_item(&mut self, item: &T) -> bool {
        let width = span_of(item);
        if self.size + width > self.capacity() {
            trace!(
                kind = item.kind_tag(),
                width,
                size = self.size,
                capacity = self.capacity(),
                "item does not fit"
            );
            return false;
        }
        for slot in &mut self.slots[self.size..self.size + width] {
            *slot = Some(item.clone());
        }
        self.size += width;
        true
    }

    fn remove(&mut self, kind: &str) -> bool {
        let Some(start) = self.find_span_start(kind, 0, self.size) else {
            trace!(kind, "no item to remove");
            return false;
        };
        let width = self.slots[start].as_ref().map_or(1, span_of);
        // Shift the tail left over the span, then clear the slots it vacated.
        let end = self.size;
        self.slots[start..end].rotate_left(width);
        for slot in &mut self.slots[end - width..end] {
            *slot = None;
        }
        self.size -= width;
        true
    }

    fn contains(&self, kind: &str) -> bool {
        self.find_span_start(kind, 0, self.size).is_some()
    }

    fn count(&self, kind: &str) -> usize {
        let mut count = 0;
        let mut next = self.find_span_start(kind, 0, self.size);
        while let Some(start) = next {
            count += 1;
            let after = start + self.slots[start].as_ref().map_or(1, span_of);
            next = self.find_span_start(kind, after, self.size);
        }
        count
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.spans().map(|(_, item)| item))
    }
}
