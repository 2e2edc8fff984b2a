//! Box backed by an owned singly-linked chain.

use std::fmt;

use tracing::trace;

use crate::container::{resolve_capacity, Container};
use crate::item::{span_of, SizedItem};

struct Node<T> {
    value: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// A box that keeps one node per item, newest first.
///
/// Each node owns its successor and the box owns the head. Size is still
/// counted in slots, so a width-3 item adds one node but three to `size`.
pub struct ChainBox<T> {
    head: Link<T>,
    size: usize,
    capacity: usize,
}

impl<T: SizedItem> ChainBox<T> {
    /// Creates an empty box. Non-positive capacities fall back to the default.
    pub fn new(capacity: i64) -> Self {
        ChainBox {
            head: None,
            size: 0,
            capacity: resolve_capacity(capacity),
        }
    }

    /// Iterates from the head, i.e. from the most recently added item.
    pub fn nodes(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Number of nodes in the chain.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }
}

impl<T: SizedItem> Default for ChainBox<T> {
    fn default() -> Self {
        ChainBox::new(0)
    }
}

impl<T: SizedItem> Container<T> for ChainBox<T> {
    fn with_capacity(capacity: i64) -> Self {
        ChainBox::new(capacity)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn add_item(&mut self, item: &T) -> bool {
        let width = span_of(item);
        if self.size + width > self.capacity {
            trace!(
                kind = item.kind_tag(),
                width,
                size = self.size,
                capacity = self.capacity,
                "item does not fit"
            );
            return false;
        }
        self.push_front(item.clone());
        self.size += width;
        true
    }

    fn remove(&mut self, kind: &str) -> bool {
        let mut link = &mut self.head;
        loop {
            match link {
                None => {
                    trace!(kind, "no item to remove");
                    return false;
                }
                Some(node) if node.value.kind_tag() == kind => {
                    let width = span_of(&node.value);
                    // Hand the tail to whoever pointed at the removed node.
                    let next = node.next.take();
                    *link = next;
                    self.size -= width;
                    return true;
                }
                Some(node) => link = &mut node.next,
            }
        }
    }

    fn contains(&self, kind: &str) -> bool {
        self.nodes().any(|item| item.kind_tag() == kind)
    }

    fn count(&self, kind: &str) -> usize {
        self.nodes().filter(|item| item.kind_tag() == kind).count()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.nodes())
    }
}

impl<T: SizedItem> Clone for ChainBox<T> {
    fn clone(&self) -> Self {
        let values: Vec<&T> = self.nodes().collect();
        let mut copy = ChainBox {
            head: None,
            size: self.size,
            capacity: self.capacity,
        };
        for value in values.into_iter().rev() {
            copy.push_front(value.clone());
        }
        copy
    }
}

impl<T> Drop for ChainBox<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: SizedItem + fmt::Debug> fmt::Debug for ChainBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainBox")
            .field("size", &self.size)
            .field("capacity", &self.capacity)
            .field("items", &self.nodes().collect::<Vec<_>>())
            .finish()
    }
}

/// Borrowing iterator over a [`ChainBox`], head first.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Token(&'static str, usize);

    impl SizedItem for Token {
        fn kind_tag(&self) -> &str {
            self.0
        }
        fn width(&self) -> usize {
            self.1
        }
    }

    const PAWN: Token = Token("PAWN", 1);
    const ROOK: Token = Token("ROOK", 2);
    const QUEEN: Token = Token("QUEEN", 3);

    fn kinds(items: &ChainBox<Token>) -> Vec<&'static str> {
        items.nodes().map(|t| t.0).collect()
    }

    fn filled() -> ChainBox<Token> {
        let mut items = ChainBox::new(8);
        for token in [PAWN, ROOK, QUEEN, PAWN, ROOK] {
            items.add_item(&token);
        }
        items
    }

    #[test]
    fn non_positive_capacity_uses_default() {
        assert_eq!(ChainBox::<Token>::new(0).capacity(), 64);
        assert_eq!(ChainBox::<Token>::new(-1).capacity(), 64);
        assert_eq!(ChainBox::<Token>::new(12).capacity(), 12);
    }

    #[test]
    fn inserts_at_head() {
        let items = filled();
        assert_eq!(kinds(&items), ["PAWN", "QUEEN", "ROOK", "PAWN"]);
        assert_eq!(items.size(), 7);
        assert_eq!(items.node_count(), 4);
    }

    #[test]
    fn overflowing_add_changes_nothing() {
        let mut items = filled();
        assert!(!items.add_item(&ROOK));
        assert_eq!(kinds(&items), ["PAWN", "QUEEN", "ROOK", "PAWN"]);
        assert_eq!(items.size(), 7);
    }

    #[test]
    fn remove_head_middle_and_tail() {
        let mut items = filled();
        assert!(items.remove("QUEEN"));
        assert_eq!(kinds(&items), ["PAWN", "ROOK", "PAWN"]);
        assert_eq!(items.size(), 4);

        assert!(items.remove("PAWN"));
        assert_eq!(kinds(&items), ["ROOK", "PAWN"]);
        assert!(items.remove("PAWN"));
        assert_eq!(kinds(&items), ["ROOK"]);
        assert!(items.remove("ROOK"));
        assert!(items.is_empty());
        assert!(!items.remove("ROOK"));
    }

    #[test]
    fn count_is_per_node() {
        let mut items = ChainBox::new(8);
        items.add_item(&QUEEN);
        assert_eq!(items.count("QUEEN"), 1);
        assert_eq!(items.size(), 3);
        let items = filled();
        assert_eq!(items.count("PAWN"), 2);
        assert!(items.contains("ROOK"));
        assert!(!items.contains("KING"));
    }

    #[test]
    fn clone_preserves_order_and_is_independent() {
        let original = filled();
        let mut copy = original.clone();
        assert_eq!(kinds(&copy), kinds(&original));
        assert_eq!(copy.size(), original.size());
        copy.remove("QUEEN");
        assert!(original.contains("QUEEN"));
        assert!(!copy.contains("QUEEN"));
    }

    #[test]
    fn long_chains_drop_without_recursion() {
        let mut items = ChainBox::new(200_000);
        for _ in 0..200_000 {
            items.add_item(&PAWN);
        }
        assert_eq!(items.size(), 200_000);
        drop(items);
    }
}
