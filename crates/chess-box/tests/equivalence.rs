//! Integration tests: both box backings must behave identically apart from
//! enumeration order.

use chess_box::{ChainBox, Container, PieceInventory, SizedItem, SlotArrayBox};
use chess_core::{Piece, PieceKind};
use proptest::prelude::*;

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

static TOKENS: [Token; 4] = [
    Token("PAWN", 1),
    Token("ROOK", 2),
    Token("QUEEN", 3),
    Token("KING", 4),
];

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..TOKENS.len()).prop_map(Op::Add),
        (0..TOKENS.len()).prop_map(Op::Remove),
    ]
}

fn sorted_kinds<C: Container<Token>>(items: &C) -> Vec<&str> {
    let mut kinds: Vec<&str> = items.iter().map(SizedItem::kind_tag).collect();
    kinds.sort_unstable();
    kinds
}

fn assert_agree(array: &SlotArrayBox<Token>, chain: &ChainBox<Token>) {
    assert_eq!(array.size(), chain.size());
    assert_eq!(array.capacity(), chain.capacity());
    for token in &TOKENS {
        assert_eq!(array.contains(token.0), chain.contains(token.0));
        assert_eq!(array.count(token.0), chain.count(token.0));
    }
    assert_eq!(sorted_kinds(array), sorted_kinds(chain));
}

#[test]
fn test_capacity_eight_scenario() {
    let mut array = SlotArrayBox::new(8);
    let mut chain = ChainBox::new(8);
    for index in [0, 1, 2, 0, 1] {
        let token = &TOKENS[index];
        array.add_item(token);
        chain.add_item(token);
    }

    assert_eq!(
        array.slot_kinds(),
        ["PAWN", "ROOK", "ROOK", "QUEEN", "QUEEN", "QUEEN", "PAWN", "NONE"]
    );
    assert_eq!(array.size(), 7);
    let head_first: Vec<&str> = chain.iter().map(|t| t.0).collect();
    assert_eq!(head_first, ["PAWN", "QUEEN", "ROOK", "PAWN"]);
    assert_agree(&array, &chain);

    assert!(!array.add_item(&TOKENS[1]));
    assert!(!chain.add_item(&TOKENS[1]));
    assert_eq!(array.size(), 7);
    assert_agree(&array, &chain);

    assert!(array.remove("QUEEN"));
    assert!(chain.remove("QUEEN"));
    assert_eq!(
        array.slot_kinds(),
        ["PAWN", "ROOK", "ROOK", "PAWN", "NONE", "NONE", "NONE", "NONE"]
    );
    assert_eq!(array.size(), 4);
    assert_agree(&array, &chain);
}

#[test]
fn test_inventory_backings_agree() {
    let mut by_array: PieceInventory<SlotArrayBox<Piece>> =
        PieceInventory::new("black", "white", 12);
    let mut by_chain: PieceInventory<ChainBox<Piece>> = PieceInventory::new("black", "white", 12);

    let pieces = [
        Piece::new(PieceKind::King, "WHITE"),
        Piece::new(PieceKind::Queen, "WHITE"),
        Piece::new(PieceKind::Bishop, "WHITE"),
        Piece::new(PieceKind::Pawn, "WHITE"),
        Piece::new(PieceKind::Knight, "BLACK"),
        Piece::new(PieceKind::Knight, "WHITE"),
    ];
    for piece in &pieces {
        assert_eq!(by_array.add_piece(piece), by_chain.add_piece(piece));
    }
    assert_eq!(by_array.side2_pieces().size(), 12);
    assert_eq!(by_chain.side2_pieces().size(), 12);
    assert!(!by_array.contains("KNIGHT", "WHITE"));
    assert!(by_chain.contains("KNIGHT", "BLACK"));

    assert!(by_array.remove_piece("QUEEN", "WHITE"));
    assert!(by_chain.remove_piece("QUEEN", "WHITE"));
    assert_eq!(
        by_array.side2_pieces().size(),
        by_chain.side2_pieces().size()
    );
    assert_eq!(by_array.side2_pieces().size(), 8);
}

proptest! {
    #[test]
    fn backings_agree_on_any_sequence(
        capacity in -2i64..20,
        ops in prop::collection::vec(op_strategy(), 0..60)
    ) {
        let mut array = SlotArrayBox::new(capacity);
        let mut chain = ChainBox::new(capacity);
        for op in ops {
            match op {
                Op::Add(index) => {
                    let token = &TOKENS[index];
                    prop_assert_eq!(array.add_item(token), chain.add_item(token));
                }
                Op::Remove(index) => {
                    let kind = TOKENS[index].0;
                    prop_assert_eq!(array.remove(kind), chain.remove(kind));
                }
            }
            assert_agree(&array, &chain);
        }
    }

    #[test]
    fn size_tracks_widths_and_failures_change_nothing(
        ops in prop::collection::vec(op_strategy(), 0..60)
    ) {
        let mut array = SlotArrayBox::new(10);
        let mut expected = 0usize;
        for op in ops {
            let before = array.clone();
            match op {
                Op::Add(index) => {
                    let token = &TOKENS[index];
                    if array.add_item(token) {
                        expected += token.1;
                        prop_assert!(array.contains(token.0));
                    } else {
                        prop_assert!(expected + token.1 > array.capacity());
                        prop_assert_eq!(&array, &before);
                    }
                }
                Op::Remove(index) => {
                    let token = &TOKENS[index];
                    if array.remove(token.0) {
                        expected -= token.1;
                        prop_assert_eq!(array.count(token.0), before.count(token.0) - 1);
                    } else {
                        prop_assert_eq!(&array, &before);
                    }
                }
            }
            prop_assert_eq!(array.size(), expected);
            prop_assert!(array.size() <= array.capacity());
            let live = array.slot_kinds().iter().filter(|kind| **kind != "NONE").count();
            prop_assert_eq!(live, expected);
        }
    }
}
