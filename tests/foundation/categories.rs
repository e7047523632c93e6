//! Integration tests for categories and the category table
//!
//! Tests sampling multisets, positional correspondence, and lookup.

use wordsmith_foundation::{Category, CategoryTable};

// =============================================================================
// Category
// =============================================================================

#[test]
fn weighted_members_repeat() {
    let vowels = Category::weighted('V', &[('a', 3), ('i', 1)]);
    assert_eq!(vowels.members(), &['a', 'a', 'a', 'i']);
    assert_eq!(vowels.unique_members(), &['a', 'i']);
    assert!(vowels.is_weighted());
    assert_eq!(vowels.weights(), vec![('a', 3), ('i', 1)]);
}

#[test]
fn correspondence_uses_distinct_members() {
    let stops = Category::from_chars('P', "pptk");
    assert_eq!(stops.index_of('t'), Some(1));
    assert_eq!(stops.member_at(2), Some('k'));
    assert_eq!(stops.member_at(3), None);
}

#[test]
fn display_lists_multiset() {
    let vowels = Category::weighted('V', &[('a', 2), ('e', 1)]);
    assert_eq!(vowels.to_string(), "V: aae");
}

// =============================================================================
// CategoryTable
// =============================================================================

#[test]
fn table_lookup_and_matching() {
    let table = CategoryTable::new()
        .with(Category::from_chars('C', "ptk"))
        .with(Category::from_chars('V', "ai"));

    assert_eq!(table.len(), 2);
    assert!(table.is_category('C'));
    assert!(!table.is_category('x'));
    assert!(table.matches('C', 't'));
    assert!(!table.matches('C', 'a'));
    assert!(table.matches('x', 'x'));
}

#[test]
fn redefinition_replaces_in_place() {
    let table = CategoryTable::new()
        .with(Category::from_chars('C', "ptk"))
        .with(Category::from_chars('V', "a"))
        .with(Category::from_chars('C', "bd"));

    let symbols: Vec<char> = table.iter().map(Category::symbol).collect();
    assert_eq!(symbols, vec!['C', 'V']);
    assert_eq!(table.get('C').map(Category::unique_members), Some(&['b', 'd'][..]));
}
