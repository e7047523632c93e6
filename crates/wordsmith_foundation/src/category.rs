//! Phoneme categories.
//!
//! A [`Category`] is a named multiset of characters. Repetition encodes weight
//! for sampling; matching and positional correspondence only look at the
//! de-duplicated members in first-occurrence order.

use std::collections::HashMap;
use std::fmt;

/// A named class of interchangeable characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    symbol: char,
    /// Sampling multiset (weights expanded into repetitions).
    members: Vec<char>,
    /// Distinct members in first-occurrence order.
    unique: Vec<char>,
}

impl Category {
    /// Creates a category from its expanded member list.
    #[must_use]
    pub fn new(symbol: char, members: Vec<char>) -> Self {
        let mut unique = Vec::new();
        for &c in &members {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }
        Self {
            symbol,
            members,
            unique,
        }
    }

    /// Creates a category where each character appears once.
    #[must_use]
    pub fn from_chars(symbol: char, chars: &str) -> Self {
        Self::new(symbol, chars.chars().collect())
    }

    /// Creates a category from `(member, weight)` pairs.
    #[must_use]
    pub fn weighted(symbol: char, weighted: &[(char, usize)]) -> Self {
        let members = weighted
            .iter()
            .flat_map(|&(c, weight)| std::iter::repeat_n(c, weight))
            .collect();
        Self::new(symbol, members)
    }

    /// The category's symbol.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// The sampling multiset.
    #[must_use]
    pub fn members(&self) -> &[char] {
        &self.members
    }

    /// Distinct members in first-occurrence order.
    #[must_use]
    pub fn unique_members(&self) -> &[char] {
        &self.unique
    }

    /// Returns true if `c` belongs to this category.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.unique.contains(&c)
    }

    /// Position of `c` among the distinct members.
    #[must_use]
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.unique.iter().position(|&m| m == c)
    }

    /// Distinct member at `index`.
    #[must_use]
    pub fn member_at(&self, index: usize) -> Option<char> {
        self.unique.get(index).copied()
    }

    /// `(member, weight)` for each distinct member.
    #[must_use]
    pub fn weights(&self) -> Vec<(char, usize)> {
        self.unique
            .iter()
            .map(|&u| (u, self.members.iter().filter(|&&m| m == u).count()))
            .collect()
    }

    /// Returns true if any member is weighted above one.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.members.len() != self.unique.len()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.symbol)?;
        for c in &self.members {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// All categories of a grammar, in definition order.
///
/// Built once while parsing, then only borrowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<Category>,
    index: HashMap<char, usize>,
}

impl CategoryTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category, replacing an earlier definition with the same symbol.
    pub fn insert(&mut self, category: Category) {
        if let Some(&slot) = self.index.get(&category.symbol) {
            self.categories[slot] = category;
        } else {
            self.index.insert(category.symbol, self.categories.len());
            self.categories.push(category);
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, category: Category) -> Self {
        self.insert(category);
        self
    }

    /// Looks up a category by symbol.
    #[must_use]
    pub fn get(&self, symbol: char) -> Option<&Category> {
        self.index.get(&symbol).map(|&slot| &self.categories[slot])
    }

    /// Returns true if `symbol` names a category.
    #[must_use]
    pub fn is_category(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Returns true if `c` matches `symbol`: membership for categories,
    /// equality for literals.
    #[must_use]
    pub fn matches(&self, symbol: char, c: char) -> bool {
        match self.get(symbol) {
            Some(category) => category.contains(c),
            None => symbol == c,
        }
    }

    /// Iterates in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if no categories are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl FromIterator<Category> for CategoryTable {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut table = Self::new();
        for category in iter {
            table.insert(category);
        }
        table
    }
}
