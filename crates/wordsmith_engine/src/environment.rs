//! Environment matching.
//!
//! An environment `LEFT_RIGHT` constrains the characters around a rule's
//! application site. It is compiled once per rule: optional groups are
//! expanded, each variant is split at its first `_`, and both sides become
//! token lists.
//!
//! ```text
//! _        anywhere
//! V_V      between two members of V
//! #_       word start
//! _#       word end
//! [ei]_    after e or i
//! (C)V_    after V, optionally preceded by C
//! ```
//!
//! `#` is never part of the word. Inside a left context it anchors the tokens
//! after it to the start of the word; inside a right context it anchors the
//! tokens before it to the end.

use wordsmith_foundation::CategoryTable;
use wordsmith_foundation::symbols::{ANYWHERE, SITE, WORD_BOUNDARY};
use wordsmith_language::expand;

// =============================================================================
// Context Tokens
// =============================================================================

/// One position of a context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextToken {
    /// `#`: the word edge.
    Boundary,
    /// A category symbol; matches any member.
    Category(char),
    /// A literal character.
    Literal(char),
    /// `[abc]`: any one of the listed characters.
    Class(Vec<char>),
}

impl ContextToken {
    /// Returns true if the token accepts `c`.
    #[must_use]
    pub fn accepts(&self, c: char, categories: &CategoryTable) -> bool {
        match self {
            Self::Boundary => false,
            Self::Category(symbol) => categories.matches(*symbol, c),
            Self::Literal(l) => *l == c,
            Self::Class(members) => members.contains(&c),
        }
    }
}

/// Tokenizes one side of a concrete environment.
///
/// A stray `_` matches nothing and is dropped; an unmatched `[` is literal.
#[must_use]
pub fn tokenize_context(text: &str, categories: &CategoryTable) -> Vec<ContextToken> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '[' {
            if let Some(close) = chars[i + 1..].iter().position(|&x| x == ']') {
                tokens.push(ContextToken::Class(chars[i + 1..i + 1 + close].to_vec()));
                i += close + 2;
                continue;
            }
        }
        match c {
            WORD_BOUNDARY => tokens.push(ContextToken::Boundary),
            SITE => {}
            _ if categories.is_category(c) => tokens.push(ContextToken::Category(c)),
            _ => tokens.push(ContextToken::Literal(c)),
        }
        i += 1;
    }
    tokens
}

// =============================================================================
// Compiled Environment
// =============================================================================

/// One concrete `LEFT_RIGHT` variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    /// Tokens before the site, in reading order.
    pub left: Vec<ContextToken>,
    /// Tokens after the site, in reading order.
    pub right: Vec<ContextToken>,
}

impl Context {
    /// Matches a segment of `len` characters starting at `pos`.
    #[must_use]
    pub fn matches(&self, word: &[char], pos: usize, len: usize, categories: &CategoryTable) -> bool {
        self.matches_left(word, pos, categories) && self.matches_right(word, pos + len, categories)
    }

    fn matches_left(&self, word: &[char], pos: usize, categories: &CategoryTable) -> bool {
        let mut cursor = pos;
        for token in self.left.iter().rev() {
            if *token == ContextToken::Boundary {
                if cursor != 0 {
                    return false;
                }
                continue;
            }
            if cursor == 0 || !token.accepts(word[cursor - 1], categories) {
                return false;
            }
            cursor -= 1;
        }
        true
    }

    fn matches_right(&self, word: &[char], end: usize, categories: &CategoryTable) -> bool {
        let mut cursor = end;
        for token in &self.right {
            if *token == ContextToken::Boundary {
                if cursor != word.len() {
                    return false;
                }
                continue;
            }
            if cursor >= word.len() || !token.accepts(word[cursor], categories) {
                return false;
            }
            cursor += 1;
        }
        true
    }
}

/// A compiled environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    /// `_`: holds at every position.
    Anywhere,
    /// Holds if any variant holds. Empty when no variant has a site.
    Variants(Vec<Context>),
}

impl Environment {
    /// Compiles an environment string against a category table.
    #[must_use]
    pub fn compile(environment: &str, categories: &CategoryTable) -> Self {
        if environment.is_empty() || environment == ANYWHERE {
            return Self::Anywhere;
        }

        let variants: Vec<Context> = expand(environment)
            .iter()
            .filter_map(|variant| variant.split_once(SITE))
            .map(|(left, right)| Context {
                left: tokenize_context(left, categories),
                right: tokenize_context(right, categories),
            })
            .collect();

        if variants.iter().any(|v| v.left.is_empty() && v.right.is_empty()) {
            return Self::Anywhere;
        }
        tracing::trace!(environment, variants = variants.len(), "compiled environment");
        Self::Variants(variants)
    }

    /// Returns true if the environment holds around `word[pos..pos + len]`.
    #[must_use]
    pub fn matches(&self, word: &[char], pos: usize, len: usize, categories: &CategoryTable) -> bool {
        match self {
            Self::Anywhere => true,
            Self::Variants(variants) => variants
                .iter()
                .any(|v| v.matches(word, pos, len, categories)),
        }
    }

    /// Returns true if the environment holds at the gap before `word[gap]`.
    #[must_use]
    pub fn matches_gap(&self, word: &[char], gap: usize, categories: &CategoryTable) -> bool {
        self.matches(word, gap, 0, categories)
    }
}

/// Matches `environment` around the single character at `pos` of `word`.
///
/// Compiles on every call; rule application compiles once instead.
#[must_use]
pub fn matches(word: &str, pos: usize, environment: &str, categories: &CategoryTable) -> bool {
    let chars: Vec<char> = word.chars().collect();
    pos < chars.len() && Environment::compile(environment, categories).matches(&chars, pos, 1, categories)
}
