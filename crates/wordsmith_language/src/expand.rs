//! Parenthetical group expansion.
//!
//! Structure rules and environments share one notation for optional material:
//!
//! ```text
//! CV(C)        optional group        → CV, CVC
//! S(F,L)VC     optional alternatives → SVC, SFVC, SLVC
//! S(!F,L)VC    mandatory choice      → SFVC, SLVC
//! ```
//!
//! A pattern is parsed once into a flat list of [`Node`]s and then expanded by a
//! Cartesian walk. Only top-level groups are discovered; parentheses nested
//! inside a group stay literal text of the alternative they belong to. An
//! unmatched `(` is an ordinary character.

use std::collections::HashSet;

/// Marks a group as a mandatory choice.
pub const MANDATORY_MARKER: char = '!';

/// One element of a parsed pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Literal run copied verbatim.
    Literal(String),
    /// Parenthetical group.
    Group(Group),
}

/// A parenthetical group of alternatives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// Alternatives, trimmed, in source order.
    pub alternatives: Vec<String>,
    /// True for `(!...)` groups, which cannot be omitted.
    pub mandatory: bool,
}

impl Group {
    /// Parses the text between the parentheses.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let (mandatory, body) = match content.strip_prefix(MANDATORY_MARKER) {
            Some(rest) => (true, rest),
            None => (false, content),
        };
        Self {
            alternatives: split_top_level(body)
                .into_iter()
                .map(|alt| alt.trim().to_string())
                .collect(),
            mandatory,
        }
    }

    /// Texts this group can be replaced by, in expansion order.
    #[must_use]
    pub fn options(&self) -> Vec<&str> {
        let mut options = Vec::with_capacity(self.alternatives.len() + 1);
        if !self.mandatory {
            options.push("");
        }
        options.extend(self.alternatives.iter().map(String::as_str));
        options
    }
}

/// A pattern split into literal runs and groups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pattern {
    nodes: Vec<Node>,
}

impl Pattern {
    /// Parses a pattern, discovering balanced top-level groups.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let mut nodes = Vec::new();
        let mut literal = String::new();
        let mut i = 0;

        while i < chars.len() {
            if chars[i] == '(' {
                if let Some(close) = matching_paren(&chars, i) {
                    if !literal.is_empty() {
                        nodes.push(Node::Literal(std::mem::take(&mut literal)));
                    }
                    let content: String = chars[i + 1..close].iter().collect();
                    nodes.push(Node::Group(Group::parse(&content)));
                    i = close + 1;
                    continue;
                }
            }
            literal.push(chars[i]);
            i += 1;
        }

        if !literal.is_empty() {
            nodes.push(Node::Literal(literal));
        }
        Self { nodes }
    }

    /// The parsed nodes.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns true if the pattern contains at least one group.
    #[must_use]
    pub fn has_groups(&self) -> bool {
        self.nodes.iter().any(|n| matches!(n, Node::Group(_)))
    }

    /// Expands every group into concrete strings.
    ///
    /// Groups are resolved right to left, so the rightmost group varies
    /// slowest: `C(V)C(L)` gives `CC, CVC, CCL, CVCL`. The result never
    /// contains duplicates and keeps first-seen order.
    #[must_use]
    pub fn expand(&self) -> Vec<String> {
        let mut suffixes = vec![String::new()];

        for node in self.nodes.iter().rev() {
            suffixes = match node {
                Node::Literal(text) => suffixes
                    .into_iter()
                    .map(|suffix| format!("{text}{suffix}"))
                    .collect(),
                Node::Group(group) => {
                    let options = group.options();
                    let mut next = Vec::with_capacity(suffixes.len() * options.len());
                    for suffix in &suffixes {
                        for option in &options {
                            next.push(format!("{option}{suffix}"));
                        }
                    }
                    next
                }
            };
        }

        dedup_in_order(suffixes)
    }
}

/// Expands `pattern` into its concrete variants.
#[must_use]
pub fn expand(pattern: &str) -> Vec<String> {
    Pattern::parse(pattern).expand()
}

/// Index of the `)` closing the `(` at `open`, if balanced.
fn matching_paren(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, &c) in chars[open..].iter().enumerate() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Splits on commas that are not inside nested parentheses.
fn split_top_level(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&body[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);
    parts
}

fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
