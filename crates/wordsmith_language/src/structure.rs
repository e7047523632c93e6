//! Word structure rules.
//!
//! A structure rule is a template over category symbols and literals with
//! optional groups and a trailing weight: `CV(C){3}`. It is expanded once at
//! load time; every concrete template inherits the rule's weight.

use std::fmt;

use wordsmith_foundation::Result;

use crate::expand::expand;
use crate::weight::split_trailing_weight;

/// Characters a structure rule may contain besides letters.
pub const STRUCTURE_PUNCTUATION: [char; 4] = ['(', ')', '!', ','];

/// A parsed, expanded structure rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructureRule {
    /// Rule text without its weight annotation.
    pub source: String,
    /// Relative sampling weight (at least 1).
    pub weight: usize,
    /// Concrete templates produced by expansion.
    pub templates: Vec<String>,
    /// 1-based source line.
    pub line: usize,
}

impl StructureRule {
    /// Parses and expands a structure rule line.
    ///
    /// # Errors
    /// Fails when the weight annotation is malformed, misplaced, or not a
    /// positive integer.
    pub fn parse(text: &str, line: usize) -> Result<Self> {
        let (body, weight) = split_trailing_weight(text.trim(), line)?;
        let body = body.trim();
        Ok(Self {
            source: body.to_string(),
            weight,
            templates: expand(body),
            line,
        })
    }

    /// Returns true if expansion produced more than one template.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.templates.len() > 1
    }
}

impl fmt::Display for StructureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weight == 1 {
            write!(f, "{}", self.source)
        } else {
            write!(f, "{}{{{}}}", self.source, self.weight)
        }
    }
}

/// Returns true if `line` has the shape of a structure rule.
///
/// Everything before the first `{` must be letters or group punctuation; the
/// weight itself is validated later by [`StructureRule::parse`].
#[must_use]
pub fn looks_like_structure(line: &str) -> bool {
    let head = line.split('{').next().unwrap_or_default();
    !head.is_empty()
        && head
            .chars()
            .all(|c| c.is_alphabetic() || STRUCTURE_PUNCTUATION.contains(&c))
}
