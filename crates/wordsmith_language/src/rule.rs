//! Sound-change rule notation.
//!
//! ```text
//! input/output               anywhere
//! input/output/environment   only where the environment holds
//! input//                    deletion anywhere
//! input///environment        deletion in context
//! ```
//!
//! `>` and `→` are accepted as separators and normalized to `/` before
//! parsing. An empty environment means `_`.

use std::fmt;

use thiserror::Error;
use wordsmith_foundation::symbols::{
    ALTERNATE_SEPARATORS, ANYWHERE, DOUBLING, PRIMARY_STRESS, RULE_SEPARATOR, SECONDARY_STRESS,
    SYLLABLE, UNSTRESSED, is_prosodic,
};
use wordsmith_foundation::CategoryTable;

/// Why a rule line could not be split into its parts.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RuleShapeError {
    /// No separator at all.
    #[error("rule has no separator")]
    MissingSeparator,
    /// More parts than `input/output/environment`.
    #[error("rule has {0} parts, expected 2 or 3")]
    TooManyParts(usize),
}

/// A parsed sound-change rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoundChange {
    /// Segment to match; empty for insertions.
    pub input: String,
    /// Replacement; empty for deletions.
    pub output: String,
    /// `LEFT_RIGHT` context.
    pub environment: String,
    /// Normalized rule text, used for annotations.
    pub source: String,
    /// 1-based source line.
    pub line: usize,
}

impl SoundChange {
    /// Creates a rule from its parts.
    #[must_use]
    pub fn new(input: &str, output: &str, environment: &str) -> Self {
        let environment = if environment.is_empty() {
            ANYWHERE
        } else {
            environment
        };
        Self {
            input: input.to_string(),
            output: output.to_string(),
            environment: environment.to_string(),
            source: format!("{input}/{output}/{environment}"),
            line: 0,
        }
    }

    /// Sets the source line.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Parses a rule line.
    ///
    /// # Errors
    /// Returns a [`RuleShapeError`] when the line does not have one of the
    /// accepted shapes.
    pub fn parse(text: &str, line: usize) -> Result<Self, RuleShapeError> {
        let normalized = normalize_separators(text);

        let deletion = normalized
            .split_once("//")
            .filter(|(_, rest)| !rest.contains("//"))
            .and_then(|(input, rest)| rest.strip_prefix(RULE_SEPARATOR).map(|env| (input, env)));
        if let Some((input, environment)) = deletion {
            let mut rule = Self::new(input, "", environment).at_line(line);
            rule.source = normalized;
            return Ok(rule);
        }

        let parts: Vec<&str> = normalized.split(RULE_SEPARATOR).collect();
        let mut rule = match parts.as_slice() {
            [_] => return Err(RuleShapeError::MissingSeparator),
            [input, output] => Self::new(input, output, ANYWHERE),
            [input, output, environment] => Self::new(input, output, environment),
            _ => return Err(RuleShapeError::TooManyParts(parts.len())),
        };
        rule.source = normalized;
        Ok(rule.at_line(line))
    }

    /// Returns true for insertion rules (empty input).
    #[must_use]
    pub fn is_insertion(&self) -> bool {
        self.input.is_empty()
    }

    /// Returns true for deletion rules (empty output).
    #[must_use]
    pub fn is_deletion(&self) -> bool {
        !self.input.is_empty() && self.output.is_empty()
    }

    /// Returns true if the output is exactly the doubling marker.
    #[must_use]
    pub fn is_doubling(&self) -> bool {
        let mut chars = self.output.chars();
        chars.next() == Some(DOUBLING) && chars.next().is_none()
    }

    /// Returns true if matching depends on syllables or stress.
    #[must_use]
    pub fn is_syllable_sensitive(&self) -> bool {
        self.input
            .chars()
            .chain(self.output.chars())
            .chain(self.environment.chars())
            .any(is_prosodic)
    }

    /// Returns true if the rule operates on whole syllables (`σ`).
    #[must_use]
    pub fn is_syllable_level(&self) -> bool {
        self.input.contains(SYLLABLE) || self.output.contains(SYLLABLE)
    }

    /// Stress symbol conditioning a character rule, if any.
    ///
    /// Primary wins over secondary, which wins over unstressed.
    #[must_use]
    pub fn stress_context(&self) -> Option<char> {
        [PRIMARY_STRESS, SECONDARY_STRESS, UNSTRESSED]
            .into_iter()
            .find(|&mark| self.environment.contains(mark))
    }

    /// The `(input, output)` symbols if this rule maps one category onto
    /// another.
    #[must_use]
    pub fn category_pair(&self, categories: &CategoryTable) -> Option<(char, char)> {
        let input = single_char(&self.input)?;
        let output = single_char(&self.output)?;
        (categories.is_category(input) && categories.is_category(output))
            .then_some((input, output))
    }
}

impl fmt::Display for SoundChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Returns true if `line` contains any rule separator.
#[must_use]
pub fn is_rule_line(line: &str) -> bool {
    line.contains(RULE_SEPARATOR) || ALTERNATE_SEPARATORS.iter().any(|&c| line.contains(c))
}

/// Rewrites `>` and `→` to `/`.
#[must_use]
pub fn normalize_separators(text: &str) -> String {
    text.chars()
        .map(|c| {
            if ALTERNATE_SEPARATORS.contains(&c) {
                RULE_SEPARATOR
            } else {
                c
            }
        })
        .collect()
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
