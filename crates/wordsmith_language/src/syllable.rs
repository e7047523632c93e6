//! The `-syll` section: allowed onsets, codas, and stress patterns.
//!
//! ```text
//! ALLOWED_ONSETS: C CL s
//! ALLOWED_CODAS: n s
//! STRESS_PATTERNS: 1 2 1-3
//! ```
//!
//! Onset and coda entries may mention categories; they expand to every
//! combination of the categories' distinct members.

use std::fmt;

use wordsmith_foundation::{CategoryTable, DiagnosticKind, Diagnostics};

const ONSETS_PREFIX: &str = "ALLOWED_ONSETS:";
const CODAS_PREFIX: &str = "ALLOWED_CODAS:";
const STRESS_PREFIX: &str = "STRESS_PATTERNS:";

/// Primary and optional secondary stress positions, 1-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StressPattern {
    /// Syllable receiving primary stress.
    pub primary: usize,
    /// Syllable receiving secondary stress.
    pub secondary: Option<usize>,
}

impl StressPattern {
    /// Creates a pattern with primary stress only.
    #[must_use]
    pub const fn primary(primary: usize) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Creates a pattern with primary and secondary stress.
    #[must_use]
    pub const fn with_secondary(primary: usize, secondary: usize) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Parses `N` or `N-M`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let position = |s: &str| s.parse::<usize>().ok().filter(|&n| n > 0);
        match text.split_once('-') {
            Some((primary, secondary)) => {
                Some(Self::with_secondary(position(primary)?, position(secondary)?))
            }
            None => Some(Self::primary(position(text)?)),
        }
    }

    /// Returns true if every position exists in a word of `syllables` syllables.
    #[must_use]
    pub fn fits(&self, syllables: usize) -> bool {
        self.primary <= syllables && self.secondary.is_none_or(|s| s <= syllables)
    }
}

impl fmt::Display for StressPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}-{secondary}", self.primary),
            None => write!(f, "{}", self.primary),
        }
    }
}

/// Parsed syllabification rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyllableSpec {
    /// Allowed onsets, categories expanded.
    pub onsets: Vec<String>,
    /// Allowed codas, categories expanded.
    pub codas: Vec<String>,
    /// Stress patterns to choose from.
    pub stress_patterns: Vec<StressPattern>,
}

impl SyllableSpec {
    /// Parses the collected `-syll` lines.
    ///
    /// Unusable stress patterns are reported and skipped; unknown lines are
    /// ignored.
    pub fn parse(
        lines: &[(String, usize)],
        categories: &CategoryTable,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let mut spec = Self::default();

        for (line, line_num) in lines {
            let line = line.trim();
            if let Some(values) = line.strip_prefix(ONSETS_PREFIX) {
                for value in values.split_whitespace() {
                    spec.onsets.extend(expand_categories(value, categories));
                }
            } else if let Some(values) = line.strip_prefix(CODAS_PREFIX) {
                for value in values.split_whitespace() {
                    spec.codas.extend(expand_categories(value, categories));
                }
            } else if let Some(values) = line.strip_prefix(STRESS_PREFIX) {
                for value in values.split_whitespace() {
                    match StressPattern::parse(value) {
                        Some(pattern) => spec.stress_patterns.push(pattern),
                        None => diagnostics.warn(
                            DiagnosticKind::InvalidStressPattern,
                            Some(*line_num),
                            format!("Invalid stress pattern '{value}', skipping"),
                        ),
                    }
                }
            }
        }

        spec
    }

    /// Returns true if no onsets or codas were given.
    #[must_use]
    pub fn has_no_boundaries(&self) -> bool {
        self.onsets.is_empty() && self.codas.is_empty()
    }
}

impl fmt::Display for SyllableSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SyllabificationRules(onsets={}, codas={}, stress_patterns={})",
            self.onsets.len(),
            self.codas.len(),
            self.stress_patterns.len()
        )
    }
}

/// Expands category symbols in `text` into every concrete string.
#[must_use]
pub fn expand_categories(text: &str, categories: &CategoryTable) -> Vec<String> {
    let mut results = vec![String::new()];
    for c in text.chars() {
        results = match categories.get(c) {
            Some(category) => results
                .iter()
                .flat_map(|prefix| {
                    category
                        .unique_members()
                        .iter()
                        .map(move |m| format!("{prefix}{m}"))
                })
                .collect(),
            None => results
                .into_iter()
                .map(|mut prefix| {
                    prefix.push(c);
                    prefix
                })
                .collect(),
        };
    }
    results
}
