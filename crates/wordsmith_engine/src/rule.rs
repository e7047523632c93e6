//! Character-level sound-change application.
//!
//! Every rule is one left-to-right scan over the word. A match is replaced
//! and the scan resumes after the matched input, so output is never
//! re-scanned by the same rule.

use wordsmith_foundation::CategoryTable;
use wordsmith_language::SoundChange;

use crate::environment::Environment;
use crate::pattern::{InputPattern, replacement_output};

/// What a rule does at a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleAction {
    /// Empty input: emit the output at every gap where the environment holds.
    Insert,
    /// Empty output: drop the matched segment.
    Delete,
    /// Replace the matched segment.
    Replace,
}

/// A sound change compiled against a category table.
#[derive(Clone, Debug)]
pub struct CompiledRule<'r> {
    rule: &'r SoundChange,
    action: RuleAction,
    input: InputPattern,
    output: Vec<char>,
    environment: Environment,
}

impl<'r> CompiledRule<'r> {
    /// Compiles `rule`.
    #[must_use]
    pub fn compile(rule: &'r SoundChange, categories: &CategoryTable) -> Self {
        let action = if rule.is_insertion() {
            RuleAction::Insert
        } else if rule.is_deletion() {
            RuleAction::Delete
        } else {
            RuleAction::Replace
        };
        Self {
            rule,
            action,
            input: InputPattern::new(&rule.input),
            output: rule.output.chars().collect(),
            environment: Environment::compile(&rule.environment, categories),
        }
    }

    /// The source rule.
    #[must_use]
    pub fn rule(&self) -> &'r SoundChange {
        self.rule
    }

    /// What the rule does at a match.
    #[must_use]
    pub fn action(&self) -> RuleAction {
        self.action
    }

    /// Applies the rule to `word`.
    #[must_use]
    pub fn apply(&self, word: &str, categories: &CategoryTable) -> String {
        let chars: Vec<char> = word.chars().collect();
        match self.action {
            RuleAction::Insert => self.insert(&chars, categories),
            RuleAction::Delete | RuleAction::Replace => self.rewrite(&chars, categories),
        }
    }

    fn insert(&self, chars: &[char], categories: &CategoryTable) -> String {
        if self.output.is_empty() {
            return chars.iter().collect();
        }
        let mut result = String::with_capacity(chars.len() + self.output.len());
        for gap in 0..=chars.len() {
            if self.environment.matches_gap(chars, gap, categories) {
                result.extend(&self.output);
            }
            if let Some(&c) = chars.get(gap) {
                result.push(c);
            }
        }
        result
    }

    fn rewrite(&self, chars: &[char], categories: &CategoryTable) -> String {
        let len = self.input.len();
        let mut result = String::with_capacity(chars.len());
        let mut pos = 0;

        while pos < chars.len() {
            if self.input.matches_at(chars, pos, categories)
                && self.environment.matches(chars, pos, len, categories)
            {
                let replacement = match self.action {
                    RuleAction::Delete => Some(String::new()),
                    _ => replacement_output(
                        &chars[pos..pos + len],
                        self.input.symbols(),
                        &self.output,
                        categories,
                    ),
                };
                if let Some(replacement) = replacement {
                    result.push_str(&replacement);
                    pos += len;
                    continue;
                }
            }
            result.push(chars[pos]);
            pos += 1;
        }
        result
    }
}

/// Compiles and applies a single rule.
#[must_use]
pub fn apply_rule(word: &str, rule: &SoundChange, categories: &CategoryTable) -> String {
    CompiledRule::compile(rule, categories).apply(word, categories)
}
