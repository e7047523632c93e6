//! The rule pipeline: every word runs through every rule, in file order.

use wordsmith_foundation::symbols::strip_prosody;
use wordsmith_foundation::{CategoryTable, DiagnosticKind, Diagnostics};
use wordsmith_language::SoundChange;

use crate::rule::CompiledRule;
use crate::syllable::{apply_stress_conditioned, apply_syllable_rule};

// =============================================================================
// Options
// =============================================================================

/// Pipeline settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Apply syllable-sensitive rules instead of skipping them.
    pub syllable_mode: bool,
    /// Record which rules changed each word.
    pub track_rules: bool,
    /// Strip `.`, `ˈ`, `ˌ` from words before the first rule.
    pub clean_marks: bool,
}

impl PipelineOptions {
    /// Creates options with everything off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables syllable-sensitive rules.
    #[must_use]
    pub fn with_syllable_mode(mut self, enabled: bool) -> Self {
        self.syllable_mode = enabled;
        self
    }

    /// Enables or disables rule tracking.
    #[must_use]
    pub fn with_track_rules(mut self, enabled: bool) -> Self {
        self.track_rules = enabled;
        self
    }

    /// Enables or disables mark cleaning.
    #[must_use]
    pub fn with_clean_marks(mut self, enabled: bool) -> Self {
        self.clean_marks = enabled;
        self
    }
}

/// Returns true if some rule needs existing syllable and stress marks.
///
/// Dictionary words keep their marks only when syllable mode is on and such
/// a rule exists.
#[must_use]
pub fn rules_need_marks(rules: &[SoundChange], syllable_mode: bool) -> bool {
    syllable_mode
        && rules
            .iter()
            .any(|r| r.is_syllable_level() || r.stress_context().is_some())
}

// =============================================================================
// Pipeline
// =============================================================================

/// How one rule is applied.
#[derive(Clone, Debug)]
enum Step<'r> {
    Characters(CompiledRule<'r>),
    Syllables(&'r SoundChange),
    Stressed(&'r SoundChange),
}

impl Step<'_> {
    fn rule(&self) -> &SoundChange {
        match self {
            Self::Characters(compiled) => compiled.rule(),
            Self::Syllables(rule) | Self::Stressed(rule) => rule,
        }
    }

    fn apply(&self, word: &str, categories: &CategoryTable) -> String {
        match self {
            Self::Characters(compiled) => compiled.apply(word, categories),
            Self::Syllables(rule) => apply_syllable_rule(word, rule),
            Self::Stressed(rule) => apply_stress_conditioned(word, rule),
        }
    }
}

/// Result of running the pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Rewritten words, in input order.
    pub words: Vec<String>,
    /// Per word, the rules that changed it. `None` unless tracking was on.
    pub applied: Option<Vec<Vec<String>>>,
    /// Problems found while preparing the rules.
    pub diagnostics: Diagnostics,
}

/// Rules prepared for one run.
#[derive(Clone, Debug)]
pub struct Pipeline<'r> {
    steps: Vec<Step<'r>>,
    categories: &'r CategoryTable,
    options: PipelineOptions,
    diagnostics: Diagnostics,
}

impl<'r> Pipeline<'r> {
    /// Prepares `rules` for application.
    ///
    /// Category-to-category rules between categories of different sizes are
    /// dropped with a warning. Syllable-sensitive rules are dropped silently
    /// unless syllable mode is on.
    #[must_use]
    pub fn new(rules: &'r [SoundChange], categories: &'r CategoryTable, options: PipelineOptions) -> Self {
        let mut diagnostics = Diagnostics::new();
        let mut steps = Vec::with_capacity(rules.len());

        for rule in rules {
            if let Some((from, to)) = rule.category_pair(categories) {
                let from_len = categories.get(from).map_or(0, |c| c.unique_members().len());
                let to_len = categories.get(to).map_or(0, |c| c.unique_members().len());
                if from_len != to_len {
                    diagnostics.warn(
                        DiagnosticKind::CategoryLengthMismatch,
                        Some(rule.line),
                        format!(
                            "Categories {from} and {to} have different lengths on line {} ({from_len} vs {to_len}). Rule '{rule}' ignored.",
                            rule.line
                        ),
                    );
                    continue;
                }
            }

            if rule.is_syllable_sensitive() {
                if !options.syllable_mode {
                    tracing::trace!(rule = %rule, "skipping syllable-sensitive rule");
                    continue;
                }
                if rule.is_syllable_level() {
                    steps.push(Step::Syllables(rule));
                    continue;
                }
                if rule.stress_context().is_some() {
                    steps.push(Step::Stressed(rule));
                    continue;
                }
            }

            steps.push(Step::Characters(CompiledRule::compile(rule, categories)));
        }

        Self {
            steps,
            categories,
            options,
            diagnostics,
        }
    }

    /// Number of rules that will be applied.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no rule survived preparation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Problems found while preparing the rules.
    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Runs one word through every rule.
    ///
    /// Returns the final word and the rules that changed it.
    #[must_use]
    pub fn apply_word(&self, word: &str) -> (String, Vec<String>) {
        let mut current = if self.options.clean_marks {
            strip_prosody(word)
        } else {
            word.to_string()
        };
        let mut applied = Vec::new();

        for step in &self.steps {
            let next = step.apply(&current, self.categories);
            if next != current {
                tracing::debug!(rule = %step.rule(), before = %current, after = %next, "rule applied");
                if self.options.track_rules {
                    applied.push(step.rule().source.clone());
                }
                current = next;
            }
        }
        (current, applied)
    }

    /// Runs every word through every rule.
    #[must_use]
    pub fn run<S: AsRef<str>>(self, words: &[S]) -> Outcome {
        let mut results = Vec::with_capacity(words.len());
        let mut applied = Vec::with_capacity(if self.options.track_rules { words.len() } else { 0 });

        for word in words {
            let (result, rules) = self.apply_word(word.as_ref());
            results.push(result);
            if self.options.track_rules {
                applied.push(rules);
            }
        }

        tracing::info!(words = results.len(), rules = self.steps.len(), "applied sound changes");
        Outcome {
            words: results,
            applied: self.options.track_rules.then_some(applied),
            diagnostics: self.diagnostics,
        }
    }
}

/// Applies `rules` to every word.
#[must_use]
pub fn apply_rules<S: AsRef<str>>(
    words: &[S],
    rules: &[SoundChange],
    categories: &CategoryTable,
    options: PipelineOptions,
) -> Outcome {
    Pipeline::new(rules, categories, options).run(words)
}
