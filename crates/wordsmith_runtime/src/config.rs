//! Settings for one run.

use std::path::PathBuf;

use wordsmith_foundation::{Error, ErrorKind, Result};

/// What a run produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Generate this many new words from the structure rules.
    Generate(usize),
    /// Run the `-dict` words through the rules.
    #[default]
    Dictionary,
}

/// Configuration for a run.
///
/// Built by the CLI parser, or directly with the `with_*` methods.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Grammar file to read.
    pub input: PathBuf,
    /// File the words are written to.
    pub output: PathBuf,
    /// Generation or dictionary processing.
    pub mode: Mode,
    /// Echo output lines to stdout.
    pub verbose: bool,
    /// Write `input → output` lines (dictionary mode only).
    pub show_input: bool,
    /// Append the rules that changed each word.
    pub show_rules: bool,
    /// Apply syllable rules, then syllabify and stress the results.
    pub syllabify: bool,
    /// Seed for reproducible sampling.
    pub seed: Option<u64>,
}

impl RunConfig {
    /// Creates a configuration that generates `count` words.
    #[must_use]
    pub fn generate(input: impl Into<PathBuf>, output: impl Into<PathBuf>, count: usize) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            mode: Mode::Generate(count),
            ..Self::default()
        }
    }

    /// Creates a configuration that processes dictionary words.
    #[must_use]
    pub fn dictionary(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            mode: Mode::Dictionary,
            ..Self::default()
        }
    }

    /// Builder method to set verbose echo.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builder method to set `input → output` lines.
    #[must_use]
    pub fn with_show_input(mut self, show_input: bool) -> Self {
        self.show_input = show_input;
        self
    }

    /// Builder method to set rule annotations.
    #[must_use]
    pub fn with_show_rules(mut self, show_rules: bool) -> Self {
        self.show_rules = show_rules;
        self
    }

    /// Builder method to set syllabification.
    #[must_use]
    pub fn with_syllabify(mut self, syllabify: bool) -> Self {
        self.syllabify = syllabify;
        self
    }

    /// Builder method to set the sampling seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Returns true in dictionary mode.
    #[must_use]
    pub fn is_dictionary(&self) -> bool {
        self.mode == Mode::Dictionary
    }

    /// Checks flag combinations and the word count.
    ///
    /// # Errors
    /// Fails when `input → output` lines are requested outside dictionary
    /// mode or the word count is zero.
    pub fn validate(&self) -> Result<()> {
        if self.show_input && !self.is_dictionary() {
            return Err(Error::usage("-i flag can only be used with -d flag"));
        }
        if self.mode == Mode::Generate(0) {
            return Err(Error::new(ErrorKind::InvalidWordCount(
                "a positive integer.".to_string(),
            )));
        }
        Ok(())
    }
}
