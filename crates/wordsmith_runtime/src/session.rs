//! One run from grammar file to output file.
//!
//! The session reads and parses the grammar, produces words (by generation or
//! from the dictionary), runs them through the sound changes, optionally
//! syllabifies them, and writes the result. Informational messages go to the
//! `out` writer and warnings to the `err` writer; fatal problems come back as
//! [`Error`].

use std::fs;
use std::io::{self, Write};

use rand::Rng;
use wordsmith_engine::{
    Pipeline, PipelineOptions, Syllabifier, WordGenerator, rng_from_seed, rules_need_marks,
};
use wordsmith_foundation::{Diagnostics, Error, ErrorContext, ErrorKind, Result, Severity};
use wordsmith_language::{ParseOptions, ParsedInput, parse};

use crate::config::{Mode, RunConfig};
use crate::output::{format_lines, write_lines};

/// What a finished run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// Final words, in output order.
    pub words: Vec<String>,
    /// Lines written to the output file.
    pub lines: Vec<String>,
    /// Every diagnostic raised while parsing and applying rules.
    pub diagnostics: Diagnostics,
}

/// A single run.
pub struct Session<O: Write, E: Write> {
    config: RunConfig,
    out: O,
    err: E,
}

impl Session<io::Stdout, io::Stderr> {
    /// Creates a session printing to the process's standard streams.
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        Self::with_writers(config, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Session<O, E> {
    /// Creates a session printing to the given writers.
    #[must_use]
    pub fn with_writers(config: RunConfig, out: O, err: E) -> Self {
        Self { config, out, err }
    }

    /// The run configuration.
    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Consumes the session, returning its writers.
    #[must_use]
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Performs the run.
    ///
    /// # Errors
    /// Fails on an unreadable input or unwritable output file, on fatal
    /// grammar errors, when generation has no structure rules, and when
    /// dictionary mode finds no words.
    pub fn run(&mut self) -> Result<Report> {
        self.config.validate()?;
        let path = self.config.input.display().to_string();
        let source = fs::read_to_string(&self.config.input).map_err(|e| Error::io(&path, e))?;

        let options = ParseOptions {
            collect_dictionary: self.config.is_dictionary(),
        };
        let parsed = parse(&source, options)
            .map_err(|e| e.with_context(ErrorContext::new().with_source(&path)))?;
        let mut diagnostics = parsed.diagnostics.clone();
        self.render(&parsed.diagnostics)?;

        if self.config.syllabify {
            if let Some(spec) = &parsed.syllable_spec {
                self.say(&format!("Found syllabification rules: {spec}"))?;
            }
        }

        let mut rng = rng_from_seed(self.config.seed);
        let words = self.source_words(&parsed, &mut rng)?;
        let inputs = (self.config.show_input && self.config.is_dictionary()).then(|| words.clone());

        let pipeline_options = PipelineOptions::new()
            .with_syllable_mode(self.config.syllabify)
            .with_track_rules(self.config.show_rules)
            .with_clean_marks(
                self.config.is_dictionary()
                    && !rules_need_marks(&parsed.sound_changes, self.config.syllabify),
            );
        let pipeline = Pipeline::new(&parsed.sound_changes, &parsed.categories, pipeline_options);
        self.render(pipeline.diagnostics())?;
        let outcome = pipeline.run(&words);
        diagnostics.extend(outcome.diagnostics);
        let mut words = outcome.words;

        if self.config.syllabify {
            if let Some(spec) = &parsed.syllable_spec {
                Syllabifier::new(spec).process_all(&mut words, &mut rng);
            }
        }

        let applied = outcome
            .applied
            .filter(|_| !parsed.sound_changes.is_empty());
        let lines = format_lines(&words, inputs.as_deref(), applied.as_deref());
        write_lines(&self.config.output, &lines)?;

        if self.config.verbose {
            let header = if self.config.is_dictionary() {
                "Processed words:"
            } else {
                "Generated words:"
            };
            self.say(&format!("\n{header}"))?;
            for line in &lines {
                self.say(line)?;
            }
        }

        let verb = if self.config.is_dictionary() {
            "Processed"
        } else {
            "Generated"
        };
        self.say(&format!(
            "{verb} {} words and saved to '{}'",
            words.len(),
            self.config.output.display()
        ))?;

        Ok(Report {
            words,
            lines,
            diagnostics,
        })
    }

    fn source_words(&mut self, parsed: &ParsedInput, rng: &mut impl Rng) -> Result<Vec<String>> {
        let syllable_info = if parsed.syllable_lines.is_empty() {
            String::new()
        } else {
            format!(", {} syllabification rules", parsed.syllable_lines.len())
        };

        match self.config.mode {
            Mode::Dictionary => {
                if parsed.dictionary.is_empty() {
                    return Err(Error::new(ErrorKind::NoDictionaryWords));
                }
                self.say(&format!(
                    "Found {} categories, {} replacement rules, and {} dictionary words{syllable_info}.",
                    parsed.categories.len(),
                    parsed.sound_changes.len(),
                    parsed.dictionary.len()
                ))?;
                Ok(parsed.dictionary.clone())
            }
            Mode::Generate(count) => {
                if parsed.categories.is_empty() {
                    self.warn("Warning: No categories found in input file.")?;
                }
                let generator = WordGenerator::from_parsed(parsed)?;
                self.say(&format!(
                    "Found {} categories, {} word structure rules, and {} replacement rules{syllable_info}.",
                    parsed.categories.len(),
                    parsed.structure_rules.len(),
                    parsed.sound_changes.len()
                ))?;
                Ok(generator.generate_many(count, rng))
            }
        }
    }

    fn render(&mut self, diagnostics: &Diagnostics) -> Result<()> {
        for diagnostic in diagnostics {
            match diagnostic.severity {
                Severity::Info => self.say(&diagnostic.to_string())?,
                Severity::Warning => {
                    tracing::debug!(kind = ?diagnostic.kind, line = ?diagnostic.line, "{}", diagnostic.message);
                    self.warn(&diagnostic.to_string())?;
                }
            }
        }
        Ok(())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}").map_err(|e| Error::io("<stdout>", e))
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        writeln!(self.err, "{message}").map_err(|e| Error::io("<stderr>", e))
    }
}
