//! Grammar file parser.
//!
//! Drives the [`Lexer`] over a whole file and sorts each line into categories,
//! structure rules, sound changes, dictionary words, or syllabification lines.
//! Structural mistakes are fatal and returned as [`Error`]; everything that
//! can be skipped safely becomes a [`Diagnostic`](wordsmith_foundation::Diagnostic).

use wordsmith_foundation::symbols::PROBLEMATIC_IN_WORDS;
use wordsmith_foundation::{CategoryTable, DiagnosticKind, Diagnostics, Error, Result};

use crate::category::{describe_weights, parse_category};
use crate::lexer::{Lexer, Line, LineKind};
use crate::rule::SoundChange;
use crate::structure::StructureRule;
use crate::syllable::SyllableSpec;

/// Parser settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Collect words from `-dict` sections.
    pub collect_dictionary: bool,
}

impl ParseOptions {
    /// Options for dictionary mode.
    #[must_use]
    pub const fn dictionary() -> Self {
        Self {
            collect_dictionary: true,
        }
    }
}

/// Everything a grammar file declares.
#[derive(Clone, Debug, Default)]
pub struct ParsedInput {
    /// Category table.
    pub categories: CategoryTable,
    /// Structure rules with their expanded templates.
    pub structure_rules: Vec<StructureRule>,
    /// Sound changes in file order.
    pub sound_changes: Vec<SoundChange>,
    /// Dictionary words (empty unless collected).
    pub dictionary: Vec<String>,
    /// Raw `-syll` lines with their line numbers.
    pub syllable_lines: Vec<(String, usize)>,
    /// Parsed syllabification rules, if a `-syll` section had content.
    pub syllable_spec: Option<SyllableSpec>,
    /// Recoverable problems and informational reports.
    pub diagnostics: Diagnostics,
}

impl ParsedInput {
    /// Every concrete template with the weight of its rule.
    #[must_use]
    pub fn templates(&self) -> Vec<(&str, usize)> {
        self.structure_rules
            .iter()
            .flat_map(|rule| rule.templates.iter().map(|t| (t.as_str(), rule.weight)))
            .collect()
    }

    /// Number of concrete templates.
    #[must_use]
    pub fn template_count(&self) -> usize {
        self.structure_rules.iter().map(|r| r.templates.len()).sum()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Rules,
    Dictionary,
    Syllables,
}

/// Parses a grammar file.
///
/// # Errors
/// Fails on reserved-character misuse in categories, malformed or misplaced
/// weights, and colons anywhere but the second position of a category line.
pub fn parse(source: &str, options: ParseOptions) -> Result<ParsedInput> {
    let mut parsed = ParsedInput::default();
    let mut section = Section::Rules;

    for Line { number, text } in Lexer::new(source) {
        match LineKind::classify(&text) {
            LineKind::DictStart => {
                section = Section::Dictionary;
                continue;
            }
            LineKind::DictEnd => {
                section = Section::Rules;
                continue;
            }
            LineKind::SyllStart => {
                section = Section::Syllables;
                continue;
            }
            LineKind::SyllEnd => {
                section = Section::Rules;
                continue;
            }
            _ => {}
        }

        match section {
            Section::Syllables => parsed.syllable_lines.push((text, number)),
            Section::Dictionary => {
                if options.collect_dictionary {
                    collect_words(&text, number, &mut parsed);
                }
            }
            Section::Rules => parse_rule_line(&text, number, &mut parsed)?,
        }
    }

    report_rule_weights(&mut parsed);

    if !parsed.syllable_lines.is_empty() {
        parsed.syllable_spec = Some(SyllableSpec::parse(
            &parsed.syllable_lines,
            &parsed.categories,
            &mut parsed.diagnostics,
        ));
    }

    tracing::debug!(
        categories = parsed.categories.len(),
        structure_rules = parsed.structure_rules.len(),
        sound_changes = parsed.sound_changes.len(),
        dictionary = parsed.dictionary.len(),
        "parsed grammar"
    );
    Ok(parsed)
}

fn parse_rule_line(text: &str, number: usize, parsed: &mut ParsedInput) -> Result<()> {
    validate_colons(text, number)?;

    match LineKind::classify(text) {
        LineKind::Category => {
            let category = parse_category(text, number)?;
            if category.is_weighted() {
                parsed
                    .diagnostics
                    .info(DiagnosticKind::CategoryWeights, describe_weights(&category));
            }
            parsed.categories.insert(category);
        }
        LineKind::SoundChange => match SoundChange::parse(text, number) {
            Ok(rule) => parsed.sound_changes.push(rule),
            Err(err) => parsed.diagnostics.warn(
                DiagnosticKind::InvalidRule,
                Some(number),
                format!("Invalid replacement rule format on line {number}: '{text}' ({err})"),
            ),
        },
        LineKind::Structure => {
            let rule = StructureRule::parse(text, number)?;
            if rule.is_expanded() {
                parsed.diagnostics.info(
                    DiagnosticKind::RuleExpanded,
                    format!(
                        "Expanded rule '{}' into {} variants: {}",
                        rule.source,
                        rule.templates.len(),
                        rule.templates.join(", ")
                    ),
                );
            }
            parsed.structure_rules.push(rule);
        }
        _ => parsed.diagnostics.warn(
            DiagnosticKind::UnrecognizedLine,
            Some(number),
            format!(
                "Line {number} is not a valid category, replacement rule, or word structure rule: '{text}'"
            ),
        ),
    }
    Ok(())
}

/// A colon may only appear once, as the second character of a category line.
fn validate_colons(text: &str, number: usize) -> Result<()> {
    let mut positions = text.chars().enumerate().filter(|&(_, c)| c == ':').map(|(i, _)| i);
    match (positions.next(), positions.next()) {
        (None, _) | (Some(1), None) => Ok(()),
        (Some(_), Some(_)) => Err(Error::invalid_colon(number, "Multiple colons found in line")),
        (Some(_), None) => Err(Error::invalid_colon(
            number,
            "Colon must be in second position for category definitions",
        )),
    }
}

fn collect_words(text: &str, number: usize, parsed: &mut ParsedInput) {
    for word in text.split_whitespace() {
        let problematic: Vec<char> = word
            .chars()
            .filter(|c| PROBLEMATIC_IN_WORDS.contains(c))
            .collect();
        if !problematic.is_empty() {
            parsed.diagnostics.warn(
                DiagnosticKind::ProblematicDictionaryWord,
                Some(number),
                format!(
                    "Dictionary word '{word}' contains potentially problematic characters: {problematic:?}"
                ),
            );
        }
        parsed.dictionary.push(word.to_string());
    }
}

fn report_rule_weights(parsed: &mut ParsedInput) {
    if parsed.structure_rules.iter().all(|r| r.weight == 1) {
        return;
    }
    let weights: Vec<String> = parsed
        .structure_rules
        .iter()
        .map(|r| format!("{}:{}", r.source, r.weight))
        .collect();
    parsed.diagnostics.info(
        DiagnosticKind::RuleWeights,
        format!("Rule weights: {}", weights.join(", ")),
    );
}
