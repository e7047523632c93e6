//! Integration tests for the grammar parser
//!
//! Tests whole grammar files: sections, line numbers, and diagnostics.

use wordsmith_foundation::{DiagnosticKind, ErrorKind};
use wordsmith_language::{Lexer, LineKind, ParseOptions, parse};

const GRAMMAR: &str = "\
# Consonants and vowels
C: p t k s n
V: a{4} i u
L: lr

# Word shapes
CV{20}
CVC
C(L)V(C)V

# Sound changes
p>b>V_V
s//_#
/i/C_#

-syll
ALLOWED_ONSETS: C CL
ALLOWED_CODAS: n s
STRESS_PATTERNS: 1 2 1-3 x
-end-syll

-dict
pasu tikas
plan
-end-dict
";

// =============================================================================
// Lexing
// =============================================================================

#[test]
fn lexer_skips_blank_and_comment_lines() {
    let lines = Lexer::tokenize_all(GRAMMAR);
    assert_eq!(lines[0].number, 2);
    assert_eq!(lines[0].text, "C: p t k s n");
    assert!(lines.iter().all(|l| !l.text.is_empty() && !l.text.starts_with('#')));
}

#[test]
fn line_classification() {
    assert_eq!(LineKind::classify("-dict"), LineKind::DictStart);
    assert_eq!(LineKind::classify("-end-syll"), LineKind::SyllEnd);
    assert_eq!(LineKind::classify("V: aeiou"), LineKind::Category);
    assert_eq!(LineKind::classify("a/e/_"), LineKind::SoundChange);
    assert_eq!(LineKind::classify("CV(C){3}"), LineKind::Structure);
    assert_eq!(LineKind::classify("123"), LineKind::Unknown);
}

// =============================================================================
// Whole Grammars
// =============================================================================

#[test]
fn generation_grammar() {
    let parsed = parse(GRAMMAR, ParseOptions::default()).unwrap();

    assert_eq!(parsed.categories.len(), 3);
    let vowels = parsed.categories.get('V').unwrap();
    assert_eq!(vowels.members().len(), 6);

    assert_eq!(parsed.structure_rules.len(), 3);
    assert_eq!(parsed.template_count(), 2 + 4);
    assert_eq!(parsed.templates()[0], ("CV", 20));

    let sources: Vec<&str> = parsed.sound_changes.iter().map(|r| r.source.as_str()).collect();
    assert_eq!(sources, vec!["p/b/V_V", "s//_#", "/i/C_#"]);
    let lines: Vec<usize> = parsed.sound_changes.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![12, 13, 14]);

    assert!(parsed.dictionary.is_empty());
}

#[test]
fn dictionary_grammar() {
    let parsed = parse(GRAMMAR, ParseOptions::dictionary()).unwrap();
    assert_eq!(parsed.dictionary, vec!["pasu", "tikas", "plan"]);
}

#[test]
fn syllable_section() {
    let parsed = parse(GRAMMAR, ParseOptions::default()).unwrap();
    assert_eq!(parsed.syllable_lines.len(), 3);

    let spec = parsed.syllable_spec.unwrap();
    assert_eq!(spec.onsets.len(), 5 + 5 * 2);
    assert_eq!(spec.codas, vec!["n", "s"]);
    assert_eq!(spec.stress_patterns.len(), 3);
    assert_eq!(spec.stress_patterns[2].secondary, Some(3));

    let invalid = parsed
        .diagnostics
        .of_kind(DiagnosticKind::InvalidStressPattern)
        .next()
        .unwrap();
    assert_eq!(invalid.line, Some(19));
}

#[test]
fn info_reports() {
    let parsed = parse(GRAMMAR, ParseOptions::default()).unwrap();
    let infos: Vec<String> = parsed
        .diagnostics
        .iter()
        .filter(|d| !d.is_warning())
        .map(ToString::to_string)
        .collect();

    assert!(infos.contains(&"Category 'V' weights: a:4, i:1, u:1".to_string()));
    assert!(infos.contains(&"Rule weights: CV:20, CVC:1, C(L)V(C)V:1".to_string()));
    assert!(infos.iter().any(|i| i.starts_with("Expanded rule 'C(L)V(C)V' into 4 variants")));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn recoverable_lines_are_reported_with_numbers() {
    let source = "C: pt\nV: a\nCV\n??\na/b/c/d\n";
    let parsed = parse(source, ParseOptions::default()).unwrap();
    let warnings: Vec<(DiagnosticKind, Option<usize>)> =
        parsed.diagnostics.warnings().map(|d| (d.kind, d.line)).collect();
    assert_eq!(
        warnings,
        vec![
            (DiagnosticKind::UnrecognizedLine, Some(4)),
            (DiagnosticKind::InvalidRule, Some(5)),
        ]
    );
}

#[test]
fn fatal_errors_stop_parsing() {
    let err = parse("C: pt\nV: a\nCV{2\n", ParseOptions::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidWeight { line: 3, .. }));

    let err = parse("V: a#\n", ParseOptions::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ReservedCharacter { line: 1, .. }));

    let err = parse("CV: a\n", ParseOptions::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidColon { .. }));
}
