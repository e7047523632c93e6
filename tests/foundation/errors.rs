//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use std::io;

use wordsmith_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_weight() {
    let err = Error::invalid_weight(7, "Invalid weight '{0}': weight must be at least 1");
    assert!(matches!(err.kind, ErrorKind::InvalidWeight { line: 7, .. }));
    assert_eq!(err.line(), Some(7));
    assert!(err.to_string().starts_with("Line 7: Invalid weight"));
}

#[test]
fn error_invalid_colon() {
    let err = Error::invalid_colon(2, "Multiple colons found in line");
    assert!(matches!(err.kind, ErrorKind::InvalidColon { .. }));
    assert_eq!(err.to_string(), "Line 2: Multiple colons found in line");
}

#[test]
fn error_reserved_character() {
    let err = Error::reserved_character(1, "Category 'V' contains reserved character '#'");
    assert!(matches!(err.kind, ErrorKind::ReservedCharacter { .. }));
    assert!(err.to_string().contains('#'));
}

#[test]
fn error_io_names_path() {
    let err = Error::io("lang.txt", io::Error::new(io::ErrorKind::NotFound, "missing"));
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
    assert!(err.to_string().contains("lang.txt"));
    assert_eq!(err.line(), None);
}

#[test]
fn error_fixed_messages() {
    assert_eq!(
        Error::new(ErrorKind::NoStructureRules).to_string(),
        "No word structure rules found in input file."
    );
    assert_eq!(
        Error::new(ErrorKind::NoDictionaryWords).to_string(),
        "No dictionary words found in -dict section."
    );
    assert_eq!(
        Error::new(ErrorKind::InvalidWordCount("a positive integer.".into())).to_string(),
        "Number of words must be a positive integer."
    );
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_appended() {
    let err = Error::invalid_weight(3, "Unmatched opening brace")
        .with_context(ErrorContext::new().with_source("lang.txt"));
    assert_eq!(err.to_string(), "Line 3: Unmatched opening brace (at lang.txt)");
}

#[test]
fn context_with_line() {
    let err = Error::usage("bad").with_context(ErrorContext::new().with_source("a.txt").with_line(9));
    assert_eq!(err.to_string(), "bad (at a.txt:9)");
}
