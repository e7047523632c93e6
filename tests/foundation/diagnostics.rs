//! Integration tests for diagnostics
//!
//! Tests collection, filtering, and rendering of recoverable problems.

use wordsmith_foundation::{Diagnostic, DiagnosticKind, Diagnostics, Severity};

#[test]
fn warnings_render_with_prefix() {
    let warning = Diagnostic::warning(DiagnosticKind::InvalidRule, "bad rule").at_line(4);
    assert_eq!(warning.to_string(), "Warning: bad rule");
    assert_eq!(warning.line, Some(4));
    assert!(warning.is_warning());

    let info = Diagnostic::info(DiagnosticKind::RuleWeights, "Rule weights: CV:2");
    assert_eq!(info.to_string(), "Rule weights: CV:2");
    assert_eq!(info.severity, Severity::Info);
}

#[test]
fn collector_filters_by_kind_and_severity() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.warn(DiagnosticKind::UnrecognizedLine, Some(2), "line 2");
    diagnostics.info(DiagnosticKind::RuleExpanded, "expanded");
    diagnostics.warn(DiagnosticKind::UnrecognizedLine, Some(5), "line 5");

    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics.warnings().count(), 2);
    let lines: Vec<Option<usize>> = diagnostics
        .of_kind(DiagnosticKind::UnrecognizedLine)
        .map(|d| d.line)
        .collect();
    assert_eq!(lines, vec![Some(2), Some(5)]);
    assert!(diagnostics.contains(DiagnosticKind::RuleExpanded));
    assert!(!diagnostics.contains(DiagnosticKind::InvalidRule));
}

#[test]
fn collectors_extend_in_order() {
    let mut first = Diagnostics::new();
    first.info(DiagnosticKind::CategoryWeights, "one");
    let mut second = Diagnostics::new();
    second.warn(DiagnosticKind::CategoryLengthMismatch, Some(3), "two");

    first.extend(second);
    let messages: Vec<&str> = first.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["one", "two"]);
}
