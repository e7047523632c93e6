//! Integration tests for rule notation
//!
//! Tests group expansion, weights, structure rules, and rule shapes.

use wordsmith_language::{
    SoundChange, StructureRule, expand, normalize_separators, split_trailing_weight,
    strip_comment,
};

// =============================================================================
// Group Expansion
// =============================================================================

#[test]
fn optional_groups() {
    assert_eq!(expand("CV(C)"), vec!["CV", "CVC"]);
    assert_eq!(expand("S(F,L)VC"), vec!["SVC", "SFVC", "SLVC"]);
}

#[test]
fn mandatory_groups() {
    assert_eq!(expand("S(!F,L)VC"), vec!["SFVC", "SLVC"]);
}

#[test]
fn groups_multiply() {
    let expanded = expand("(C)V(C)");
    assert_eq!(expanded.len(), 4);
    for template in ["V", "CV", "VC", "CVC"] {
        assert!(expanded.iter().any(|t| t == template), "missing {template}");
    }
}

#[test]
fn text_without_groups_is_unchanged() {
    assert_eq!(expand("CVC"), vec!["CVC"]);
}

// =============================================================================
// Weights
// =============================================================================

#[test]
fn trailing_weight() {
    assert_eq!(split_trailing_weight("CV{5}", 1).unwrap(), ("CV", 5));
    assert_eq!(split_trailing_weight("CV", 1).unwrap(), ("CV", 1));
}

#[test]
fn malformed_weights_fail() {
    for text in ["CV{", "CV}", "C{2}V", "CV{0}", "CV{x}"] {
        assert!(split_trailing_weight(text, 1).is_err(), "{text} should fail");
    }
}

// =============================================================================
// Structure Rules
// =============================================================================

#[test]
fn weighted_structure_rule_expands() {
    let rule = StructureRule::parse("CV(C){4}", 2).unwrap();
    assert_eq!(rule.weight, 4);
    assert_eq!(rule.templates, vec!["CV", "CVC"]);
    assert_eq!(rule.line, 2);
    assert!(rule.is_expanded());
}

// =============================================================================
// Sound Changes
// =============================================================================

#[test]
fn rule_shapes() {
    let replace = SoundChange::parse("p/b/V_V", 1).unwrap();
    assert_eq!((replace.input.as_str(), replace.output.as_str()), ("p", "b"));
    assert_eq!(replace.environment, "V_V");

    let anywhere = SoundChange::parse("a/e", 1).unwrap();
    assert_eq!(anywhere.environment, "_");

    let delete = SoundChange::parse("a//_#", 1).unwrap();
    assert!(delete.is_deletion());
    assert_eq!(delete.environment, "_#");

    let insert = SoundChange::parse("/e/C_C", 1).unwrap();
    assert!(insert.is_insertion());

    assert!(SoundChange::parse("a/b/c/d", 1).is_err());
}

#[test]
fn alternate_separators() {
    assert_eq!(normalize_separators("p>b→V_V"), "p/b/V_V");
    let rule = SoundChange::parse("p>b>V_V", 3).unwrap();
    assert_eq!(rule.source, "p/b/V_V");
    assert_eq!(rule.line, 3);
}

#[test]
fn syllable_sensitivity() {
    assert!(SoundChange::parse("σ//_#", 1).unwrap().is_syllable_level());
    let stressed = SoundChange::parse("a/o/ˈ_", 1).unwrap();
    assert!(stressed.is_syllable_sensitive());
    assert_eq!(stressed.stress_context(), Some('ˈ'));
    assert!(!SoundChange::parse("a/o/_", 1).unwrap().is_syllable_sensitive());
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn comments_keep_boundaries() {
    assert_eq!(strip_comment("a//_#   # drop final a"), "a//_#");
    assert_eq!(strip_comment("CVC # common"), "CVC");
    assert_eq!(strip_comment("a/e/_#"), "a/e/_#");
}
