//! Integration tests for syllables and stress
//!
//! Tests syllabification, stress assignment, and syllable-level rules.

use wordsmith_engine::{
    PipelineOptions, Syllabifier, apply_rules, apply_syllable_rule, rng_from_seed,
};
use wordsmith_foundation::{Category, CategoryTable};
use wordsmith_language::{ParseOptions, SoundChange, parse};

fn rule(text: &str) -> SoundChange {
    SoundChange::parse(text, 1).unwrap()
}

const GRAMMAR: &str = "\
C: bkmnpt
V: aiu
O: bkpt
-syll
ALLOWED_ONSETS: O
ALLOWED_CODAS: n m
STRESS_PATTERNS: 1
-end-syll
";

#[test]
fn syllabifies_with_onsets_and_codas() {
    let parsed = parse(GRAMMAR, ParseOptions::default()).unwrap();
    let spec = parsed.syllable_spec.unwrap();
    let syllabifier = Syllabifier::new(&spec);

    assert_eq!(syllabifier.syllabify("bakapu"), "ba.ka.pu");
    assert_eq!(syllabifier.syllabify("bantu"), "ban.tu");
    assert_eq!(syllabifier.syllabify("kamta"), "kam.ta");
    assert_eq!(syllabifier.syllabify("ka"), "ka");
}

#[test]
fn assigns_stress_from_patterns() {
    let parsed = parse(GRAMMAR, ParseOptions::default()).unwrap();
    let spec = parsed.syllable_spec.unwrap();
    let syllabifier = Syllabifier::new(&spec);
    let mut rng = rng_from_seed(Some(1));

    assert_eq!(syllabifier.process("bakapu", &mut rng), "ˈba.ka.pu");
    assert_eq!(syllabifier.process("ba.ˈna", &mut rng), "ba.ˈna");
}

#[test]
fn syllable_level_rules() {
    assert_eq!(apply_syllable_rule("ba.ˈna.na", &rule("σ//_#")), "ba.ˈna");
    assert_eq!(apply_syllable_rule("ba.ˈna.na", &rule("σ/ˈσ/#_")), "ˈba.na.na");
}

#[test]
fn stress_conditioned_rules_need_syllable_mode() {
    let cats = CategoryTable::new().with(Category::from_chars('V', "aiu"));
    let rules = vec![rule("a/o/ˈ_")];

    let off = apply_rules(&["ba.ˈna.na"], &rules, &cats, PipelineOptions::new());
    assert_eq!(off.words, vec!["ba.ˈna.na"]);

    let on = apply_rules(
        &["ba.ˈna.na"],
        &rules,
        &cats,
        PipelineOptions::new().with_syllable_mode(true),
    );
    assert_eq!(on.words, vec!["ba.ˈno.na"]);
}

#[test]
fn marks_are_cleaned_on_request() {
    let cats = CategoryTable::new().with(Category::from_chars('V', "aiu"));
    let rules = vec![rule("a/e/_")];
    let outcome = apply_rules(
        &["ba.ˈna.na"],
        &rules,
        &cats,
        PipelineOptions::new().with_clean_marks(true),
    );
    assert_eq!(outcome.words, vec!["benene"]);
}
