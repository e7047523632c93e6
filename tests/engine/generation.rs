//! Integration tests for word generation
//!
//! Tests template selection, category sampling, and reproducibility.

use std::collections::HashMap;

use wordsmith_engine::{WordGenerator, rng_from_seed};
use wordsmith_foundation::{Category, CategoryTable, ErrorKind};
use wordsmith_language::{ParseOptions, parse};

fn categories() -> CategoryTable {
    CategoryTable::new()
        .with(Category::from_chars('C', "ptk"))
        .with(Category::weighted('V', &[('a', 9), ('i', 1)]))
}

#[test]
fn words_follow_templates() {
    let cats = categories();
    let generator = WordGenerator::new(&cats, &[("CVC", 1)]).unwrap();
    let mut rng = rng_from_seed(Some(3));

    for word in generator.generate_many(50, &mut rng) {
        let chars: Vec<char> = word.chars().collect();
        assert_eq!(chars.len(), 3);
        assert!("ptk".contains(chars[0]));
        assert!("ai".contains(chars[1]));
        assert!("ptk".contains(chars[2]));
    }
}

#[test]
fn literals_pass_through() {
    let cats = categories();
    let generator = WordGenerator::new(&cats, &[("sCa", 1)]).unwrap();
    let word = generator.generate(&mut rng_from_seed(Some(1)));
    assert!(word.starts_with('s') && word.ends_with('a'));
}

#[test]
fn member_weights_bias_sampling() {
    let cats = categories();
    let generator = WordGenerator::new(&cats, &[("V", 1)]).unwrap();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in generator.generate_many(2000, &mut rng_from_seed(Some(11))) {
        *counts.entry(word).or_default() += 1;
    }
    let a = counts.get("a").copied().unwrap_or(0);
    assert!(a > 1600, "expected mostly 'a', got {a}");
}

#[test]
fn template_weights_bias_selection() {
    let cats = categories();
    let generator = WordGenerator::new(&cats, &[("CV", 30), ("CVCVCV", 1)]).unwrap();
    let short = generator
        .generate_many(1000, &mut rng_from_seed(Some(5)))
        .iter()
        .filter(|w| w.chars().count() == 2)
        .count();
    assert!(short > 900, "expected mostly CV, got {short}");
}

#[test]
fn same_seed_same_words() {
    let parsed = parse("C: ptk\nV: aiu\nCV(C)\nCVCV{2}\n", ParseOptions::default()).unwrap();
    let generator = WordGenerator::from_parsed(&parsed).unwrap();
    assert_eq!(generator.template_count(), 3);

    let first = generator.generate_many(25, &mut rng_from_seed(Some(99)));
    let second = generator.generate_many(25, &mut rng_from_seed(Some(99)));
    assert_eq!(first, second);
}

#[test]
fn no_templates_is_an_error() {
    let cats = categories();
    let err = WordGenerator::new(&cats, &[]).err().unwrap();
    assert!(matches!(err.kind, ErrorKind::NoStructureRules));
}
