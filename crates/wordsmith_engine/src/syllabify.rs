//! Syllable boundaries and stress assignment.
//!
//! Boundaries are found by a greedy left-to-right scan. A break goes in front
//! of position `i` when the text before it ends in an allowed coda, or when the
//! text from `i` starts with an allowed onset. Onsets are tried longest first,
//! and the characters of a matched onset are not candidates for another break,
//! so `pl` stays together in `ka.plo`.

use rand::Rng;
use rand::seq::SliceRandom;
use wordsmith_foundation::symbols::{
    PRIMARY_STRESS, SECONDARY_STRESS, SYLLABLE_BREAK, has_prosody,
};
use wordsmith_language::SyllableSpec;

/// Inserts syllable breaks and stress marks.
#[derive(Clone, Debug)]
pub struct Syllabifier<'s> {
    spec: &'s SyllableSpec,
    onsets: Vec<Vec<char>>,
    codas: Vec<Vec<char>>,
}

fn longest_first(margins: &[String]) -> Vec<Vec<char>> {
    let mut sorted: Vec<Vec<char>> = margins
        .iter()
        .filter(|m| !m.is_empty())
        .map(|m| m.chars().collect())
        .collect();
    sorted.sort_by_key(|m| std::cmp::Reverse(m.len()));
    sorted.dedup();
    sorted
}

impl<'s> Syllabifier<'s> {
    /// Prepares a syllabifier for `spec`.
    #[must_use]
    pub fn new(spec: &'s SyllableSpec) -> Self {
        Self {
            spec,
            onsets: longest_first(&spec.onsets),
            codas: longest_first(&spec.codas),
        }
    }

    /// Inserts `.` between syllables.
    ///
    /// Without any onsets or codas the word is returned unchanged.
    #[must_use]
    pub fn syllabify(&self, word: &str) -> String {
        if self.spec.has_no_boundaries() {
            return word.to_string();
        }

        let chars: Vec<char> = word.chars().collect();
        let mut breaks = Vec::new();
        let mut i = 1;

        while i < chars.len() {
            let onset = self.onset_at(&chars[i..]);
            if self.ends_in_coda(&chars[..i]) || onset.is_some() {
                breaks.push(i);
                i += onset.unwrap_or(1).max(1);
            } else {
                i += 1;
            }
        }

        let mut result = String::with_capacity(chars.len() + breaks.len());
        for (i, &c) in chars.iter().enumerate() {
            if breaks.contains(&i) {
                result.push(SYLLABLE_BREAK);
            }
            result.push(c);
        }
        result
    }

    fn ends_in_coda(&self, left: &[char]) -> bool {
        self.codas.iter().any(|coda| left.ends_with(coda))
    }

    /// Length of the longest allowed onset starting `rest`.
    fn onset_at(&self, rest: &[char]) -> Option<usize> {
        self.onsets
            .iter()
            .find(|onset| rest.starts_with(onset))
            .map(Vec::len)
    }

    /// Marks stress using a randomly chosen pattern that fits the word.
    ///
    /// Words with no fitting pattern are returned unchanged.
    pub fn assign_stress<R: Rng + ?Sized>(&self, syllabified: &str, rng: &mut R) -> String {
        let syllables: Vec<&str> = syllabified.split(SYLLABLE_BREAK).collect();
        let fitting: Vec<_> = self
            .spec
            .stress_patterns
            .iter()
            .filter(|p| p.fits(syllables.len()))
            .collect();
        let Some(pattern) = fitting.choose(rng) else {
            return syllabified.to_string();
        };

        syllables
            .iter()
            .enumerate()
            .map(|(i, syllable)| {
                if i + 1 == pattern.primary {
                    format!("{PRIMARY_STRESS}{syllable}")
                } else if pattern.secondary == Some(i + 1) {
                    format!("{SECONDARY_STRESS}{syllable}")
                } else {
                    (*syllable).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(&SYLLABLE_BREAK.to_string())
    }

    /// Syllabifies and stresses a word that carries no marks yet.
    pub fn process<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> String {
        if has_prosody(word) {
            return word.to_string();
        }
        let syllabified = self.syllabify(word);
        self.assign_stress(&syllabified, rng)
    }

    /// Processes every word in place.
    pub fn process_all<R: Rng + ?Sized>(&self, words: &mut [String], rng: &mut R) {
        for word in words.iter_mut() {
            *word = self.process(word, rng);
        }
        tracing::info!(words = words.len(), "syllabified words");
    }
}
