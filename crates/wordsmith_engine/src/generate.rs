//! Random word generation from structure templates.

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wordsmith_foundation::{CategoryTable, Error, ErrorKind, Result};
use wordsmith_language::ParsedInput;

/// Creates the workspace RNG: seeded when `seed` is given, from OS entropy
/// otherwise.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Samples words from weighted templates.
#[derive(Clone, Debug)]
pub struct WordGenerator<'g> {
    categories: &'g CategoryTable,
    templates: Vec<&'g str>,
    index: WeightedIndex<usize>,
}

impl<'g> WordGenerator<'g> {
    /// Builds a generator from `(template, weight)` pairs.
    ///
    /// # Errors
    /// Fails with [`ErrorKind::NoStructureRules`] when there are no templates.
    pub fn new(categories: &'g CategoryTable, templates: &[(&'g str, usize)]) -> Result<Self> {
        if templates.is_empty() {
            return Err(Error::new(ErrorKind::NoStructureRules));
        }
        let index = WeightedIndex::new(templates.iter().map(|&(_, w)| w))
            .map_err(|e| Error::new(ErrorKind::Internal(format!("template weights: {e}"))))?;
        Ok(Self {
            categories,
            templates: templates.iter().map(|&(t, _)| t).collect(),
            index,
        })
    }

    /// Builds a generator from a parsed grammar.
    ///
    /// # Errors
    /// Fails with [`ErrorKind::NoStructureRules`] when the grammar has no
    /// structure rules.
    pub fn from_parsed(parsed: &'g ParsedInput) -> Result<Self> {
        Self::new(&parsed.categories, &parsed.templates())
    }

    /// Number of templates.
    #[must_use]
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Generates one word.
    ///
    /// Category symbols draw uniformly from the category's weighted members;
    /// everything else is copied.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let template = self.templates[self.index.sample(rng)];
        let mut word = String::with_capacity(template.len());
        for c in template.chars() {
            match self.categories.get(c) {
                Some(category) => {
                    if let Some(&member) = category.members().choose(rng) {
                        word.push(member);
                    }
                }
                None => word.push(c),
            }
        }
        word
    }

    /// Generates `count` words.
    pub fn generate_many<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
        let words: Vec<String> = (0..count).map(|_| self.generate(rng)).collect();
        tracing::info!(count, templates = self.templates.len(), "generated words");
        words
    }
}
