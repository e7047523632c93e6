//! Input matching and replacement output.

use wordsmith_foundation::CategoryTable;
use wordsmith_foundation::symbols::DOUBLING;

/// A rule's input, one symbol per matched character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputPattern {
    symbols: Vec<char>,
}

impl InputPattern {
    /// Creates a pattern from the rule's input text.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            symbols: input.chars().collect(),
        }
    }

    /// Number of characters a match spans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true for the empty input of an insertion.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The pattern's symbols.
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns true if the pattern matches `word` starting at `pos`.
    ///
    /// Each symbol matches either a member of the category it names or
    /// itself.
    #[must_use]
    pub fn matches_at(&self, word: &[char], pos: usize, categories: &CategoryTable) -> bool {
        let Some(segment) = word.get(pos..pos + self.len()) else {
            return false;
        };
        !self.is_empty()
            && self
                .symbols
                .iter()
                .zip(segment)
                .all(|(&symbol, &c)| categories.matches(symbol, c))
    }
}

/// Computes what replaces `matched`.
///
/// - Output `²` doubles the whole matched segment.
/// - Input and output of different lengths: the output is used verbatim.
/// - Equal lengths: character by character, `²` doubles the aligned matched
///   character, a category mapped onto a category keeps the member's
///   position, and anything else is emitted literally.
///
/// Returns `None` when a category pair has different member counts, in which
/// case the occurrence is left alone.
#[must_use]
pub fn replacement_output(
    matched: &[char],
    input: &[char],
    output: &[char],
    categories: &CategoryTable,
) -> Option<String> {
    if output == [DOUBLING] {
        return Some(matched.iter().chain(matched).collect());
    }
    if input.len() != output.len() {
        return Some(output.iter().collect());
    }

    let mut result = String::with_capacity(output.len());
    for ((&m, &i), &o) in matched.iter().zip(input).zip(output) {
        if o == DOUBLING {
            result.push(m);
            result.push(m);
            continue;
        }
        match (categories.get(i), categories.get(o)) {
            (Some(from), Some(to)) => {
                if from.unique_members().len() != to.unique_members().len() {
                    return None;
                }
                let mapped = from.index_of(m).and_then(|idx| to.member_at(idx));
                result.push(mapped.unwrap_or(m));
            }
            _ => result.push(o),
        }
    }
    Some(result)
}
