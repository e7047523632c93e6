//! Reserved characters of the rule notation.
//!
//! Every layer agrees on these; category names and members may never use them
//! outside of a weight annotation.

/// Primary stress mark.
pub const PRIMARY_STRESS: char = 'ˈ';

/// Secondary stress mark.
pub const SECONDARY_STRESS: char = 'ˌ';

/// Unstressed marker, only meaningful inside rules.
pub const UNSTRESSED: char = '˘';

/// Syllable placeholder in syllable-level rules.
pub const SYLLABLE: char = 'σ';

/// Output symbol that doubles the matched segment.
pub const DOUBLING: char = '²';

/// Word boundary anchor in environments.
pub const WORD_BOUNDARY: char = '#';

/// Application site marker in environments.
pub const SITE: char = '_';

/// Syllable boundary inside syllabified words.
pub const SYLLABLE_BREAK: char = '.';

/// Canonical rule separator.
pub const RULE_SEPARATOR: char = '/';

/// Alternative rule separators, normalized to [`RULE_SEPARATOR`].
pub const ALTERNATE_SEPARATORS: [char; 2] = ['>', '→'];

/// Environment that matches everywhere.
pub const ANYWHERE: &str = "_";

/// Characters that may not name or populate a category.
pub const RESERVED: [char; 18] = [
    PRIMARY_STRESS,
    SECONDARY_STRESS,
    UNSTRESSED,
    SYLLABLE,
    '!',
    '[',
    ']',
    '(',
    ')',
    DOUBLING,
    '-',
    '→',
    RULE_SEPARATOR,
    '>',
    WORD_BOUNDARY,
    ':',
    '{',
    '}',
];

/// Characters that raise a warning when found in a dictionary word.
pub const PROBLEMATIC_IN_WORDS: [char; 15] = [
    SYLLABLE,
    '!',
    '[',
    ']',
    '(',
    ')',
    DOUBLING,
    '-',
    '→',
    RULE_SEPARATOR,
    '>',
    WORD_BOUNDARY,
    ':',
    '{',
    '}',
];

/// Returns true if `c` is reserved by the notation.
#[must_use]
pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

/// Returns true if `c` is any rule separator.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c == RULE_SEPARATOR || ALTERNATE_SEPARATORS.contains(&c)
}

/// Returns true if `c` marks syllables or stress.
#[must_use]
pub fn is_prosodic(c: char) -> bool {
    matches!(c, SYLLABLE | PRIMARY_STRESS | SECONDARY_STRESS | UNSTRESSED)
}

/// Removes syllable breaks and stress marks from a word.
#[must_use]
pub fn strip_prosody(word: &str) -> String {
    word.chars()
        .filter(|&c| !matches!(c, SYLLABLE_BREAK | PRIMARY_STRESS | SECONDARY_STRESS))
        .collect()
}

/// Returns true if the word carries syllable breaks or stress marks.
#[must_use]
pub fn has_prosody(word: &str) -> bool {
    word.chars()
        .any(|c| matches!(c, SYLLABLE_BREAK | PRIMARY_STRESS | SECONDARY_STRESS))
}
