//! Line lexer for grammar files.
//!
//! Grammar files are line oriented. The lexer drops blank lines and whole-line
//! comments, strips inline `# ` comments, and yields trimmed [`Line`]s that
//! keep their 1-based source line number.

use crate::rule::is_rule_line;
use crate::structure::looks_like_structure;

/// Opens the dictionary section.
pub const DICT_START: &str = "-dict";
/// Closes the dictionary section.
pub const DICT_END: &str = "-end-dict";
/// Opens the syllabification section.
pub const SYLL_START: &str = "-syll";
/// Closes the syllabification section.
pub const SYLL_END: &str = "-end-syll";

/// A trimmed, comment-free source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the source.
    pub number: usize,
    /// Line content.
    pub text: String,
}

/// What a line declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// `-dict`
    DictStart,
    /// `-end-dict`
    DictEnd,
    /// `-syll`
    SyllStart,
    /// `-end-syll`
    SyllEnd,
    /// `X: members`
    Category,
    /// `input/output/environment`
    SoundChange,
    /// `CV(C){N}`
    Structure,
    /// Anything else.
    Unknown,
}

impl LineKind {
    /// Classifies a trimmed line, section markers first.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        match text {
            DICT_START => return Self::DictStart,
            DICT_END => return Self::DictEnd,
            SYLL_START => return Self::SyllStart,
            SYLL_END => return Self::SyllEnd,
            _ => {}
        }

        let is_rule = is_rule_line(text);
        if text.contains(':') && !is_rule {
            Self::Category
        } else if is_rule {
            Self::SoundChange
        } else if looks_like_structure(text) {
            Self::Structure
        } else {
            Self::Unknown
        }
    }
}

/// Iterator over the meaningful lines of a grammar file.
pub struct Lexer<'src> {
    lines: std::iter::Enumerate<std::str::Lines<'src>>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            lines: source.lines().enumerate(),
        }
    }

    /// Collects every meaningful line.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Line> {
        Lexer::new(source).collect()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        for (index, raw) in self.lines.by_ref() {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let text = strip_comment(raw).trim();
            if text.is_empty() {
                continue;
            }
            return Some(Line {
                number: index + 1,
                text: text.to_string(),
            });
        }
        None
    }
}

/// Removes an inline `# ` comment.
///
/// On rule lines `#` is a word boundary, so only a `# ` preceded by
/// whitespace starts a comment there. Elsewhere the first `# ` does.
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    if !line.contains("# ") {
        return line;
    }

    if is_rule_line(line) {
        let mut previous: Option<char> = None;
        let mut chars = line.char_indices().peekable();
        while let Some((idx, c)) = chars.next() {
            let next = chars.peek().map(|&(_, n)| n);
            if c == '#' && next == Some(' ') && previous.is_some_and(char::is_whitespace) {
                return line[..idx].trim_end();
            }
            previous = Some(c);
        }
        line
    } else {
        line.find("# ").map_or(line, |idx| line[..idx].trim_end())
    }
}
