//! Output formatting and writing.
//!
//! Widths are counted in characters, so `→` and stress marks count as one.

use std::fs;
use std::path::Path;

use wordsmith_foundation::{Error, Result};

const ARROW: &str = " → ";

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, to: usize) -> String {
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat_n(' ', to.saturating_sub(width(text))));
    padded
}

/// Formats one output line per word.
///
/// With `inputs`, each line reads `input → output` with the inputs padded to
/// the longest one. With `applied`, the rules that changed a word follow in
/// `[rule1; rule2]`, aligned across lines.
#[must_use]
pub fn format_lines(
    words: &[String],
    inputs: Option<&[String]>,
    applied: Option<&[Vec<String>]>,
) -> Vec<String> {
    let arrow_width = inputs
        .map(|inputs| inputs.iter().map(|w| width(w)).max().unwrap_or(0))
        .unwrap_or(0);

    let lines: Vec<String> = words
        .iter()
        .enumerate()
        .map(|(i, word)| match inputs.and_then(|inputs| inputs.get(i)) {
            Some(input) if !input.is_empty() => {
                format!("{}{ARROW}{word}", pad(input, arrow_width))
            }
            _ => word.clone(),
        })
        .collect();

    let Some(applied) = applied else {
        return lines;
    };
    let rules_width = lines.iter().map(|l| width(l)).max().unwrap_or(0);

    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| match applied.get(i) {
            Some(rules) if !rules.is_empty() => {
                format!("{} [{}]", pad(&line, rules_width), rules.join("; "))
            }
            Some(_) => pad(&line, rules_width),
            None => line,
        })
        .collect()
}

/// Writes `lines` to `path`, one per line.
///
/// # Errors
/// Fails with an I/O error naming the path.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut contents = lines.join("\n");
    if !lines.is_empty() {
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|e| Error::io(path.display().to_string(), e))
}
