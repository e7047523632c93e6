//! Category definitions: `X: members...`.
//!
//! Members are whitespace-separated tokens. A bare token contributes each of
//! its characters once; a token ending in `{N}` contributes each of its
//! characters `N` times.
//!
//! ```text
//! V: a{3} e{2} i o u   → a a a e e i o u
//! C: ptk               → p t k
//! ```

use wordsmith_foundation::symbols::is_reserved;
use wordsmith_foundation::{Category, Error, ErrorKind, Result};

use crate::weight::split_trailing_weight;

/// Parses a category definition line.
///
/// # Errors
/// Fails on reserved characters in the name or members, and on malformed
/// weight braces.
pub fn parse_category(line: &str, line_num: usize) -> Result<Category> {
    let Some((name, members)) = line.split_once(':') else {
        return Err(Error::invalid_colon(
            line_num,
            format!("Category definition '{line}' is missing its colon"),
        ));
    };

    let mut name_chars = name.trim().chars();
    let (Some(symbol), None) = (name_chars.next(), name_chars.next()) else {
        return Err(Error::invalid_colon(
            line_num,
            "Colon must be in second position for category definitions",
        ));
    };
    if is_reserved(symbol) {
        return Err(Error::reserved_character(
            line_num,
            format!("Category name '{symbol}' uses reserved character"),
        ));
    }

    let mut weighted: Vec<(char, usize)> = Vec::new();
    for token in members.split_whitespace() {
        let (run, weight) = split_trailing_weight(token, line_num).map_err(|err| {
            Error::invalid_weight(line_num, format!("Category '{symbol}': {}", message_of(&err)))
        })?;
        if run.is_empty() {
            return Err(Error::invalid_weight(
                line_num,
                format!("Category '{symbol}': weight in '{token}' has no characters before its brace"),
            ));
        }
        if let Some(bad) = run.chars().find(|&c| is_reserved(c)) {
            return Err(Error::reserved_character(
                line_num,
                format!("Category '{symbol}' contains reserved character '{bad}'"),
            ));
        }
        weighted.extend(run.chars().map(|c| (c, weight)));
    }

    Ok(Category::weighted(symbol, &weighted))
}

/// Formats the weight summary reported for weighted categories.
#[must_use]
pub fn describe_weights(category: &Category) -> String {
    let weights: Vec<String> = category
        .weights()
        .into_iter()
        .map(|(c, w)| format!("{c}:{w}"))
        .collect();
    format!("Category '{}' weights: {}", category.symbol(), weights.join(", "))
}

fn message_of(err: &Error) -> String {
    match &err.kind {
        ErrorKind::InvalidWeight { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
