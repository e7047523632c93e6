//! `{N}` weight annotations.

use wordsmith_foundation::{Error, Result};

/// Parses the text between weight braces.
///
/// # Errors
/// Returns [`InvalidWeight`](wordsmith_foundation::ErrorKind::InvalidWeight)
/// unless `inner` is a positive integer.
pub fn parse_weight(inner: &str, line: usize) -> Result<usize> {
    match inner.parse::<usize>() {
        Ok(0) => Err(Error::invalid_weight(
            line,
            format!("Invalid weight '{{{inner}}}': weight must be at least 1"),
        )),
        Ok(weight) if inner.chars().all(|c| c.is_ascii_digit()) => Ok(weight),
        _ => Err(Error::invalid_weight(
            line,
            format!("Invalid weight '{{{inner}}}': weight must be a positive integer"),
        )),
    }
}

/// Splits a trailing `{N}` annotation off `text`.
///
/// Returns the text without the annotation and the weight (1 when absent).
///
/// # Errors
/// Fails when braces are unmatched, when the annotation is not at the very
/// end, or when the weight itself is invalid.
pub fn split_trailing_weight(text: &str, line: usize) -> Result<(&str, usize)> {
    let Some(open) = text.find('{') else {
        if text.contains('}') {
            return Err(Error::invalid_weight(
                line,
                format!("Unmatched closing brace '}}' in '{text}'"),
            ));
        }
        return Ok((text, 1));
    };

    let head = &text[..open];
    let tail = &text[open + 1..];
    let Some(close) = tail.find('}') else {
        return Err(Error::invalid_weight(
            line,
            format!("Unmatched opening brace '{{' in '{text}'"),
        ));
    };
    if head.contains('}') {
        return Err(Error::invalid_weight(
            line,
            format!("Unmatched closing brace '}}' in '{text}'"),
        ));
    }

    let inner = &tail[..close];
    if close + 1 != tail.len() {
        return Err(Error::invalid_weight(
            line,
            format!("Weight '{{{inner}}}' must be at the end of '{text}'"),
        ));
    }

    Ok((head, parse_weight(inner, line)?))
}
