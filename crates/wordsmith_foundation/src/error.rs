//! Error types for the Wordsmith system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Everything here is fatal; recoverable problems travel as
//! [`Diagnostic`](crate::Diagnostic)s instead.

use std::fmt;

use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Wordsmith operations.
#[derive(Debug, Error)]
#[error("{kind}{}", .context.as_ref().map(|c| format!(" ({c})")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a usage error.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage(message.into()))
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            source,
        })
    }

    /// Creates a reserved character error.
    #[must_use]
    pub fn reserved_character(line: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ReservedCharacter {
            line,
            message: message.into(),
        })
    }

    /// Creates an invalid weight error.
    #[must_use]
    pub fn invalid_weight(line: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidWeight {
            line,
            message: message.into(),
        })
    }

    /// Creates an invalid colon error.
    #[must_use]
    pub fn invalid_colon(line: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidColon {
            line,
            message: message.into(),
        })
    }

    /// Returns the source line this error points at, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match &self.kind {
            ErrorKind::ReservedCharacter { line, .. }
            | ErrorKind::InvalidWeight { line, .. }
            | ErrorKind::InvalidColon { line, .. } => Some(*line),
            _ => self.context.as_ref().and_then(|c| c.line),
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Malformed command-line usage.
    #[error("{0}")]
    Usage(String),

    /// Word count argument was not a positive integer.
    #[error("Number of words must be {0}")]
    InvalidWordCount(String),

    /// File could not be read or written.
    #[error("cannot access '{path}': {source}")]
    Io {
        /// Path of the file involved.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A reserved character was used in a category.
    #[error("Line {line}: {message}")]
    ReservedCharacter {
        /// Line number (1-indexed).
        line: usize,
        /// Description of the misuse.
        message: String,
    },

    /// A weight annotation was malformed or misplaced.
    #[error("Line {line}: {message}")]
    InvalidWeight {
        /// Line number (1-indexed).
        line: usize,
        /// Description of the brace problem.
        message: String,
    },

    /// A colon appeared somewhere other than a category definition.
    #[error("Line {line}: {message}")]
    InvalidColon {
        /// Line number (1-indexed).
        line: usize,
        /// Description of the colon problem.
        message: String,
    },

    /// Generation requested but no word structure rules were found.
    #[error("No word structure rules found in input file.")]
    NoStructureRules,

    /// Dictionary mode requested but the dictionary is empty.
    #[error("No dictionary words found in -dict section.")]
    NoDictionaryWords,

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line) {
            (Some(source), Some(line)) => write!(f, "at {source}:{line}"),
            (Some(source), None) => write!(f, "at {source}"),
            (None, Some(line)) => write!(f, "at line {line}"),
            (None, None) => Ok(()),
        }
    }
}
