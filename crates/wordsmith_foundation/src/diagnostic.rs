//! Typed diagnostic records.
//!
//! Parsing and rule application never print. They push [`Diagnostic`]s into a
//! [`Diagnostics`] collector and the caller decides how to render them.

use std::fmt;

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational report (expansions, weights).
    Info,
    /// Recoverable problem; the offending item was skipped.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "Info"),
            Self::Warning => write!(f, "Warning"),
        }
    }
}

/// What a diagnostic is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Line is not a category, rule, structure rule, or section marker.
    UnrecognizedLine,
    /// Replacement rule has an unusable shape and was dropped.
    InvalidRule,
    /// Category-to-category rule between categories of different sizes.
    CategoryLengthMismatch,
    /// Dictionary word contains notation characters.
    ProblematicDictionaryWord,
    /// Stress pattern value could not be used.
    InvalidStressPattern,
    /// Structure rule expanded into several templates.
    RuleExpanded,
    /// Category carries non-uniform weights.
    CategoryWeights,
    /// Structure rules carry non-uniform weights.
    RuleWeights,
}

/// A single diagnostic record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of the record.
    pub severity: Severity,
    /// Kind of the record.
    pub kind: DiagnosticKind,
    /// 1-based source line, when the record points at one.
    pub line: Option<usize>,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a warning.
    #[must_use]
    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            line: None,
            message: message.into(),
        }
    }

    /// Creates an informational record.
    #[must_use]
    pub fn info(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            kind,
            line: None,
            message: message.into(),
        }
    }

    /// Attaches a source line.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Returns true for warnings.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Info => write!(f, "{}", self.message),
            Severity::Warning => write!(f, "Warning: {}", self.message),
        }
    }
}

/// Ordered collection of diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.records.push(diagnostic);
    }

    /// Appends a warning pointing at `line`.
    pub fn warn(&mut self, kind: DiagnosticKind, line: Option<usize>, message: impl Into<String>) {
        let mut diagnostic = Diagnostic::warning(kind, message);
        diagnostic.line = line;
        self.push(diagnostic);
    }

    /// Appends an informational record.
    pub fn info(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.push(Diagnostic::info(kind, message));
    }

    /// Moves every record of `other` into this collector.
    pub fn extend(&mut self, other: Diagnostics) {
        self.records.extend(other.records);
    }

    /// Iterates over all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter()
    }

    /// Iterates over warnings only.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter().filter(|d| d.is_warning())
    }

    /// Iterates over records of the given kind.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter().filter(move |d| d.kind == kind)
    }

    /// Returns true if any record has the given kind.
    #[must_use]
    pub fn contains(&self, kind: DiagnosticKind) -> bool {
        self.records.iter().any(|d| d.kind == kind)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
