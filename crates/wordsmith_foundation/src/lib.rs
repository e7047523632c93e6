//! Core types, categories, errors, and diagnostics for Wordsmith.
//!
//! This crate provides:
//! - [`Category`] and [`CategoryTable`] - Named phoneme classes with sampling weights
//! - [`Error`] - Fatal errors with context
//! - [`Diagnostic`] and [`Diagnostics`] - Recoverable, typed diagnostic records
//! - [`symbols`] - Reserved notation characters shared by every layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod diagnostic;
pub mod error;
pub mod symbols;

pub use category::{Category, CategoryTable};
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use error::{Error, ErrorContext, ErrorKind, Result};
