//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Category, CategoryTable, Error, and Diagnostics.

mod categories;
mod diagnostics;
mod errors;
