//! Cross-layer integration tests for Wordsmith
//!
//! Tests that verify correct interaction between multiple crates.

mod dictionary_run;
mod generation_run;
