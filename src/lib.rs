//! Wordsmith - Rule-driven word generator and sound-change engine
//!
//! This crate re-exports all layers of the Wordsmith system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: wordsmith_runtime    - CLI, run configuration, sessions, output files
//! Layer 2: wordsmith_engine     - Generation, sound changes, syllabification
//! Layer 1: wordsmith_language   - Line lexer, grammar parser, notation expansion
//! Layer 0: wordsmith_foundation - Categories, errors, diagnostics, symbols
//! ```

pub use wordsmith_engine as engine;
pub use wordsmith_foundation as foundation;
pub use wordsmith_language as language;
pub use wordsmith_runtime as runtime;
