//! Integration tests for Layer 2: Engine
//!
//! Tests for word generation, sound-change application, and syllables.

mod generation;
mod syllables;
