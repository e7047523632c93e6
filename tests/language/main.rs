//! Integration tests for Layer 1: Language
//!
//! Tests for the line lexer, notation expansion, and the grammar parser.

mod notation;
mod parser;
