//! Pattern expansion and grammar-file parsing for Wordsmith.
//!
//! This crate provides:
//! - [`expand`] - Optional-group expansion for templates and environments
//! - [`Lexer`] - Comment-aware line lexer with line classification
//! - [`parse`] - Whole-file parser producing a [`ParsedInput`]
//! - [`SoundChange`], [`StructureRule`], [`SyllableSpec`] - Parsed rule types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod expand;
pub mod lexer;
pub mod parser;
pub mod rule;
pub mod structure;
pub mod syllable;
pub mod weight;


pub use category::{describe_weights, parse_category};
pub use expand::{Group, Node, Pattern, expand};
pub use lexer::{Lexer, Line, LineKind, strip_comment};
pub use parser::{ParseOptions, ParsedInput, parse};
pub use rule::{RuleShapeError, SoundChange, is_rule_line, normalize_separators};
pub use structure::{StructureRule, looks_like_structure};
pub use syllable::{StressPattern, SyllableSpec, expand_categories};
pub use weight::{parse_weight, split_trailing_weight};
