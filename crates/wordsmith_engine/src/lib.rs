//! Sound-change engine, syllabifier, and word generator for Wordsmith.
//!
//! This crate provides:
//! - [`Environment`] - Compiled `LEFT_RIGHT` context matching
//! - [`CompiledRule`] - Insertion, deletion, and replacement scans
//! - [`Pipeline`] - Ordered rule application with rule tracking
//! - [`Syllabifier`] - Syllable boundaries and stress assignment
//! - [`WordGenerator`] - Weighted template sampling

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod environment;
pub mod generate;
pub mod pattern;
pub mod pipeline;
pub mod rule;
pub mod syllabify;
pub mod syllable;


pub use environment::{Context, ContextToken, Environment, matches};
pub use generate::{WordGenerator, rng_from_seed};
pub use pattern::{InputPattern, replacement_output};
pub use pipeline::{Outcome, Pipeline, PipelineOptions, apply_rules, rules_need_marks};
pub use rule::{CompiledRule, RuleAction, apply_rule};
pub use syllabify::Syllabifier;
pub use syllable::{Stress, apply_stress_conditioned, apply_syllable_rule, detach_stress};
