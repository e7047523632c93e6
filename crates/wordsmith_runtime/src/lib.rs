//! Command-line interface and run orchestration for Wordsmith.
//!
//! This crate provides:
//! - [`parse_args`] - Combined single-letter flags and positional arguments
//! - [`RunConfig`] - Validated settings for one run
//! - [`Session`] - Reads a grammar, generates or processes words, writes output
//! - [`format_lines`] - Output alignment for `input → output` and rule notes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod output;
pub mod session;

pub use cli::{Command, SEED_ENV, USAGE, parse_args, seed_from_env};
pub use config::{Mode, RunConfig};
pub use output::{format_lines, write_lines};
pub use session::{Report, Session};
