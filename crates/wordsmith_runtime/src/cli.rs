//! Command-line parsing.
//!
//! ```text
//! wordsmith [-vdirs] [--seed N] <input_file> <output_file> <num_words>
//! wordsmith -d[virs] [--seed N] <input_file> <output_file>
//! ```
//!
//! Single-letter flags may be combined after one `-` and must come before the
//! positional arguments.

use wordsmith_foundation::{Error, ErrorKind, Result};

use crate::config::RunConfig;

/// Environment variable consulted when `--seed` is absent.
pub const SEED_ENV: &str = "WORDSMITH_SEED";

/// Usage text.
pub const USAGE: &str = "\
Usage: wordsmith [-v] [-d] [-i] [-r] [-s] [--seed N] <input_file> <output_file> <num_words>
  -v: verbose mode, also prints generated words to terminal
  -d: dictionary mode, process words from -dict section instead of generating
  -i: input mode, show input → output format (only with -d)
  -r: rules mode, show applied replacement rules in square brackets
  -s: syllabification mode, apply syllabification and stress rules
  --seed N: seed the random source for reproducible output
  -h, --help: print this help
  -V, --version: print the version";

const DICTIONARY_USAGE: &str =
    "Usage with -d: wordsmith [-v] [-d] [-i] [-r] [-s] [--seed N] <input_file> <output_file>";

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run with the given configuration.
    Run(RunConfig),
    /// Print usage and exit.
    Help,
    /// Print the version and exit.
    Version,
}

#[derive(Default)]
struct Flags {
    verbose: bool,
    dictionary: bool,
    show_input: bool,
    show_rules: bool,
    syllabify: bool,
    seed: Option<u64>,
}

/// Parses arguments, not including the program name.
///
/// # Errors
/// Fails on unknown flags, a wrong number of positional arguments, a word
/// count that is not a positive integer, or `-i` without `-d`.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let mut flags = Flags::default();
    let mut i = 0;

    while i < args.len() && args[i].starts_with('-') && args[i].len() > 1 {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--seed" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| Error::usage("--seed requires a value"))?;
                flags.seed = Some(parse_seed(value)?);
            }
            long if long.starts_with("--") => {
                return Err(Error::usage(format!("Unknown flag: {long}")));
            }
            short => {
                for c in short.chars().skip(1) {
                    match c {
                        'v' => flags.verbose = true,
                        'd' => flags.dictionary = true,
                        'i' => flags.show_input = true,
                        'r' => flags.show_rules = true,
                        's' => flags.syllabify = true,
                        other => return Err(Error::usage(format!("Unknown flag: -{other}"))),
                    }
                }
            }
        }
        i += 1;
    }

    if flags.show_input && !flags.dictionary {
        return Err(Error::usage("-i flag can only be used with -d flag"));
    }

    let positional = &args[i..];
    let config = if flags.dictionary {
        let [input, output] = positional else {
            return Err(Error::usage(DICTIONARY_USAGE));
        };
        RunConfig::dictionary(input, output)
    } else {
        let [input, output, count] = positional else {
            return Err(Error::usage(USAGE));
        };
        RunConfig::generate(input, output, parse_count(count)?)
    };

    let config = config
        .with_verbose(flags.verbose)
        .with_show_input(flags.show_input)
        .with_show_rules(flags.show_rules)
        .with_syllabify(flags.syllabify)
        .with_seed(flags.seed);
    config.validate()?;
    Ok(Command::Run(config))
}

fn parse_count(text: &str) -> Result<usize> {
    match text.parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n)
            .map_err(|_| Error::new(ErrorKind::InvalidWordCount("a valid integer.".to_string()))),
        Ok(_) => Err(Error::new(ErrorKind::InvalidWordCount(
            "a positive integer.".to_string(),
        ))),
        Err(_) => Err(Error::new(ErrorKind::InvalidWordCount(
            "a valid integer.".to_string(),
        ))),
    }
}

fn parse_seed(text: &str) -> Result<u64> {
    text.parse()
        .map_err(|_| Error::usage(format!("invalid seed value: {text}")))
}

/// Reads the seed from [`SEED_ENV`], if set.
///
/// # Errors
/// Fails when the variable is set but is not an unsigned integer.
pub fn seed_from_env() -> Result<Option<u64>> {
    match std::env::var(SEED_ENV) {
        Ok(value) if !value.trim().is_empty() => parse_seed(value.trim()).map(Some),
        _ => Ok(None),
    }
}
