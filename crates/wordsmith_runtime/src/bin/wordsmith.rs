//! Wordsmith CLI entry point.

use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use wordsmith_foundation::Result;
use wordsmith_runtime::{Command, Session, USAGE, parse_args, seed_from_env};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Command::Version => {
            println!("wordsmith {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Run(mut config) => {
            if config.seed.is_none() {
                config.seed = seed_from_env()?;
            }
            tracing::debug!(?config, "starting run");
            Session::new(config).run().map(|_| ())
        }
    }
}
