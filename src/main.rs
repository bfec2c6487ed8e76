//! Seimei CLI - Japanese name-fortune (姓名判断) calculator
//!
//! Usage: seimei <COMMAND>
//!
//! Commands:
//!   analyze   Five grids, their fortunes and the headline score
//!   elements  Five-elements profile
//!   six-star  Six-star reading for a birthdate
//!   compat    Compatibility between two names
//!   strokes   Stroke lookup for each character
//!   feedback  Community kanji corrections

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seimei::presentation::{self, Cli};
use seimei::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config decides the default log level, so it is loaded under a
    // temporary stderr subscriber before the real one is installed.
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(env_filter(cli.verbose, "warn"))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();
    let (config, warnings) = tracing::subscriber::with_default(bootstrap, || {
        Config::load_or_default(cli.config.as_deref())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cli.verbose, config.output.verbosity.filter()))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();

    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    presentation::run(&cli, &config)
}

/// `RUST_LOG` wins, then `-v`/`-vv`, then the configured verbosity
fn env_filter(verbose: u8, configured: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = match verbose {
        0 => configured,
        1 => "info",
        _ => "debug",
    };
    EnvFilter::new(format!("seimei={level}"))
}
