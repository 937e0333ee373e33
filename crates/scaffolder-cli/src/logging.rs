//! Diagnostics for the `scaffolder` binary.
//!
//! The core and adapter crates emit spans and events; only this module
//! installs a subscriber. Events always go to stderr so `--dry-run` source
//! and `--output-format json` summaries on stdout can be piped untouched.
//!
//! `-q` keeps errors only, each `-v` raises the level one step from WARN,
//! and `RUST_LOG` replaces the whole filter when present.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the requested level.
const CRATES: [&str; 3] = ["scaffolder", "scaffolder_core", "scaffolder_adapters"];

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = level_for(args);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level)));

    // Module targets only help when tracing through the service layer.
    let detailed = level >= LevelFilter::DEBUG;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(detailed)
        .with_line_number(detailed)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("could not install the log subscriber: {e}"))
}

fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
