//! # Scaffolder CLI
//!
//! Generates Spiral-style PHP classes: `scaffolder create:record user -f id:primary`.
//!
//! Startup loads `.env`, parses arguments, installs logging, merges the
//! config file and `SCAFFOLDER_*` variables, then hands one command the
//! settings and an [`OutputManager`]. Failures become a stderr report and
//! one of the exit codes below.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::{io::IsTerminal as _, process::ExitCode};

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // `.env` may carry SCAFFOLDER_* settings; a missing file is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version land here too and exit 0.
        Err(e) => e.exit(),
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("scaffolder: {e:#}");
        return ExitCode::from(1);
    }

    let verbose = cli.global.verbose > 0;
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            };
            return fail(err, verbose, !cli.global.no_color);
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    let color = output.supports_color();
    debug!(command = ?cli.command, format = ?output.format(), "dispatching");

    match run(cli, config, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e, verbose, color),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    use commands::create;

    match cli.command {
        Commands::CreateBootloader(args) => create::bootloader(args, config, output),
        Commands::CreateConfig(args) => create::config(args, config, output),
        Commands::CreateController(args) => create::controller(args, config, output),
        Commands::CreateMiddleware(args) => create::middleware(args, config, output),
        Commands::CreateCommand(args) => create::command(args, config, output),
        Commands::CreateJobHandler(args) => create::job_handler(args, config, output),
        Commands::CreateMigration(args) => create::migration(args, config, output),
        Commands::CreateFilter(args) => create::filter(args, config, output),
        Commands::CreateEntity(args) => create::entity(args, config, output),
        Commands::CreateRepository(args) => create::repository(args, config, output),
        Commands::CreateRecord(args) => create::record(args, config, output),
        Commands::List => commands::list::execute(config, output),
        Commands::Init(args) => commands::init::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Settings(cmd) => commands::settings::execute(cmd, config, output),
    }
}

/// Log `err`, print its report to stderr and pick the exit code.
fn fail(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.trace();
    let color = color && std::io::stderr().is_terminal();
    eprint!("{}", err.report(verbose, color));
    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn every_kind_has_a_create_command() {
        let cmd = Cli::command();
        for kind in scaffolder_core::domain::DeclarationKind::ALL {
            let name = kind.command_name();
            assert!(
                cmd.find_subcommand(&name).is_some(),
                "missing subcommand {name}"
            );
        }
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
