//! `generate`: interactive generator for Express/Mongoose service and API
//! skeletons.
//!
//! `main` reads `.env`, parses arguments, installs the tracing subscriber,
//! loads [`AppConfig`] and runs the chosen command once through the
//! [`Dispatcher`]. A finished command is mapped to a status by the
//! [`ExitPolicy`]; a [`CliError`] maps to its own code.
//!
//! | Code | Meaning                                                    |
//! |------|------------------------------------------------------------|
//! |  0   | Success; every generation run under the lenient policy     |
//! |  1   | Internal or system error; strict: an entity failed         |
//! |  2   | Usage or input error; strict: aborted or skipped           |
//! |  4   | Configuration error                                        |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    dispatch::{CommandOutcome, Dispatcher, ExitPolicy},
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod dispatch;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too.
            let _ = e.print();
            return ExitCode::from(e.exit_code().clamp(0, 255) as u8);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        strict = cli.global.strict,
        "arguments parsed"
    );

    // `init` may target a file that does not exist yet.
    let require_config = !matches!(cli.command, Commands::Init(_));
    let config = match AppConfig::load(cli.global.config.as_ref(), require_config) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            };
            return handle_error(err, cli.global.verbose > 0, cli.global.no_color);
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    let policy = ExitPolicy::resolve(cli.global.strict, config.generation.exit_policy);
    let verbose = cli.global.verbose > 0;
    let no_color = !output.supports_color();

    let dispatcher = Dispatcher::new();
    match dispatcher.dispatch(cli.command.name(), || run(cli, &config, &output)) {
        None => ExitCode::SUCCESS,
        Some(Ok(outcome)) => {
            let code = policy.exit_code(&outcome);
            info!(policy = policy.as_str(), code, "generate finished");
            ExitCode::from(code)
        }
        Some(Err(e)) => handle_error(e, verbose, no_color),
    }
}

/// Run one subcommand.
#[instrument(skip_all, fields(command = cli.command.name()))]
fn run(cli: Cli, config: &AppConfig, output: &OutputManager) -> CliResult<CommandOutcome> {
    match cli.command {
        Commands::Services => commands::services::execute(config, output),
        Commands::Api(args) => commands::api::execute(args, config, output),
        Commands::Init(args) => commands::init::execute(args, &cli.global, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => {
            commands::config::execute(cmd, cli.global.config.as_ref(), config, output)
        }
    }
}

/// Print `err` on stderr and return its exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let msg = if !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
