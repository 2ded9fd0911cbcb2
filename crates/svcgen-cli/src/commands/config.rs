//! `generate config`: inspect configuration values.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    dispatch::CommandOutcome,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Every key accepted by `generate config get`.
const KEYS: &[&str] = &[
    "output.no_color",
    "output.format",
    "generation.services_dir",
    "generation.name_policy",
    "generation.exit_policy",
];

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&PathBuf>,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<CommandOutcome> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(config)
                .with_cli_context(|| "Failed to serialise config")?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = config_file.cloned().unwrap_or_else(AppConfig::config_path);
            output.print(&path.display().to_string())?;
        }
    }

    Ok(CommandOutcome::Done)
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "generation.services_dir" => Ok(config.generation.services_dir.display().to_string()),
        "generation.name_policy" => Ok(config.generation.name_policy.as_str().to_string()),
        "generation.exit_policy" => Ok(config.generation.exit_policy.as_str().to_string()),
        _ => Err(CliError::InvalidInput {
            message: format!("Unknown config key '{key}' (known keys: {})", KEYS.join(", ")),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
