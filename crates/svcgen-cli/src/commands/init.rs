//! `generate init`: create a default configuration file.

use std::path::Path;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    dispatch::CommandOutcome,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Write the default configuration to `--config`, or the platform config
/// path when no file was given.
pub fn execute(
    args: InitArgs,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<CommandOutcome> {
    let path = global.config.clone().unwrap_or_else(AppConfig::config_path);
    write_default(&path, args.force, output)?;
    Ok(CommandOutcome::Done)
}

fn write_default(config_path: &Path, force: bool, output: &OutputManager) -> CliResult<bool> {
    output.info("Initialising configuration...")?;

    if config_path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(false);
    }

    let toml = toml::to_string_pretty(&AppConfig::default())
        .with_cli_context(|| "Failed to serialise default config")?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(true)
}
