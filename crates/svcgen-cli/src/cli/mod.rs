//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "generate",
    bin_name = "generate",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate Express/Mongoose service and API skeletons",
    long_about = "generate creates stub controllers, models, routes and \
                  configuration for CRUD services and single-endpoint APIs.",
    after_help = "EXAMPLES:\n\
        \x20 generate services\n\
        \x20 generate api Widget\n\
        \x20 generate completions bash > /usr/share/bash-completion/completions/generate",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactively create CRUD services under ./Services.
    #[command(
        visible_alias = "s",
        about = "Generate the folder structure for CRUD services",
        after_help = "Asks how many services to create, then one name per service.\n\
            Each service gets controllers/, models/, routes/ and config/.\n\n\
            EXAMPLES:\n\
            \x20 generate services\n\
            \x20 printf '2\\nOrder\\nUser\\n' | generate services"
    )]
    Services,

    /// Create a single-endpoint API skeleton in ./<NAME>.
    #[command(
        visible_alias = "a",
        about = "Generate the folder structure for an API",
        after_help = "EXAMPLES:\n\
            \x20 generate api Widget"
    )]
    Api(ApiArgs),

    /// Initialise a configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 generate init\n\
            \x20 generate init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 generate completions bash > ~/.local/share/bash-completion/completions/generate\n\
            \x20 generate completions zsh  > ~/.zfunc/_generate\n\
            \x20 generate completions fish > ~/.config/fish/completions/generate.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 generate config get generation.services_dir\n\
            \x20 generate config list\n\
            \x20 generate config path"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// Short name used in logs and the JSON summary.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Api(_) => "api",
            Self::Init(_) => "init",
            Self::Completions(_) => "completions",
            Self::Config(_) => "config",
        }
    }
}

// ── api ───────────────────────────────────────────────────────────────────────

/// Arguments for `generate api`.
#[derive(Debug, Args)]
pub struct ApiArgs {
    /// Name of the API directory and the interpolated identifier.
    #[arg(value_name = "NAME", help = "API name")]
    pub name: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `generate init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `generate completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `generate config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generation.services_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
