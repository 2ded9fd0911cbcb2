//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SVCGEN_<SECTION>__<KEY>`, e.g.
//!    `SVCGEN_GENERATION__SERVICES_DIR=Backends`
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use svcgen_core::domain::{NamePolicy, PathSafe, Verbatim};

use crate::dispatch::ExitPolicy;

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "SVCGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Generation settings.
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Container for `generate services`, relative to the working directory.
    pub services_dir: PathBuf,
    pub name_policy: NamePolicyKind,
    pub exit_policy: ExitPolicy,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            services_dir: PathBuf::from("Services"),
            name_policy: NamePolicyKind::default(),
            exit_policy: ExitPolicy::default(),
        }
    }
}

/// Which name policy to hand to the core services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamePolicyKind {
    /// Any non-blank name, interpolated as typed.
    #[default]
    Verbatim,
    /// Reject names that are not a single safe path segment.
    PathSafe,
}

impl NamePolicyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verbatim => "verbatim",
            Self::PathSafe => "path-safe",
        }
    }

    pub fn build(self) -> Arc<dyn NamePolicy> {
        match self {
            Self::Verbatim => Arc::new(Verbatim),
            Self::PathSafe => Arc::new(PathSafe),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// A file given with `--config` must exist when `require_explicit` is
    /// set; the default location is always optional.
    pub fn load(config_file: Option<&PathBuf>, require_explicit: bool) -> anyhow::Result<Self> {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);

        match config_file {
            Some(path) => Self::load_from(path, require_explicit, env),
            None => Self::load_from(&Self::config_path(), false, env),
        }
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.svcgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "svcgen", "svcgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".svcgen.toml"))
    }
}
