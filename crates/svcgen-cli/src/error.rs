//! Error handling for the `generate` CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping
//!
//! Skips, aborts and per-entity failures are not errors; they live in the
//! generation report. A `CliError` means the command could not run at all.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use svcgen_core::error::SvcgenError;

pub use svcgen_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (validation failed).
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The container directory for services could not be created.
    #[error("Could not create the services directory '{}'", path.display())]
    BaseDirectory {
        path: PathBuf,
        #[source]
        source: SvcgenError,
    },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `svcgen-core`.
    #[error("Generation failed: {0}")]
    Core(#[from] SvcgenError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::BaseDirectory { path, source } => {
                let mut suggestions = vec![
                    format!("Make sure '{}' can be created here", path.display()),
                    "Check permissions of the current directory".into(),
                    "Set generation.services_dir to another location".into(),
                ];
                suggestions.extend(source.suggestions());
                suggestions
            }

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Run 'generate config path' to see which file is read".into(),
                "Use 'generate init --force' to write a fresh default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check that stdin and stdout are still open".into(),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::BaseDirectory { .. } => ErrorCategory::Internal,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Io | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        use std::fmt::Write as _;

        let paint = |text: String, style: fn(&str) -> String| -> String {
            if color { style(&text) } else { text }
        };

        let mut out = String::new();
        let headline = paint(format!("Error: {self}"), |t| t.red().bold().to_string());
        let _ = writeln!(out, "\n{headline}");

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = paint(format!("Caused by: {err}"), |t| t.dimmed().to_string());
                let _ = writeln!(out, "  {line}");
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let title = paint("Suggestions:".into(), |t| t.yellow().bold().to_string());
            let _ = writeln!(out, "\n{title}");
            for s in &suggestions {
                let _ = writeln!(out, "  - {s}");
            }
        }

        if !verbose {
            let hint = paint(
                "Use -v / --verbose for more details.".into(),
                |t| t.dimmed().to_string(),
            );
            let _ = writeln!(out, "\n{hint}");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
///
/// Two concrete impls are provided:
/// - `Result<T, std::io::Error>` → `CliError::IoError`
/// - `Result<T, toml::ser::Error>` → `CliError::ConfigError`
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::ser::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| {
            let context: String = f().into();
            CliError::ConfigError {
                message: format!("{context}: {e}"),
                source: Some(Box::new(e)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use svcgen_core::application::ApplicationError;
    use svcgen_core::domain::DomainError;

    fn fs_error() -> SvcgenError {
        ApplicationError::FilesystemError {
            path: PathBuf::from("Services"),
            reason: "Permission denied".into(),
        }
        .into()
    }

    #[test]
    fn base_directory_keeps_core_suggestions() {
        let err = CliError::BaseDirectory {
            path: PathBuf::from("Services"),
            source: fs_error(),
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("services_dir")));
        assert!(suggestions.len() > 3);
    }

    #[test]
    fn exit_code_user_error() {
        let err: CliError = SvcgenError::from(DomainError::EmptyName).into();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
        assert_eq!(CliError::Core(fs_error()).exit_code(), 1);
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::BaseDirectory {
            path: PathBuf::from("Services"),
            source: fs_error(),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error: Could not create the services directory 'Services'"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::BaseDirectory {
            path: PathBuf::from("Services"),
            source: fs_error(),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by:"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
