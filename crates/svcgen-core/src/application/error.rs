//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Reading an answer or writing a prompt failed.
    #[error("Prompt I/O failed: {reason}")]
    PromptFailed { reason: String },

    /// Adapter state could not be accessed (lock poisoned, etc.).
    #[error("Adapter state unavailable: {name}")]
    AdapterUnavailable { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Run the command from an interactive terminal".into(),
                "Or pipe the answers in, one per line".into(),
            ],
            Self::AdapterUnavailable { name } => vec![
                format!("Component in an inconsistent state: {}", name),
                "Try again".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::PromptFailed { .. } => ErrorCategory::Io,
            Self::AdapterUnavailable { .. } => ErrorCategory::Internal,
        }
    }
}
