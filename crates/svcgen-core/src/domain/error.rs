// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside per-entity reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// The `Display` text of the input-validation variants is shown to the user
/// verbatim when the prompt sequencer rejects a line.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Input Validation Errors
    // ========================================================================
    #[error("Please enter a valid number (got '{input}').")]
    InvalidCount { input: String },

    #[error("The service name cannot be empty.")]
    EmptyName,

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    // ========================================================================
    // Plan Invariant Violations
    // ========================================================================
    #[error("Scaffold plan for '{entity}' is empty")]
    EmptyPlan { entity: String },

    #[error("Duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed inside a scaffold plan: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidCount { .. } => vec![
                "Enter a positive whole number, e.g. 3".into(),
                "Run the command again to start over".into(),
            ],
            Self::EmptyName => vec!["Type a name and press Enter".into()],
            Self::InvalidName { reason, .. } => vec![
                format!("Details: {reason}"),
                "Use letters, digits, '-' and '_' only".into(),
            ],
            Self::EmptyPlan { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => vec![
                "This is a bug in the built-in layouts, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCount { .. } | Self::EmptyName | Self::InvalidName { .. } => {
                ErrorCategory::Validation
            }
            Self::EmptyPlan { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
