//! What one command did, entity by entity.
//!
//! The report never turns into an error by itself. Whether skips, aborts or
//! failures change the process exit status is decided by the caller.

use std::path::{Path, PathBuf};

use crate::domain::{DomainError, EntityKind, EntityName};
use crate::error::SvcgenError;

/// Result of planning and materializing one entity.
#[derive(Debug, Clone)]
pub enum EntityOutcome {
    /// The root did not exist and every entry was written.
    Created {
        kind: EntityKind,
        name: EntityName,
        root: PathBuf,
    },
    /// The root already existed; nothing was touched.
    Skipped {
        kind: EntityKind,
        name: EntityName,
        root: PathBuf,
    },
    /// Materialization stopped part-way. Entries written before the failure
    /// are left in place.
    Failed {
        kind: EntityKind,
        name: EntityName,
        root: PathBuf,
        error: SvcgenError,
    },
}

impl EntityOutcome {
    pub fn name(&self) -> &EntityName {
        match self {
            Self::Created { name, .. } | Self::Skipped { name, .. } | Self::Failed { name, .. } => {
                name
            }
        }
    }

    pub fn root(&self) -> &Path {
        match self {
            Self::Created { root, .. } | Self::Skipped { root, .. } | Self::Failed { root, .. } => {
                root
            }
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Created { kind, .. } | Self::Skipped { kind, .. } | Self::Failed { kind, .. } => {
                *kind
            }
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Skipped { .. } => "skipped",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn error(&self) -> Option<&SvcgenError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Why a command stopped before reaching the planner.
#[derive(Debug, Clone, PartialEq)]
pub enum AbortReason {
    /// The service count was not a positive integer.
    InvalidCount(DomainError),
    /// The API name was rejected by the name policy.
    InvalidName(DomainError),
    /// Input ended before every slot was answered.
    InputClosed,
}

impl AbortReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCount(_) => "invalid-count",
            Self::InvalidName(_) => "invalid-name",
            Self::InputClosed => "input-closed",
        }
    }
}

/// Ordered outcomes of one `services` or `api` command.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    kind: EntityKind,
    outcomes: Vec<EntityOutcome>,
    aborted: Option<AbortReason>,
}

impl GenerationReport {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            outcomes: Vec::new(),
            aborted: None,
        }
    }

    pub fn aborted(kind: EntityKind, reason: AbortReason) -> Self {
        Self {
            kind,
            outcomes: Vec::new(),
            aborted: Some(reason),
        }
    }

    pub fn push(&mut self, outcome: EntityOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn outcomes(&self) -> &[EntityOutcome] {
        &self.outcomes
    }

    pub fn abort_reason(&self) -> Option<&AbortReason> {
        self.aborted.as_ref()
    }

    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, EntityOutcome::Created { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, EntityOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, EntityOutcome::Failed { .. }))
    }

    /// Every requested entity was created and nothing was aborted.
    pub fn is_clean(&self) -> bool {
        self.aborted.is_none() && self.created() == self.outcomes.len()
    }

    fn count(&self, pred: impl Fn(&EntityOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}
