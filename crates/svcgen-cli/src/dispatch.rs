//! One-shot command dispatch and exit-status policy.
//!
//! The dispatcher runs at most one command per process. Its state moves
//! `NotStarted -> Running -> Completed` with a compare-and-swap taken before
//! the command has any side effect; a second dispatch is logged and ignored.

use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};
use svcgen_core::application::GenerationReport;
use tracing::{debug, warn};

use crate::error::CliResult;

/// Where the dispatcher is in its single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InvocationState {
    NotStarted = 0,
    Running = 1,
    Completed = 2,
}

impl InvocationState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::NotStarted,
            1 => Self::Running,
            _ => Self::Completed,
        }
    }
}

/// What a command handed back to `main`.
#[derive(Debug)]
pub enum CommandOutcome {
    /// A command without a generation report (`init`, `config`, ...).
    Done,
    /// `services` or `api` finished; the report drives the exit status.
    Generated(GenerationReport),
}

/// How a finished generation maps to the process exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExitPolicy {
    /// Always exit 0 once the command has run.
    #[default]
    Lenient,
    /// Exit 1 on any failed entity, 2 on an abort or a skipped entity.
    Strict,
}

impl ExitPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }

    /// `--strict` always wins over the configured policy.
    pub fn resolve(strict_flag: bool, configured: ExitPolicy) -> Self {
        if strict_flag { Self::Strict } else { configured }
    }

    pub fn exit_code(self, outcome: &CommandOutcome) -> u8 {
        let CommandOutcome::Generated(report) = outcome else {
            return 0;
        };
        match self {
            Self::Lenient => 0,
            Self::Strict if report.failed() > 0 => 1,
            Self::Strict if report.abort_reason().is_some() || report.skipped() > 0 => 2,
            Self::Strict => 0,
        }
    }
}

/// Runs a command at most once.
#[derive(Debug)]
pub struct Dispatcher {
    state: AtomicU8,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(InvocationState::NotStarted as u8),
        }
    }

    pub fn state(&self) -> InvocationState {
        InvocationState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Run `command` if nothing has been dispatched yet.
    ///
    /// Returns `None` when a previous dispatch already claimed this
    /// dispatcher.
    pub fn dispatch<F>(&self, name: &'static str, command: F) -> Option<CliResult<CommandOutcome>>
    where
        F: FnOnce() -> CliResult<CommandOutcome>,
    {
        if let Err(current) = self.state.compare_exchange(
            InvocationState::NotStarted as u8,
            InvocationState::Running as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            warn!(
                command = name,
                state = ?InvocationState::from_u8(current),
                "Command already dispatched, ignoring"
            );
            return None;
        }

        debug!(command = name, "Dispatching");
        let result = command();
        self.state
            .store(InvocationState::Completed as u8, Ordering::Release);
        Some(result)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
