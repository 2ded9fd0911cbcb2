//! Interactive name collection as an explicit state machine.
//!
//! ```text
//! AwaitCount ──valid──▶ AwaitName(0) ──▶ … ──▶ AwaitName(n-1) ──▶ Collected
//!     │                      ▲   │
//!     │ invalid              └───┘ blank / rejected name (same slot)
//!     ▼
//!   Closed  ◀── end of input from any awaiting state
//! ```
//!
//! The sequencer performs no I/O. A driver asks for [`PromptSequencer::prompt`],
//! reads one line, and feeds it to [`PromptSequencer::submit`].

use std::sync::Arc;

use crate::domain::{
    entity::{EntityName, NamePolicy, Verbatim},
    error::DomainError,
};

/// Where the sequencer currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    AwaitCount,
    AwaitName { index: usize, count: usize },
    Collected,
    Closed,
}

/// Result of feeding one line to the sequencer.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The line was accepted and the sequencer moved to the next slot.
    Advanced,
    /// The line was rejected; the same slot must be answered again.
    Retry(DomainError),
    /// The last name was accepted.
    Collected,
    /// The count was rejected; no names will be collected.
    Closed(DomainError),
    /// The sequencer is already finished and ignores further input.
    Ignored,
}

pub struct PromptSequencer {
    state: PromptState,
    names: Vec<EntityName>,
    policy: Arc<dyn NamePolicy>,
}

impl PromptSequencer {
    pub fn new(policy: Arc<dyn NamePolicy>) -> Self {
        Self {
            state: PromptState::AwaitCount,
            names: Vec::new(),
            policy,
        }
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, PromptState::Collected | PromptState::Closed)
    }

    /// Text to show for the current slot, or `None` once finished.
    pub fn prompt(&self) -> Option<String> {
        match self.state {
            PromptState::AwaitCount => Some("How many services do you want to create? ".into()),
            PromptState::AwaitName { index, .. } => {
                Some(format!("Name of service {}: ", index + 1))
            }
            PromptState::Collected | PromptState::Closed => None,
        }
    }

    /// Feed one input line (without its line terminator).
    pub fn submit(&mut self, line: &str) -> Transition {
        match self.state {
            PromptState::AwaitCount => match parse_count(line) {
                Some(count) => {
                    self.state = PromptState::AwaitName { index: 0, count };
                    Transition::Advanced
                }
                None => {
                    self.state = PromptState::Closed;
                    Transition::Closed(DomainError::InvalidCount {
                        input: line.to_string(),
                    })
                }
            },
            PromptState::AwaitName { index, count } => {
                match EntityName::checked(line, self.policy.as_ref()) {
                    Ok(name) => {
                        self.names.push(name);
                        if index + 1 == count {
                            self.state = PromptState::Collected;
                            Transition::Collected
                        } else {
                            self.state = PromptState::AwaitName {
                                index: index + 1,
                                count,
                            };
                            Transition::Advanced
                        }
                    }
                    Err(e) => Transition::Retry(e),
                }
            }
            PromptState::Collected | PromptState::Closed => Transition::Ignored,
        }
    }

    /// Input ended. Anything partially collected is discarded.
    pub fn close(&mut self) {
        if self.state != PromptState::Collected {
            self.names.clear();
            self.state = PromptState::Closed;
        }
    }

    /// The collected names; empty unless the sequencer reached `Collected`.
    pub fn into_names(self) -> Vec<EntityName> {
        match self.state {
            PromptState::Collected => self.names,
            _ => Vec::new(),
        }
    }
}

impl Default for PromptSequencer {
    fn default() -> Self {
        Self::new(Arc::new(Verbatim))
    }
}

/// Parse a service count with leading-integer semantics.
///
/// Leading whitespace is skipped, an optional sign and the longest run of
/// ASCII digits are read, and anything after them is ignored. Only strictly
/// positive values that fit in `usize` are accepted.
pub fn parse_count(input: &str) -> Option<usize> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: usize = digits[..end].parse().ok()?;
    if negative || value == 0 {
        return None;
    }
    Some(value)
}
