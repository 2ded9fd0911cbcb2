//! Application layer for svcgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, PromptService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Report**: Per-entity outcomes of one command
//! - **Errors**: Application-specific error types

pub mod error;
pub mod ports;
pub mod report;
pub mod services;

pub use services::{Collection, PromptService, ScaffoldService};

pub use ports::{Filesystem, GenerationObserver, Prompter, TemplateRenderer};

pub use error::ApplicationError;
pub use report::{AbortReason, EntityOutcome, GenerationReport};
