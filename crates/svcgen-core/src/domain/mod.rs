// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for svcgen.
//!
//! This module contains pure logic with no I/O. Filesystem access, template
//! sources and terminal interaction are reached through ports (traits)
//! defined in the application layer.
//!
//! - **No I/O**: the prompt sequencer consumes lines, it never reads them
//! - **No async**: everything is synchronous and single-threaded
//! - **Plans are data**: a [`ScaffoldPlan`] describes what *would* be written
pub mod entity;
pub mod error;
pub mod plan;
pub mod prompt;
pub mod template;

mod validation;

pub use entity::{EntityKind, EntityName, NamePolicy, PathSafe, Verbatim};
pub use error::{DomainError, ErrorCategory};
pub use plan::{DirectoryToCreate, FileToWrite, FsEntry, ScaffoldPlan};
pub use prompt::{PromptSequencer, PromptState, Transition, parse_count};
pub use template::{RenderContext, TemplateKind};
pub use validation::DomainValidator;
