//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `svcgen-adapters` crate provides implementations.

use std::path::Path;

use crate::application::report::EntityOutcome;
use crate::domain::{RenderContext, ScaffoldPlan, TemplateKind};
use crate::error::SvcgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `svcgen_adapters::filesystem::LocalFilesystem` (production)
/// - `svcgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> SvcgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `svcgen_adapters::renderer::SimpleRenderer` (built-in sources,
///   `{{ENTITY_NAME}}` substitution)
///
/// Rendering is infallible and deterministic: the same kind and context
/// always yield the same text.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, kind: TemplateKind, context: &RenderContext) -> String;
}

/// Progress hook called by the scaffold service around each entity.
///
/// Both methods default to no-ops; `()` is the silent observer.
pub trait GenerationObserver {
    /// About to materialize `plan`.
    fn on_start(&mut self, _plan: &ScaffoldPlan) {}

    /// `outcome` is final for its entity.
    fn on_outcome(&mut self, _outcome: &EntityOutcome) {}
}

impl GenerationObserver for () {}
