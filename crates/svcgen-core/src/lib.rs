//! svcgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `generate`
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           svcgen-cli (CLI)              │
//! │   (Command dispatcher, exit policy)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (PromptService, ScaffoldService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Prompter, Filesystem, TemplateRenderer)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    svcgen-adapters (Infrastructure)     │
//! │ (LocalFilesystem, SimpleRenderer, ...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (EntityName, ScaffoldPlan, Sequencer)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::path::Path;
//! use svcgen_core::application::{Collection, PromptService, ScaffoldService};
//!
//! // 1. Collect names from any prompter
//! let collection = PromptService::default().collect(&mut prompter).unwrap();
//!
//! // 2. Scaffold them with injected adapters
//! let service = ScaffoldService::new(renderer, filesystem);
//! if let Collection::Names(names) = collection {
//!     let report = service.generate_services(Path::new("Services"), &names);
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AbortReason, Collection, EntityOutcome, GenerationReport, PromptService, ScaffoldService,
        ports::{Filesystem, GenerationObserver, Prompter, TemplateRenderer},
    };
    pub use crate::domain::{
        EntityKind, EntityName, NamePolicy, PathSafe, RenderContext, ScaffoldPlan, TemplateKind,
        Verbatim,
    };
    pub use crate::error::{SvcgenError, SvcgenResult};
}
