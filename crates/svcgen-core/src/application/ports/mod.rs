//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `svcgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation, file writes, existence checks
//!   - `TemplateRenderer`: Text for each generated file kind
//!   - `GenerationObserver`: Progress notifications per entity
//!
//! - **Input Ports**: Where answers come from
//!   - `Prompter`: Line-based question/answer channel

pub mod input;
pub mod output;

pub use input::Prompter;
pub use output::{Filesystem, GenerationObserver, TemplateRenderer};

#[cfg(test)]
pub use input::MockPrompter;
#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateRenderer};
