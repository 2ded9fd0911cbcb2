//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! high-level use cases: "collect service names" and "scaffold entities".

pub mod prompt_service;
pub mod scaffold_service;

pub use prompt_service::{Collection, PromptService};
pub use scaffold_service::{PlanDecision, ScaffoldService};
