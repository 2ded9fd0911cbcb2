//! Command handlers. Each one translates parsed arguments into core service
//! calls and displays the result; no business logic lives here.

use std::sync::Arc;

use svcgen_adapters::{LocalFilesystem, SimpleRenderer};
use svcgen_core::{application::ScaffoldService, domain::NamePolicy};

pub mod api;
pub mod completions;
pub mod config;
pub mod init;
pub mod services;

/// Scaffold service over the real filesystem and the built-in templates.
fn scaffold_service(policy: Arc<dyn NamePolicy>) -> ScaffoldService {
    ScaffoldService::new(Box::new(SimpleRenderer::new()), Box::new(LocalFilesystem::new()))
        .with_name_policy(policy)
}
