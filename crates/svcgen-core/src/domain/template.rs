//! Template kinds and the render context.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TemplateKind (Value Object)                                │
//! │  └── which generated file, and where it lives in the tree   │
//! │                                                             │
//! │  RenderContext (Value Object)                               │
//! │  └── Variable substitution: {{ENTITY_NAME}} -> "Order"      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The template *sources* live in `svcgen-adapters`; the core only knows the
//! placeholder contract and the layout of each generated file.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Placeholder replaced by the raw entity name.
pub const ENTITY_NAME: &str = "ENTITY_NAME";

/// Every kind of file the generator can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Five empty CRUD handlers bound to a model.
    ServiceController,
    /// Schema with an empty field set and the exported model.
    ServiceModel,
    /// Router wiring the five CRUD verbs to the controller.
    ServiceRoutes,
    /// Single greeting handler.
    ApiController,
    /// Router wiring `GET /hello`.
    ApiRoutes,
    /// Fixed database connection string.
    DatabaseConfig,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 6] = [
        Self::ServiceController,
        Self::ServiceModel,
        Self::ServiceRoutes,
        Self::ApiController,
        Self::ApiRoutes,
        Self::DatabaseConfig,
    ];

    /// Path of the rendered file relative to the entity root.
    ///
    /// Built by string concatenation rather than `Path::join` so that a name
    /// starting with a separator cannot turn the path absolute.
    pub fn relative_path(self, name: &str) -> PathBuf {
        let path = match self {
            Self::ServiceController | Self::ApiController => {
                format!("controllers/{name}Controller.js")
            }
            Self::ServiceModel => format!("models/{name}.js"),
            Self::ServiceRoutes | Self::ApiRoutes => format!("routes/{name}.js"),
            Self::DatabaseConfig => "config/database.js".to_string(),
        };
        PathBuf::from(path)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ServiceController => "service-controller",
            Self::ServiceModel => "service-model",
            Self::ServiceRoutes => "service-routes",
            Self::ApiController => "api-controller",
            Self::ApiRoutes => "api-routes",
            Self::DatabaseConfig => "database-config",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context for template rendering.
///
/// A **Value Object** holding the variables of one render. Immutable after
/// creation.
///
/// ## Built-in Variables
///
/// | Variable      | Example | Source     |
/// |---------------|---------|------------|
/// | `ENTITY_NAME` | "Order" | User input |
#[derive(Debug, Clone)]
pub struct RenderContext {
    entity_name: String,
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(entity_name: impl Into<String>) -> Self {
        let name = entity_name.into();
        let mut vars = HashMap::new();
        vars.insert(ENTITY_NAME.to_string(), name.clone());

        Self {
            entity_name: name,
            variables: vars,
        }
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Values are inserted verbatim. Unknown placeholders stay as literal
    /// text. Replacement is a single pass per variable, so a value that itself
    /// contains `{{ENTITY_NAME}}` is not expanded again.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}
