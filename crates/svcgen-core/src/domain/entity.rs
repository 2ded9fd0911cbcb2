//! Entity names, entity kinds and the name-validation hook.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::{error::DomainError, template::TemplateKind};

/// A user-supplied service or API name.
///
/// Invariant: never blank. The raw text is kept exactly as typed (no
/// trimming, no sanitization); it is substituted verbatim into both file
/// paths and file contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityName(String);

impl EntityName {
    /// Accept any name that is not blank.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        Self::checked(raw, &Verbatim)
    }

    /// Accept a name if `policy` allows it.
    pub fn checked(raw: impl Into<String>, policy: &dyn NamePolicy) -> Result<Self, DomainError> {
        let raw = raw.into();
        policy.check(&raw)?;
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Directory for this entity under `base`.
    ///
    /// Root and drive-prefix components of the name are dropped, so the
    /// result stays under `base` even for a name like `/x`.
    pub fn root_under(&self, base: &Path) -> PathBuf {
        let relative: PathBuf = Path::new(&self.0)
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
            .collect();
        base.join(relative)
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What is being scaffolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A CRUD service under the services directory.
    Service,
    /// A single-endpoint API in the working directory.
    Api,
}

impl EntityKind {
    /// Sub-directories created under the entity root, in creation order.
    pub const fn directories(self) -> &'static [&'static str] {
        match self {
            Self::Service => &["controllers", "models", "routes", "config"],
            Self::Api => &["controllers", "routes", "config"],
        }
    }

    /// Files rendered into the entity root, in write order.
    pub const fn templates(self) -> &'static [TemplateKind] {
        match self {
            Self::Service => &[
                TemplateKind::ServiceController,
                TemplateKind::ServiceModel,
                TemplateKind::ServiceRoutes,
            ],
            Self::Api => &[
                TemplateKind::ApiController,
                TemplateKind::ApiRoutes,
                TemplateKind::DatabaseConfig,
            ],
        }
    }

    /// Human label used in progress messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Api => "API",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Name policies
// ============================================================================

/// Validation hook applied to every entity name before it is accepted.
///
/// Names end up inside generated file paths and generated JavaScript source.
/// [`Verbatim`] reproduces the historical behaviour of accepting anything
/// that is not blank; [`PathSafe`] additionally rejects characters that would
/// escape the target directory or break the generated source. Custom
/// policies can be plugged into [`crate::application::ScaffoldService`] and
/// [`crate::application::PromptService`].
pub trait NamePolicy: Send + Sync {
    /// Short identifier for logs.
    fn id(&self) -> &'static str;

    /// Return `Ok(())` when `name` may be used as an entity name.
    fn check(&self, name: &str) -> Result<(), DomainError>;
}

/// Accept every non-blank name unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl NamePolicy for Verbatim {
    fn id(&self) -> &'static str {
        "verbatim"
    }

    fn check(&self, name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(())
    }
}

/// Reject names that are unsafe as a single path segment or as a
/// JavaScript identifier fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSafe;

impl PathSafe {
    const FORBIDDEN: &'static [char] = &['/', '\\', '\'', '"', '`', '$', '{', '}', ':', '*', '?', '<', '>', '|'];
}

impl NamePolicy for PathSafe {
    fn id(&self) -> &'static str {
        "path-safe"
    }

    fn check(&self, name: &str) -> Result<(), DomainError> {
        Verbatim.check(name)?;

        let invalid = |reason: &str| DomainError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name != name.trim() {
            return Err(invalid("leading or trailing whitespace"));
        }
        if name == "." || name == ".." {
            return Err(invalid("refers to a directory"));
        }
        if let Some(c) = name.chars().find(|c| Self::FORBIDDEN.contains(c)) {
            return Err(invalid(&format!("contains '{c}'")));
        }
        if name.chars().any(char::is_control) {
            return Err(invalid("contains control characters"));
        }
        Ok(())
    }
}
