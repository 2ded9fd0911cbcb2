//! Scaffold Service - planner and materializer.
//!
//! This service coordinates the generation workflow for each entity:
//! 1. Check whether `<base>/<name>` already exists (skip if so)
//! 2. Render every file of the entity kind into a [`ScaffoldPlan`]
//! 3. Write the plan to the filesystem, isolating failures per entity
//!
//! Entities are processed strictly one after another, so the existence check
//! of a later entity sees everything created earlier in the same batch.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, GenerationObserver, TemplateRenderer},
        report::{AbortReason, EntityOutcome, GenerationReport},
    },
    domain::{
        DomainValidator as validator, EntityKind, EntityName, FsEntry, NamePolicy, RenderContext,
        ScaffoldPlan, Verbatim,
    },
    error::SvcgenResult,
};

/// Planner decision for one entity.
#[derive(Debug, Clone)]
pub enum PlanDecision {
    /// The root is free; this is what would be written.
    Create(ScaffoldPlan),
    /// The root already exists.
    Skip { root: PathBuf },
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    policy: Arc<dyn NamePolicy>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// Names are accepted verbatim; see [`Self::with_name_policy`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use svcgen_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
            policy: Arc::new(Verbatim),
        }
    }

    /// Replace the policy used to validate API names.
    pub fn with_name_policy(mut self, policy: Arc<dyn NamePolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Create the container directory for services.
    ///
    /// Returns `true` if it had to be created, `false` if it already existed.
    #[instrument(skip_all, fields(base = %base.display()))]
    pub fn ensure_base_dir(&self, base: &Path) -> SvcgenResult<bool> {
        if self.filesystem.exists(base) {
            debug!("Base directory already present");
            return Ok(false);
        }
        self.filesystem.create_dir_all(base)?;
        info!("Base directory created");
        Ok(true)
    }

    /// Decide what to do for one entity. Never touches the filesystem
    /// beyond an existence check.
    pub fn plan(&self, kind: EntityKind, base: &Path, name: &EntityName) -> PlanDecision {
        let root = name.root_under(base);

        if self.filesystem.exists(&root) {
            return PlanDecision::Skip { root };
        }

        let context = RenderContext::new(name.as_str());
        let mut plan = ScaffoldPlan::new(kind, name.clone(), root);
        for dir in kind.directories() {
            plan.add_directory(*dir);
        }
        for template in kind.templates() {
            plan.add_file(
                template.relative_path(name.as_str()),
                self.renderer.render(*template, &context),
            );
        }

        PlanDecision::Create(plan)
    }

    /// Write every entry of `plan`, stopping at the first failure.
    ///
    /// Directory creation is idempotent and files are overwritten. Files are
    /// written only into directories the plan lists. Nothing is rolled back
    /// on failure.
    #[instrument(skip_all, fields(entity = %plan.name(), root = %plan.root().display()))]
    pub fn materialize(&self, plan: &ScaffoldPlan) -> SvcgenResult<()> {
        validator::validate_plan(plan)?;

        for entry in plan.entries() {
            let path = plan.root().join(entry.path());
            match entry {
                FsEntry::Directory(_) => self.filesystem.create_dir_all(&path)?,
                FsEntry::File(file) => self.filesystem.write_file(&path, &file.content)?,
            }
        }

        debug!(entries = plan.entry_count(), "Plan materialized");
        Ok(())
    }

    /// Plan and materialize one entity, folding any failure into the outcome.
    #[instrument(skip_all, fields(kind = %kind, entity = %name))]
    pub fn generate(
        &self,
        kind: EntityKind,
        base: &Path,
        name: &EntityName,
        observer: &mut dyn GenerationObserver,
    ) -> EntityOutcome {
        let outcome = match self.plan(kind, base, name) {
            PlanDecision::Skip { root } => {
                info!(root = %root.display(), "Target exists, skipping");
                EntityOutcome::Skipped {
                    kind,
                    name: name.clone(),
                    root,
                }
            }
            PlanDecision::Create(plan) => {
                observer.on_start(&plan);
                match self.materialize(&plan) {
                    Ok(()) => {
                        info!(root = %plan.root().display(), "Scaffold created");
                        EntityOutcome::Created {
                            kind,
                            name: name.clone(),
                            root: plan.root,
                        }
                    }
                    Err(e) => {
                        error!(error = %e, root = %plan.root().display(), "Scaffold failed");
                        EntityOutcome::Failed {
                            kind,
                            name: name.clone(),
                            root: plan.root,
                            error: e,
                        }
                    }
                }
            }
        };

        observer.on_outcome(&outcome);
        outcome
    }

    /// Generate every service in `names`, in order.
    pub fn generate_services(&self, base: &Path, names: &[EntityName]) -> GenerationReport {
        self.generate_services_observed(base, names, &mut ())
    }

    /// Like [`Self::generate_services`], reporting progress to `observer`.
    #[instrument(skip_all, fields(base = %base.display(), count = names.len()))]
    pub fn generate_services_observed(
        &self,
        base: &Path,
        names: &[EntityName],
        observer: &mut dyn GenerationObserver,
    ) -> GenerationReport {
        let mut report = GenerationReport::new(EntityKind::Service);
        for name in names {
            report.push(self.generate(EntityKind::Service, base, name, observer));
        }

        info!(
            created = report.created(),
            skipped = report.skipped(),
            failed = report.failed(),
            "Service batch finished"
        );
        report
    }

    /// Generate a single API named `raw_name` under `base`.
    ///
    /// The name is checked against the configured policy first; a rejected
    /// name aborts the command without touching the filesystem.
    #[instrument(skip_all, fields(base = %base.display(), api = %raw_name))]
    pub fn generate_api(
        &self,
        base: &Path,
        raw_name: &str,
        observer: &mut dyn GenerationObserver,
    ) -> GenerationReport {
        let name = match validator::validate_name(raw_name, self.policy.as_ref()) {
            Ok(name) => name,
            Err(e) => {
                warn!(error = %e, policy = self.policy.id(), "API name rejected");
                return GenerationReport::aborted(EntityKind::Api, AbortReason::InvalidName(e));
            }
        };

        let mut report = GenerationReport::new(EntityKind::Api);
        report.push(self.generate(EntityKind::Api, base, &name, observer));
        report
    }
}
