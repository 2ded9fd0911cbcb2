//! Implementation of `generate services`.
//!
//! 1. Ensure the services directory exists
//! 2. Ask for a count and that many names on stdin
//! 3. Scaffold each name in order, one line of progress per entity
//! 4. Print the summary

use std::io::{self, Write};

use tracing::{info, instrument};

use svcgen_adapters::ReaderPrompter;
use svcgen_core::{
    application::{AbortReason, Collection, GenerationReport, PromptService},
    domain::EntityKind,
};

use crate::{
    cli::OutputFormat,
    config::AppConfig,
    dispatch::CommandOutcome,
    error::{CliError, CliResult},
    output::{OutputManager, Progress},
};

#[instrument(skip_all, fields(base = %config.generation.services_dir.display()))]
pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<CommandOutcome> {
    let base = &config.generation.services_dir;
    let policy = config.generation.name_policy.build();
    let service = super::scaffold_service(policy.clone());

    let created = service
        .ensure_base_dir(base)
        .map_err(|source| CliError::BaseDirectory {
            path: base.clone(),
            source,
        })?;
    if created {
        output.success(&format!("The folder {} was created.", base.display()))?;
    } else {
        output.info(&format!("The folder {} already exists.", base.display()))?;
    }

    // Prompts share stdout with progress lines, except in JSON mode.
    let writer: Box<dyn Write> = if output.format() == OutputFormat::Json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut prompter = ReaderPrompter::new(io::stdin().lock(), writer);
    let collection = PromptService::new(policy).collect(&mut prompter)?;

    let report = match collection {
        Collection::Names(names) => {
            let mut progress = Progress::new(output);
            let report = service.generate_services_observed(base, &names, &mut progress);
            progress.finish()?;
            report
        }
        Collection::Aborted(reason) => {
            describe_abort(&reason, output)?;
            GenerationReport::aborted(EntityKind::Service, reason)
        }
    };

    info!(
        created = report.created(),
        skipped = report.skipped(),
        failed = report.failed(),
        "services finished"
    );
    output.report("services", &report)?;
    Ok(CommandOutcome::Generated(report))
}

/// The prompter already showed validation messages; only say what happens
/// next.
fn describe_abort(reason: &AbortReason, output: &OutputManager) -> io::Result<()> {
    match reason {
        AbortReason::InvalidCount(_) | AbortReason::InvalidName(_) => {
            output.info("No services were generated.")
        }
        AbortReason::InputClosed => {
            output.warning("Input ended before every service was named; nothing was generated.")
        }
    }
}
