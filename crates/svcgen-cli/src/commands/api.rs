//! Implementation of `generate api <NAME>`.

use std::path::Path;

use tracing::instrument;

use svcgen_core::application::AbortReason;

use crate::{
    cli::ApiArgs,
    config::AppConfig,
    dispatch::CommandOutcome,
    error::CliResult,
    output::{OutputManager, Progress},
};

/// Scaffold `./<NAME>`, or report the conflict if it already exists.
#[instrument(skip_all, fields(api = %args.name))]
pub fn execute(args: ApiArgs, config: &AppConfig, output: &OutputManager) -> CliResult<CommandOutcome> {
    let service = super::scaffold_service(config.generation.name_policy.build());

    let mut progress = Progress::new(output);
    let report = service.generate_api(Path::new("."), &args.name, &mut progress);
    progress.finish()?;

    if let Some(AbortReason::InvalidName(e)) = report.abort_reason() {
        output.error(&e.to_string())?;
    }

    output.report("api", &report)?;
    Ok(CommandOutcome::Generated(report))
}
