//! Output management and formatting.
//!
//! Human messages go to stdout, except in JSON mode where they move to
//! stderr so stdout carries only the JSON summary.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use svcgen_core::application::{EntityOutcome, GenerationObserver, GenerationReport};
use svcgen_core::domain::{EntityKind, ScaffoldPlan};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
    data: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = if args.output_format == OutputFormat::Auto {
            OutputFormat::from_config(&config.output.format)
        } else {
            args.output_format
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        let term = if resolved_format == OutputFormat::Json {
            Term::stderr()
        } else {
            Term::stdout()
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term,
            data: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`. Not suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Write `value` as one JSON line on stdout. Not affected by `--quiet`.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let line = serde_json::to_string(value).map_err(io::Error::other)?;
        self.data.write_line(&line)
    }

    /// Print the end-of-command summary in the resolved format.
    pub fn report(&self, command: &'static str, report: &GenerationReport) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.json(&ReportSummary::new(command, report));
        }
        if report.abort_reason().is_some() || report.outcomes().is_empty() {
            return Ok(());
        }
        self.print(&format!(
            "Done: {} created, {} skipped, {} failed.",
            report.created(),
            report.skipped(),
            report.failed()
        ))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── Progress ──────────────────────────────────────────────────────────────────

/// Prints one line per entity as the scaffold service reports progress.
///
/// Observer callbacks cannot fail, so the first write error is kept and
/// returned from [`Progress::finish`].
pub struct Progress<'a> {
    output: &'a OutputManager,
    error: Option<io::Error>,
}

impl<'a> Progress<'a> {
    pub fn new(output: &'a OutputManager) -> Self {
        Self {
            output,
            error: None,
        }
    }

    pub fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }

    fn keep(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }
}

impl GenerationObserver for Progress<'_> {
    fn on_start(&mut self, plan: &ScaffoldPlan) {
        let line = format!(
            "Creating {} '{}' in {}",
            plan.kind().label(),
            plan.name(),
            plan.root().display()
        );
        let result = self.output.header(&line);
        self.keep(result);
    }

    fn on_outcome(&mut self, outcome: &EntityOutcome) {
        let label = outcome.kind().label();
        let result = match outcome {
            EntityOutcome::Created { name, root, .. } => self.output.success(&format!(
                "The {label} '{name}' was created at {}",
                root.display()
            )),
            EntityOutcome::Skipped { name, root, .. } => self.output.warning(&format!(
                "The folder {} already exists; {label} '{name}' skipped",
                root.display()
            )),
            EntityOutcome::Failed { name, error, .. } => self
                .output
                .error(&format!("Failed to create {label} '{name}': {error}")),
        };
        self.keep(result);
    }
}

// ── JSON summary ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    command: &'static str,
    kind: EntityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    aborted: Option<&'static str>,
    created: usize,
    skipped: usize,
    failed: usize,
    entities: Vec<EntitySummary<'a>>,
}

#[derive(Debug, Serialize)]
struct EntitySummary<'a> {
    name: &'a str,
    path: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> ReportSummary<'a> {
    pub fn new(command: &'static str, report: &'a GenerationReport) -> Self {
        Self {
            command,
            kind: report.kind(),
            aborted: report.abort_reason().map(|r| r.as_str()),
            created: report.created(),
            skipped: report.skipped(),
            failed: report.failed(),
            entities: report
                .outcomes()
                .iter()
                .map(|o| EntitySummary {
                    name: o.name().as_str(),
                    path: o.root().display().to_string(),
                    status: o.status(),
                    error: o.error().map(ToString::to_string),
                })
                .collect(),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use svcgen_core::application::AbortReason;
    use svcgen_core::domain::EntityName;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
            strict: false,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(make_manager(false, false, OutputFormat::Human).supports_color());
        assert!(!make_manager(false, true, OutputFormat::Human).supports_color());
        assert!(!make_manager(false, false, OutputFormat::Plain).supports_color());
    }

    #[test]
    fn config_format_used_when_flag_is_auto() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
            strict: false,
        };
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        assert_eq!(OutputManager::new(&args, &config).format(), OutputFormat::Json);
    }

    #[test]
    fn summary_serialises_outcomes() {
        let mut report = GenerationReport::new(EntityKind::Service);
        report.push(EntityOutcome::Created {
            kind: EntityKind::Service,
            name: EntityName::new("Order").unwrap(),
            root: PathBuf::from("Services/Order"),
        });
        report.push(EntityOutcome::Skipped {
            kind: EntityKind::Service,
            name: EntityName::new("User").unwrap(),
            root: PathBuf::from("Services/User"),
        });

        let json = serde_json::to_value(ReportSummary::new("services", &report)).unwrap();
        assert_eq!(json["command"], "services");
        assert_eq!(json["kind"], "service");
        assert_eq!(json["created"], 1);
        assert_eq!(json["skipped"], 1);
        assert_eq!(json["entities"][1]["status"], "skipped");
        assert!(json.get("aborted").is_none());
        assert!(json["entities"][0].get("error").is_none());
    }

    #[test]
    fn summary_names_abort_reason() {
        let report = GenerationReport::aborted(EntityKind::Service, AbortReason::InputClosed);
        let json = serde_json::to_value(ReportSummary::new("services", &report)).unwrap();
        assert_eq!(json["aborted"], "input-closed");
        assert_eq!(json["entities"].as_array().map(Vec::len), Some(0));
    }
}
