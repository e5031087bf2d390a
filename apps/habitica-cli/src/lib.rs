//! Habitica export CLI library
//!
//! Orchestrates the fetch-then-export pipeline: each data source (tasks,
//! profile) is fetched and exported independently, so a failure on one
//! never prevents the other.

pub mod logging;

use clap::{Parser, Subcommand};
use habitica_core::{DataExporter, HabiticaClient};
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "habitica-export")]
#[command(about = "Export Habitica tasks and profile data to CSV files")]
#[command(version)]
pub struct Cli {
    /// Output directory for CSV files (defaults to HABITICA_EXPORT_DIR or ./data)
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Also export rewards to rewards.csv
    #[arg(long)]
    pub include_rewards: bool,

    /// Do not write header-only files for task types with no records
    #[arg(long)]
    pub skip_empty: bool,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Export tasks and profile data
    Export,
    /// Export tasks only
    Tasks,
    /// Export profile stats and achievements only
    Profile,
}

/// Outcome of one data source in a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SourceOutcome {
    /// Not attempted in this run
    #[default]
    Skipped,
    /// Fetched and exported, with the number of rows written
    Exported { rows: usize },
    /// Fetch or export failed; the reason has already been logged
    Failed { reason: String },
}

/// Per-source outcomes of a full run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub tasks: SourceOutcome,
    pub profile: SourceOutcome,
}

impl RunSummary {
    /// True when at least one source was attempted and every attempt failed
    #[must_use]
    pub fn all_failed(&self) -> bool {
        let attempted = [&self.tasks, &self.profile]
            .into_iter()
            .filter(|outcome| **outcome != SourceOutcome::Skipped)
            .collect::<Vec<_>>();
        !attempted.is_empty()
            && attempted
                .iter()
                .all(|outcome| matches!(outcome, SourceOutcome::Failed { .. }))
    }
}

/// Fetch the task list and export it per type
///
/// Distinguishes a transport failure (no response) from an API-level
/// failure (response with `success == false`); both leave the other
/// data source untouched.
pub async fn run_tasks_export(client: &HabiticaClient, exporter: &DataExporter) -> SourceOutcome {
    let Some(response) = client.fetch_tasks().await else {
        return SourceOutcome::Failed {
            reason: "transport error fetching tasks".to_string(),
        };
    };
    if !response.success {
        warn!("task request was not successful, skipping task export");
        return SourceOutcome::Failed {
            reason: "task request was not successful".to_string(),
        };
    }

    match exporter.export_all_tasks(&response.task_list()) {
        Ok(summary) => SourceOutcome::Exported {
            rows: summary.total(),
        },
        Err(e) => SourceOutcome::Failed {
            reason: e.to_string(),
        },
    }
}

/// Fetch the user profile and export its stats and achievements
pub async fn run_profile_export(client: &HabiticaClient, exporter: &DataExporter) -> SourceOutcome {
    let Some(response) = client.fetch_user_profile().await else {
        return SourceOutcome::Failed {
            reason: "transport error fetching user profile".to_string(),
        };
    };
    if !response.success {
        warn!("profile request was not successful, skipping profile export");
        return SourceOutcome::Failed {
            reason: "profile request was not successful".to_string(),
        };
    }

    match exporter.export_profile(&response.data) {
        Ok(summary) => SourceOutcome::Exported {
            rows: summary.total(),
        },
        Err(e) => SourceOutcome::Failed {
            reason: e.to_string(),
        },
    }
}

/// Print the per-source run summary to the given writer
///
/// # Errors
/// Returns an error if writing fails
pub fn print_summary<W: Write>(summary: &RunSummary, writer: &mut W) -> std::io::Result<()> {
    write_outcome(writer, "Tasks", &summary.tasks)?;
    write_outcome(writer, "Profile", &summary.profile)?;
    Ok(())
}

fn write_outcome<W: Write>(writer: &mut W, name: &str, outcome: &SourceOutcome) -> std::io::Result<()> {
    match outcome {
        SourceOutcome::Skipped => writeln!(writer, "{name}: skipped"),
        SourceOutcome::Exported { rows } => writeln!(writer, "{name}: exported {rows} rows"),
        SourceOutcome::Failed { reason } => writeln!(writer, "{name}: failed ({reason})"),
    }
}
