//! CSV export of task and profile data

use crate::config::ExportConfig;
use crate::error::Result;
use crate::flatten::{flatten_nested, hoist_challenge, render_cell};
use crate::models::{task_type_of, TaskType};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Common columns shared by every task type
const COMMON_HEADERS: &[&str] = &["id", "text", "notes", "priority", "createdAt", "updatedAt"];

/// Challenge columns surfaced by the hoist
const CHALLENGE_HEADERS: &[&str] = &["challenge_id", "challenge_shortName"];

/// Output file for the flattened profile stats
pub const STATS_FILE_NAME: &str = "user_stats.csv";

/// Output file for the flattened profile achievements
pub const ACHIEVEMENTS_FILE_NAME: &str = "user_achievements.csv";

/// The fixed column header set for a task type
///
/// Headers are determined by the type alone, never inferred from the
/// records being exported.
#[must_use]
pub fn task_headers(task_type: TaskType) -> Vec<&'static str> {
    let specific: &[&str] = match task_type {
        TaskType::Habit => &["up", "down", "counterUp", "counterDown"],
        TaskType::Daily => &["streak", "completed"],
        TaskType::Todo => &["completed", "date"],
        TaskType::Reward => &[],
    };
    COMMON_HEADERS
        .iter()
        .chain(specific)
        .chain(CHALLENGE_HEADERS)
        .copied()
        .collect()
}

/// Row counts per task-type export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskExportSummary {
    pub habits: usize,
    pub dailies: usize,
    pub todos: usize,
    /// `None` when the rewards export is disabled
    pub rewards: Option<usize>,
}

impl TaskExportSummary {
    /// Total rows written across all task exports
    #[must_use]
    pub fn total(&self) -> usize {
        self.habits + self.dailies + self.todos + self.rewards.unwrap_or(0)
    }
}

/// Row counts for the two profile exports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileExportSummary {
    pub stats_rows: usize,
    pub achievement_rows: usize,
}

impl ProfileExportSummary {
    /// Total rows written across both profile exports
    #[must_use]
    pub fn total(&self) -> usize {
        self.stats_rows + self.achievement_rows
    }
}

/// CSV exporter for task and profile payloads
pub struct DataExporter {
    config: ExportConfig,
}

impl DataExporter {
    #[must_use]
    pub const fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn new_default() -> Self {
        Self::new(ExportConfig::default())
    }

    /// Export the records of one task type to a CSV file
    ///
    /// Filters `tasks` to the records whose `type` tag equals
    /// `task_type`, preserving input order, and writes the fixed header
    /// plus one row per match. A record's nested `challenge` object is
    /// hoisted before the row is rendered. Fields outside the fixed
    /// header are dropped; missing fields become empty cells. When no
    /// record matches, a header-only file is written (or nothing at all
    /// when `write_empty_files` is off).
    ///
    /// Returns the number of data rows written.
    ///
    /// # Errors
    /// Returns an error if the destination file cannot be written.
    pub fn export_tasks_by_type(
        &self,
        tasks: &[Value],
        task_type: TaskType,
        destination: &Path,
    ) -> Result<usize> {
        let headers = task_headers(task_type);
        let matching: Vec<_> = tasks
            .iter()
            .filter(|record| task_type_of(record) == Some(task_type))
            .filter_map(Value::as_object)
            .collect();

        if matching.is_empty() && !self.config.write_empty_files {
            info!(task_type = %task_type, "no tasks of this type, skipping file");
            return Ok(0);
        }

        let mut writer = csv::Writer::from_path(destination)?;
        writer.write_record(&headers)?;
        for record in &matching {
            let record = hoist_challenge((*record).clone());
            let row: Vec<String> = headers
                .iter()
                .map(|header| render_cell(record.get(*header)))
                .collect();
            writer.write_record(&row)?;
        }
        writer.flush()?;

        info!(
            task_type = %task_type,
            rows = matching.len(),
            path = %destination.display(),
            "exported tasks"
        );
        Ok(matching.len())
    }

    /// Export every task type into the configured output directory
    ///
    /// Writes `habits.csv`, `dailies.csv` and `todos.csv`, plus
    /// `rewards.csv` when the rewards export is enabled. The output
    /// directory is created if absent.
    ///
    /// # Errors
    /// Returns an error if the directory or any file cannot be written.
    pub fn export_all_tasks(&self, tasks: &[Value]) -> Result<TaskExportSummary> {
        fs::create_dir_all(&self.config.output_dir)?;

        let habits = self.export_type_to_dir(tasks, TaskType::Habit)?;
        let dailies = self.export_type_to_dir(tasks, TaskType::Daily)?;
        let todos = self.export_type_to_dir(tasks, TaskType::Todo)?;
        let rewards = if self.config.include_rewards {
            Some(self.export_type_to_dir(tasks, TaskType::Reward)?)
        } else {
            None
        };
        Ok(TaskExportSummary {
            habits,
            dailies,
            todos,
            rewards,
        })
    }

    fn export_type_to_dir(&self, tasks: &[Value], task_type: TaskType) -> Result<usize> {
        let destination = self.config.output_dir.join(task_type.default_file_name());
        self.export_tasks_by_type(tasks, task_type, &destination)
    }

    /// Export the flattened `stats` section of the profile payload
    ///
    /// `profile` is the decoded `data` object of the user endpoint.
    /// Returns the number of data rows written (0 or 1).
    ///
    /// # Errors
    /// Returns an error if the destination file cannot be written.
    pub fn export_user_stats(&self, profile: &Value, destination: &Path) -> Result<usize> {
        self.export_profile_section(profile, "stats", destination)
    }

    /// Export the flattened `achievements` section of the profile payload
    ///
    /// # Errors
    /// Returns an error if the destination file cannot be written.
    pub fn export_user_achievements(&self, profile: &Value, destination: &Path) -> Result<usize> {
        self.export_profile_section(profile, "achievements", destination)
    }

    /// Export both profile sections into the configured output directory
    ///
    /// # Errors
    /// Returns an error if the directory or any file cannot be written.
    pub fn export_profile(&self, profile: &Value) -> Result<ProfileExportSummary> {
        fs::create_dir_all(&self.config.output_dir)?;
        Ok(ProfileExportSummary {
            stats_rows: self
                .export_user_stats(profile, &self.config.output_dir.join(STATS_FILE_NAME))?,
            achievement_rows: self.export_user_achievements(
                profile,
                &self.config.output_dir.join(ACHIEVEMENTS_FILE_NAME),
            )?,
        })
    }

    fn export_profile_section(
        &self,
        profile: &Value,
        section: &str,
        destination: &Path,
    ) -> Result<usize> {
        let Some(map) = profile.get(section).and_then(Value::as_object) else {
            info!(section, "profile section absent, skipping");
            return Ok(0);
        };
        let flat = flatten_nested(map);
        if flat.is_empty() {
            info!(section, "profile section empty, skipping");
            return Ok(0);
        }

        // one record, so the header is the flattened key set itself
        let mut writer = csv::Writer::from_path(destination)?;
        writer.write_record(flat.keys())?;
        let row: Vec<String> = flat.values().map(|value| render_cell(Some(value))).collect();
        writer.write_record(&row)?;
        writer.flush()?;

        info!(
            section,
            columns = flat.len(),
            path = %destination.display(),
            "exported profile section"
        );
        Ok(1)
    }
}
