//! Habitica Core - library for fetching and exporting Habitica data
//!
//! This library fetches the authenticated user's task list and profile
//! from the Habitica v3 API and writes them out as flat CSV files: one
//! file per task type plus flattened profile stats and achievements.
//!
//! # Quick Start
//!
//! ```no_run
//! use habitica_core::{DataExporter, ExportConfig, HabiticaClient, HabiticaConfig};
//!
//! # async fn example() -> habitica_core::Result<()> {
//! let config = HabiticaConfig::from_env()?;
//! let client = HabiticaClient::new(&config)?;
//! let exporter = DataExporter::new(ExportConfig::new("data"));
//!
//! if let Some(response) = client.fetch_tasks().await {
//!     if response.success {
//!         let summary = exporter.export_all_tasks(&response.task_list())?;
//!         println!("exported {} task rows", summary.total());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod flatten;
pub mod models;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::HabiticaClient;
pub use config::{ExportConfig, HabiticaConfig, CLIENT_ID, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{HabiticaError, Result};
pub use export::{
    task_headers, DataExporter, ProfileExportSummary, TaskExportSummary, ACHIEVEMENTS_FILE_NAME,
    STATS_FILE_NAME,
};
pub use flatten::{flatten_nested, hoist_challenge, render_cell};
pub use models::{task_type_of, ApiResponse, TaskType};
