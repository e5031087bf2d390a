//! Configuration for API access and export destinations

use crate::error::{HabiticaError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;
use uuid::Uuid;

/// Default Habitica API base URL
pub const DEFAULT_BASE_URL: &str = "https://habitica.com/api/v3";

/// Default bound on each HTTP request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Static client identifier sent for service-side attribution
pub const CLIENT_ID: &str = "habitica-export";

/// Configuration for Habitica API access
#[derive(Debug, Clone)]
pub struct HabiticaConfig {
    /// The user's Habitica ID, sent as the `x-api-user` header
    pub user_id: String,
    /// The user's API token, sent as the `x-api-key` header
    pub api_token: String,
    /// API base URL, overridable for testing
    pub base_url: String,
    /// Bound on each HTTP request; a slower response is a failure
    pub timeout: Duration,
}

impl HabiticaConfig {
    /// Create a new configuration with the given credentials
    #[must_use]
    pub fn new(user_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create configuration from environment variables
    ///
    /// Reads the required `HABITICA_USER_ID` and `HABITICA_API_TOKEN`
    /// variables, plus the optional `HABITICA_BASE_URL` and
    /// `HABITICA_HTTP_TIMEOUT_SECS` overrides.
    ///
    /// # Errors
    /// Returns `HabiticaError::Configuration` if either credential is
    /// missing or empty.
    pub fn from_env() -> Result<Self> {
        let user_id = require_env("HABITICA_USER_ID")?;
        let api_token = require_env("HABITICA_API_TOKEN")?;

        let mut config = Self::new(user_id, api_token);

        if let Ok(base_url) = std::env::var("HABITICA_BASE_URL") {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }

        if let Ok(secs) = std::env::var("HABITICA_HTTP_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(value = %secs, "invalid HABITICA_HTTP_TIMEOUT_SECS, using default"),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the configured credentials are usable
    ///
    /// # Errors
    /// Returns `HabiticaError::Configuration` if either credential is empty.
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(HabiticaError::configuration("user id must not be empty"));
        }
        if self.api_token.trim().is_empty() {
            return Err(HabiticaError::configuration("API token must not be empty"));
        }
        if Uuid::parse_str(&self.user_id).is_err() {
            warn!("user id is not a UUID; Habitica user ids normally are");
        }
        Ok(())
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| HabiticaError::configuration(format!("{name} must be set")))
}

/// Configuration for the CSV export destination and behavior
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory the CSV files are written into, created if absent
    pub output_dir: PathBuf,
    /// Whether rewards get their own export file
    pub include_rewards: bool,
    /// Whether a task type with zero records still gets a header-only file
    pub write_empty_files: bool,
}

impl ExportConfig {
    /// Create a new export configuration writing into the given directory
    #[must_use]
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            include_rewards: false,
            write_empty_files: true,
        }
    }

    /// Create export configuration from environment variables
    ///
    /// Reads the optional `HABITICA_EXPORT_DIR` variable, defaulting to `data`.
    #[must_use]
    pub fn from_env() -> Self {
        let output_dir = std::env::var("HABITICA_EXPORT_DIR")
            .ok()
            .filter(|value| !value.is_empty())
            .map_or_else(|| PathBuf::from("data"), PathBuf::from);
        Self::new(output_dir)
    }

    /// Enable or disable the rewards export
    #[must_use]
    pub const fn with_include_rewards(mut self, include_rewards: bool) -> Self {
        self.include_rewards = include_rewards;
        self
    }

    /// Enable or disable header-only files for empty task types
    #[must_use]
    pub const fn with_write_empty_files(mut self, write_empty_files: bool) -> Self {
        self.write_empty_files = write_empty_files;
        self
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new("data")
    }
}
