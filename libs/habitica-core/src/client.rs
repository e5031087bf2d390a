//! HTTP client for the Habitica v3 API

use crate::config::{HabiticaConfig, CLIENT_ID};
use crate::error::Result;
use crate::models::ApiResponse;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, error};

/// Client for the two read-only Habitica endpoints used by the export
///
/// Each fetch issues exactly one GET request, bounded by the configured
/// timeout. Transport failures (network errors, timeouts, non-2xx
/// statuses, undecodable bodies) are caught here: the fetch logs the
/// underlying error and returns `None` instead of propagating a fault.
/// A payload that decodes but carries `success == false` is returned
/// as-is for the caller to handle separately.
pub struct HabiticaClient {
    http: reqwest::Client,
    base_url: String,
}

impl HabiticaClient {
    /// Build a client from the given configuration
    ///
    /// # Errors
    /// Returns an error if the credentials fail validation, contain
    /// characters not representable in an HTTP header, or if the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: &HabiticaConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert("x-api-user", header_value(&config.user_id)?);
        headers.insert("x-api-key", header_value(&config.api_token)?);
        headers.insert("x-client", HeaderValue::from_static(CLIENT_ID));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch all tasks for the user
    ///
    /// Returns `None` on any transport failure, after logging it.
    pub async fn fetch_tasks(&self) -> Option<ApiResponse> {
        match self.get_json("/tasks/user").await {
            Ok(response) => Some(response),
            Err(e) => {
                error!(error = %e, "failed to fetch tasks");
                None
            }
        }
    }

    /// Fetch the user profile, including stats and achievements
    ///
    /// Returns `None` on any transport failure, after logging it.
    pub async fn fetch_user_profile(&self) -> Option<ApiResponse> {
        match self.get_json("/user").await {
            Ok(response) => Some(response),
            Err(e) => {
                error!(error = %e, "failed to fetch user profile");
                None
            }
        }
    }

    async fn get_json(&self, path: &str) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "issuing GET request");
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json::<ApiResponse>().await?)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| {
        crate::error::HabiticaError::configuration("credential is not a valid header value")
    })
}
