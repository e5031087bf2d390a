//! Error types for the Habitica export library

use thiserror::Error;

/// Result type alias for Habitica export operations
pub type Result<T> = std::result::Result<T, HabiticaError>;

/// Main error type for Habitica export operations
#[derive(Error, Debug)]
pub enum HabiticaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("API error: {message}")]
    Api { message: String },
}

impl HabiticaError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an API error
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_serialization_error_from_serde() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error: HabiticaError = json_error.into();

        match error {
            HabiticaError::Serialization(_) => (),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_io_error_from_std() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: HabiticaError = io_error.into();

        match error {
            HabiticaError::Io(_) => (),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_configuration_helper() {
        let error = HabiticaError::configuration("Missing required credential");

        match error {
            HabiticaError::Configuration { message } => {
                assert_eq!(message, "Missing required credential");
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_api_helper() {
        let error = HabiticaError::api("request was not successful");

        match error {
            HabiticaError::Api { message } => {
                assert_eq!(message, "request was not successful");
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_error_display_formatting() {
        let errors = vec![
            HabiticaError::configuration("config error"),
            HabiticaError::api("api error"),
        ];

        for error in errors {
            let error_string = error.to_string();
            assert!(!error_string.is_empty());
            assert!(error_string.contains("error"));
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_error() -> Result<String> {
            Err(HabiticaError::configuration("test error"))
        }

        match returns_error() {
            Err(HabiticaError::Configuration { message }) => {
                assert_eq!(message, "test error");
            }
            _ => panic!("Expected Configuration error"),
        }
    }
}
