//! Result and error types for the suite.

use thiserror::Error;

/// Result type for suite operations
pub type E2eResult<T> = Result<T, E2eError>;

/// Errors that can occur while driving the product under test
#[derive(Debug, Error)]
pub enum E2eError {
    /// A required configuration key is unresolved
    #[error("Missing required configuration key: {key}")]
    Config {
        /// Environment variable name
        key: String,
    },

    /// A wait condition was not satisfied in time
    #[error("Timed out after {ms}ms waiting for {what}")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
        /// The condition that never appeared
        what: String,
    },

    /// Navigation to a URL failed
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// Page-level engine error (element not found, page closed, evaluation failure)
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    Launch {
        /// Error message
        message: String,
    },

    /// Screenshot capture error
    #[error("Screenshot failed: {message}")]
    Screenshot {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl E2eError {
    /// Whether this error is a wait timeout
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_names_key() {
        let err = E2eError::Config {
            key: "VITA_HOME_URL".to_string(),
        };
        assert!(err.to_string().contains("VITA_HOME_URL"));
    }

    #[test]
    fn test_timeout_detection() {
        let err = E2eError::Timeout {
            ms: 5000,
            what: "url match".to_string(),
        };
        assert!(err.is_timeout());
        assert!(!E2eError::Page {
            message: "gone".to_string()
        }
        .is_timeout());
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: E2eError = json_err.into();
        assert!(matches!(err, E2eError::Json(_)));
    }
}
