//! Environment-resolved configuration for the suite.
//!
//! All values are resolved once at startup and passed by reference to the
//! page objects and hooks that need them. A missing required key fails at
//! first use with [`E2eError::Config`] rather than silently resolving to an
//! empty string.

use std::path::PathBuf;

use crate::result::{E2eError, E2eResult};

/// Default version tag when `VITA_APP_VERSION` is unset
pub const DEFAULT_APP_VERSION: &str = "local";

/// Default root directory for failure screenshots
pub const DEFAULT_RESULTS_DIR: &str = "test-results";

/// Immutable suite configuration: canonical page URLs, API path fragments
/// and screenshot layout.
#[derive(Debug, Clone)]
pub struct Config {
    /// Mobile-web home screen URL
    pub home_url: String,
    /// Profile screen URL
    pub profile_url: String,
    /// Symptoms screen URL
    pub symptoms_url: String,
    /// Health metrics screen URL
    pub health_metrics_url: String,
    /// Desktop website home URL
    pub website_url: String,
    /// Path fragment identifying the health-data API endpoint
    pub health_data_endpoint: String,
    /// Version tag used to namespace screenshot output
    pub app_version: String,
    /// Root directory for screenshot output
    pub results_dir: PathBuf,
}

impl Config {
    /// Resolve the configuration from the process environment.
    ///
    /// Required keys: `VITA_HOME_URL`, `VITA_PROFILE_URL`,
    /// `VITA_SYMPTOMS_URL`, `VITA_HEALTH_METRICS_URL`, `VITA_WEBSITE_URL`,
    /// `VITA_HEALTH_DATA_ENDPOINT`. Optional: `VITA_APP_VERSION`
    /// (default `"local"`), `VITA_RESULTS_DIR` (default `"test-results"`).
    ///
    /// # Errors
    ///
    /// Returns [`E2eError::Config`] naming the first missing required key.
    pub fn from_env() -> E2eResult<Self> {
        Ok(Self {
            home_url: required("VITA_HOME_URL")?,
            profile_url: required("VITA_PROFILE_URL")?,
            symptoms_url: required("VITA_SYMPTOMS_URL")?,
            health_metrics_url: required("VITA_HEALTH_METRICS_URL")?,
            website_url: required("VITA_WEBSITE_URL")?,
            health_data_endpoint: required("VITA_HEALTH_DATA_ENDPOINT")?,
            app_version: optional("VITA_APP_VERSION", DEFAULT_APP_VERSION),
            results_dir: PathBuf::from(optional("VITA_RESULTS_DIR", DEFAULT_RESULTS_DIR)),
        })
    }
}

fn required(key: &str) -> E2eResult<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| E2eError::Config {
            key: key.to_string(),
        })
}

fn optional(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
