//! Health data response model.

use serde::{Deserialize, Serialize};

/// Health data API response.
///
/// The payload under `data` is opaque to the suite; tests only check its
/// presence before trusting the rest of the screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthData {
    /// Opaque response payload; `Some` means the feature returned data
    pub data: Option<serde_json::Value>,
    /// Server message
    pub message: Option<String>,
    /// Response status label
    pub status: Option<String>,
}

impl HealthData {
    /// Whether the response carries a payload
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.data.is_some()
    }
}
