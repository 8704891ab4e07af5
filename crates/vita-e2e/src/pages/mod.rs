//! Concrete page objects, one per product screen.
//!
//! Each screen embeds a [`ScreenBase`](crate::page_object::ScreenBase) and
//! is constructed from a live page handle plus the suite
//! [`Config`](crate::config::Config). Construction never blocks; waits
//! happen only in the explicit `wait_for_confirmation` and action methods.
//! Action methods assume confirmation by convention and let engine errors
//! propagate unchanged when that convention is broken.

mod health_metrics;
mod home;
mod profile;
mod symptoms;
mod website_home;

pub use health_metrics::HealthMetricsScreen;
pub use home::HomeScreen;
pub use profile::ProfileScreen;
pub use symptoms::SymptomsScreen;
pub use website_home::WebsiteHome;

#[cfg(test)]
pub(crate) fn test_config() -> crate::config::Config {
    crate::config::Config {
        home_url: "https://app.vita.health/home".to_string(),
        profile_url: "https://app.vita.health/profile".to_string(),
        symptoms_url: "https://app.vita.health/symptoms".to_string(),
        health_metrics_url: "https://app.vita.health/health-metrics".to_string(),
        website_url: "https://vita.health".to_string(),
        health_data_endpoint: "/api/v1/health-data".to_string(),
        app_version: "local".to_string(),
        results_dir: std::path::PathBuf::from("test-results"),
    }
}
