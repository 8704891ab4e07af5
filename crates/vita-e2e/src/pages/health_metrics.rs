//! Health metrics screen, including health-data API response correlation.

use std::time::Duration;

use tracing::warn;

use crate::browser::{Page, DEFAULT_TIMEOUT_MS};
use crate::config::Config;
use crate::model::HealthData;
use crate::page_object::{Screen, ScreenBase};
use crate::result::E2eResult;

/// The health metrics screen.
///
/// Besides the usual confirmation wait, this screen correlates the
/// navigation that renders it with the backing health-data API call and
/// retains the last successfully populated response.
#[derive(Debug, Clone)]
pub struct HealthMetricsScreen {
    base: ScreenBase,
    endpoint: String,
    health_data: Option<HealthData>,
}

impl HealthMetricsScreen {
    /// Wrap a live page handle. Performs no I/O.
    #[must_use]
    pub fn new(page: Page, config: &Config) -> Self {
        Self {
            base: ScreenBase::new(page, config.health_metrics_url.clone()),
            endpoint: config.health_data_endpoint.clone(),
            health_data: None,
        }
    }

    /// Navigate to the health metrics screen URL.
    ///
    /// # Errors
    ///
    /// Propagates navigation failures unchanged.
    pub async fn open(&self) -> E2eResult<()> {
        self.base.open().await
    }

    /// Wait until the browser URL matches the health metrics screen URL.
    ///
    /// # Errors
    ///
    /// Propagates a timeout if the screen never appears.
    pub async fn wait_for_confirmation(&mut self) -> E2eResult<()> {
        self.base
            .confirm_by_url(Duration::from_millis(DEFAULT_TIMEOUT_MS))
            .await
    }

    /// Navigate to the screen and capture the health-data API response
    /// produced by that navigation.
    ///
    /// The navigation trigger and the response wait are issued as one
    /// rendezvous, so the engine's listener is in place before the request
    /// fires. The response must carry the configured endpoint fragment in
    /// its URL and a 200 status.
    ///
    /// Decode behavior: an empty body is logged and still run through the
    /// decoder; a decode failure is logged and yields `Ok(None)` without
    /// failing the test; a decoded model is cached and returned only when
    /// its `data` field is present, otherwise `Ok(None)` is returned and
    /// any previously cached value stays untouched.
    ///
    /// # Errors
    ///
    /// Propagates navigation failures and the engine's timeout when no
    /// matching response is observed. Decode failures do not error.
    pub async fn get_health_data_response(&mut self) -> E2eResult<Option<HealthData>> {
        let page = self.base.page().clone();
        let url = self.base.url().to_string();
        let endpoint = self.endpoint.clone();

        let response = self
            .base
            .page()
            .expect_response(
                move |r| r.url.contains(&endpoint) && r.is_success(),
                async move { page.goto(&url).await },
            )
            .await?;

        if response.body.trim().is_empty() {
            warn!(url = %response.url, "health data response body is empty");
        }

        match serde_json::from_str::<HealthData>(&response.body) {
            Ok(model) if model.has_data() => {
                self.health_data = Some(model.clone());
                Ok(Some(model))
            }
            Ok(_) => Ok(None),
            Err(error) => {
                warn!(%error, url = %response.url, "failed to decode health data response");
                Ok(None)
            }
        }
    }

    /// Last successfully populated health-data response, if any.
    #[must_use]
    pub const fn health_data(&self) -> Option<&HealthData> {
        self.health_data.as_ref()
    }
}

impl Screen for HealthMetricsScreen {
    fn url(&self) -> &str {
        self.base.url()
    }

    fn page(&self) -> &Page {
        self.base.page()
    }

    fn name(&self) -> &'static str {
        "health-metrics"
    }

    fn is_confirmed(&self) -> bool {
        self.base.is_confirmed()
    }
}

#[cfg(all(test, not(feature = "browser")))]
mod tests {
    use super::*;
    use crate::browser::{ApiResponse, PageConfig};
    use crate::pages::test_config as config;

    fn screen_with_response(body: &str) -> HealthMetricsScreen {
        let page = Page::new(PageConfig::default());
        page.script_response(ApiResponse::new(
            "https://api.vita.health/api/v1/health-data?days=7",
            200,
            body,
        ));
        HealthMetricsScreen::new(page, &config())
    }

    #[tokio::test]
    async fn test_populated_response_is_returned_and_cached() {
        let mut screen = screen_with_response(r#"{"data": {"steps": 8000}, "status": "ok"}"#);
        let returned = screen.get_health_data_response().await.unwrap().unwrap();
        assert!(returned.has_data());
        assert_eq!(screen.health_data(), Some(&returned));
    }

    #[tokio::test]
    async fn test_null_data_returns_none_without_caching() {
        let mut screen = screen_with_response(r#"{"data": null, "status": "ok"}"#);
        assert_eq!(screen.get_health_data_response().await.unwrap(), None);
        assert_eq!(screen.health_data(), None);
    }

    #[tokio::test]
    async fn test_previous_cache_survives_empty_follow_up() {
        let mut screen = screen_with_response(r#"{"data": {"steps": 8000}}"#);
        let first = screen.get_health_data_response().await.unwrap().unwrap();

        screen
            .base
            .page()
            .script_response(ApiResponse::new("/api/v1/health-data", 200, ""));
        assert_eq!(screen.get_health_data_response().await.unwrap(), None);
        assert_eq!(screen.health_data(), Some(&first));
    }

    #[tokio::test]
    async fn test_empty_body_decode_failure_yields_none() {
        let mut screen = screen_with_response("");
        assert_eq!(screen.get_health_data_response().await.unwrap(), None);
        assert_eq!(screen.health_data(), None);
    }

    #[tokio::test]
    async fn test_malformed_body_yields_none() {
        let mut screen = screen_with_response("<html>gateway error</html>");
        assert_eq!(screen.get_health_data_response().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_non_matching_response_times_out() {
        let page = Page::new(PageConfig::default());
        page.script_response(ApiResponse::new("/api/v1/health-data", 500, "{}"));
        let mut screen = HealthMetricsScreen::new(page, &config());
        let err = screen.get_health_data_response().await.unwrap_err();
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_trigger_navigates_to_canonical_url() {
        let mut screen = screen_with_response(r#"{"data": {}}"#);
        screen.get_health_data_response().await.unwrap();
        assert_eq!(
            screen.page().current_url().await.unwrap(),
            "https://app.vita.health/health-metrics"
        );
    }
}
