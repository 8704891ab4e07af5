//! Mobile-web home screen.

use std::time::Duration;

use crate::browser::{Page, DEFAULT_TIMEOUT_MS};
use crate::config::Config;
use crate::page_object::{Screen, ScreenBase};
use crate::result::E2eResult;

const HEALTH_TAB: &str = "Health";
const PROFILE_TAB: &str = "Profile";

/// The home screen: entry point after login, with the bottom tab bar.
#[derive(Debug, Clone)]
pub struct HomeScreen {
    base: ScreenBase,
}

impl HomeScreen {
    /// Wrap a live page handle. Performs no I/O.
    #[must_use]
    pub fn new(page: Page, config: &Config) -> Self {
        Self {
            base: ScreenBase::new(page, config.home_url.clone()),
        }
    }

    /// Navigate to the home screen URL.
    ///
    /// # Errors
    ///
    /// Propagates navigation failures unchanged.
    pub async fn open(&self) -> E2eResult<()> {
        self.base.open().await
    }

    /// Wait until the browser URL matches the home screen URL.
    ///
    /// # Errors
    ///
    /// Propagates a timeout if the screen never appears.
    pub async fn wait_for_confirmation(&mut self) -> E2eResult<()> {
        self.base
            .confirm_by_url(Duration::from_millis(DEFAULT_TIMEOUT_MS))
            .await
    }

    /// Click the "Health" tab.
    ///
    /// # Errors
    ///
    /// Propagates engine failures (element not found, timeout) unchanged.
    pub async fn click_health_tab(&self) -> E2eResult<()> {
        self.by_text(HEALTH_TAB).click().await
    }

    /// Click the "Profile" tab.
    ///
    /// # Errors
    ///
    /// Propagates engine failures unchanged.
    pub async fn click_profile_tab(&self) -> E2eResult<()> {
        self.by_text(PROFILE_TAB).click().await
    }
}

impl Screen for HomeScreen {
    fn url(&self) -> &str {
        self.base.url()
    }

    fn page(&self) -> &Page {
        self.base.page()
    }

    fn name(&self) -> &'static str {
        "home"
    }

    fn is_confirmed(&self) -> bool {
        self.base.is_confirmed()
    }
}
