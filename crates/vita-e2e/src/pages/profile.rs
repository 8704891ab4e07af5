//! Profile screen: activity level and menstrual status questionnaires.

use crate::browser::Page;
use crate::config::Config;
use crate::model::{ActivityLevel, MenstrualStatus};
use crate::page_object::{Screen, ScreenBase};
use crate::result::E2eResult;

const ACTIVITY_SECTION: &str = "Activity level";

/// The profile screen.
#[derive(Debug, Clone)]
pub struct ProfileScreen {
    base: ScreenBase,
}

impl ProfileScreen {
    /// Wrap a live page handle. Performs no I/O.
    #[must_use]
    pub fn new(page: Page, config: &Config) -> Self {
        Self {
            base: ScreenBase::new(page, config.profile_url.clone()),
        }
    }

    /// Navigate to the profile screen URL.
    ///
    /// # Errors
    ///
    /// Propagates navigation failures unchanged.
    pub async fn open(&self) -> E2eResult<()> {
        self.base.open().await
    }

    /// Wait until the "Activity level" section is visible.
    ///
    /// # Errors
    ///
    /// Propagates a timeout if the section never appears.
    pub async fn wait_for_confirmation(&mut self) -> E2eResult<()> {
        let locator = self.by_text(ACTIVITY_SECTION);
        self.base.confirm_by_locator(&locator).await
    }

    /// Select an activity level by clicking its option label.
    ///
    /// # Errors
    ///
    /// Propagates engine failures unchanged.
    pub async fn select_activity_level(&self, level: ActivityLevel) -> E2eResult<()> {
        self.by_text(level.label()).click().await
    }

    /// Select a menstrual status by clicking its option label.
    ///
    /// # Errors
    ///
    /// Propagates engine failures unchanged.
    pub async fn select_menstrual_status(&self, status: MenstrualStatus) -> E2eResult<()> {
        self.by_text(status.label()).click().await
    }
}

impl Screen for ProfileScreen {
    fn url(&self) -> &str {
        self.base.url()
    }

    fn page(&self) -> &Page {
        self.base.page()
    }

    fn name(&self) -> &'static str {
        "profile"
    }

    fn is_confirmed(&self) -> bool {
        self.base.is_confirmed()
    }
}
