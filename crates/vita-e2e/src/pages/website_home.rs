//! Desktop website home page.

use crate::browser::Page;
use crate::config::Config;
use crate::page_object::{Screen, ScreenBase};
use crate::result::E2eResult;

const GET_THE_APP: &str = "Get the app";

/// The public website landing page.
#[derive(Debug, Clone)]
pub struct WebsiteHome {
    base: ScreenBase,
}

impl WebsiteHome {
    /// Wrap a live page handle. Performs no I/O.
    #[must_use]
    pub fn new(page: Page, config: &Config) -> Self {
        Self {
            base: ScreenBase::new(page, config.website_url.clone()),
        }
    }

    /// Navigate to the website home URL.
    ///
    /// # Errors
    ///
    /// Propagates navigation failures unchanged.
    pub async fn open(&self) -> E2eResult<()> {
        self.base.open().await
    }

    /// Wait until the "Get the app" call to action is visible.
    ///
    /// # Errors
    ///
    /// Propagates a timeout if the banner never appears.
    pub async fn wait_for_confirmation(&mut self) -> E2eResult<()> {
        let locator = self.by_text(GET_THE_APP);
        self.base.confirm_by_locator(&locator).await
    }

    /// Click the "Get the app" call to action.
    ///
    /// # Errors
    ///
    /// Propagates engine failures unchanged.
    pub async fn click_get_the_app(&self) -> E2eResult<()> {
        self.by_text(GET_THE_APP).click().await
    }
}

impl Screen for WebsiteHome {
    fn url(&self) -> &str {
        self.base.url()
    }

    fn page(&self) -> &Page {
        self.base.page()
    }

    fn name(&self) -> &'static str {
        "website-home"
    }

    fn is_confirmed(&self) -> bool {
        self.base.is_confirmed()
    }
}
