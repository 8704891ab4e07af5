//! Symptoms screen: symptom selection and save.

use crate::browser::Page;
use crate::config::Config;
use crate::page_object::{Screen, ScreenBase};
use crate::result::E2eResult;

const HEADING_ROLE: &str = "heading";
const HEADING_NAME: &str = "Symptoms";
const SAVE_LABEL: &str = "Save";

/// The symptoms screen.
#[derive(Debug, Clone)]
pub struct SymptomsScreen {
    base: ScreenBase,
}

impl SymptomsScreen {
    /// Wrap a live page handle. Performs no I/O.
    #[must_use]
    pub fn new(page: Page, config: &Config) -> Self {
        Self {
            base: ScreenBase::new(page, config.symptoms_url.clone()),
        }
    }

    /// Navigate to the symptoms screen URL.
    ///
    /// # Errors
    ///
    /// Propagates navigation failures unchanged.
    pub async fn open(&self) -> E2eResult<()> {
        self.base.open().await
    }

    /// Wait until the "Symptoms" heading is visible.
    ///
    /// # Errors
    ///
    /// Propagates a timeout if the heading never appears.
    pub async fn wait_for_confirmation(&mut self) -> E2eResult<()> {
        let locator = self.by_role(HEADING_ROLE, HEADING_NAME);
        self.base.confirm_by_locator(&locator).await
    }

    /// Toggle a symptom by its visible name.
    ///
    /// # Errors
    ///
    /// Propagates engine failures unchanged.
    pub async fn click_symptom(&self, name: &str) -> E2eResult<()> {
        self.by_text(name).click().await
    }

    /// Click the save button.
    ///
    /// # Errors
    ///
    /// Propagates engine failures unchanged.
    pub async fn save(&self) -> E2eResult<()> {
        self.by_text(SAVE_LABEL).click().await
    }
}

impl Screen for SymptomsScreen {
    fn url(&self) -> &str {
        self.base.url()
    }

    fn page(&self) -> &Page {
        self.base.page()
    }

    fn name(&self) -> &'static str {
        "symptoms"
    }

    fn is_confirmed(&self) -> bool {
        self.base.is_confirmed()
    }
}

#[cfg(all(test, not(feature = "browser")))]
mod tests {
    use super::*;
    use crate::browser::PageConfig;
    use crate::locator::Selector;
    use crate::pages::test_config as config;

    #[tokio::test]
    async fn test_confirmation_via_heading_role() {
        let page = Page::new(PageConfig::default());
        page.script_visible(&Selector::role("heading", "Symptoms"));
        let mut symptoms = SymptomsScreen::new(page, &config());
        symptoms.wait_for_confirmation().await.unwrap();
        assert!(symptoms.is_confirmed());
    }

    #[tokio::test]
    async fn test_select_and_save() {
        let page = Page::new(PageConfig::default());
        page.script_visible(&Selector::text("Headache"));
        page.script_visible(&Selector::text("Save"));
        let symptoms = SymptomsScreen::new(page.clone(), &config());

        symptoms.click_symptom("Headache").await.unwrap();
        symptoms.save().await.unwrap();
        assert_eq!(page.clicks(), vec!["text=Headache", "text=Save"]);
    }
}
