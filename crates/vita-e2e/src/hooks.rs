//! Post-test lifecycle hooks.
//!
//! The screenshot hook runs after every test, regardless of outcome, and
//! acts only when the test failed and the page session is still live. Its
//! own failures are logged and swallowed so they never mask the original
//! test failure.

use std::path::PathBuf;

use tracing::warn;

use crate::browser::Page;
use crate::config::Config;
use crate::report::{Reporter, FAILURE_SCREENSHOT_LABEL, PNG_MEDIA_TYPE};
use crate::result::E2eResult;

/// Terminal outcome of one test case, as seen by lifecycle hooks.
#[derive(Debug, Clone)]
pub struct TestOutcome {
    /// Test display name
    pub name: String,
    /// Error message, if the test failed
    pub error: Option<String>,
}

impl TestOutcome {
    /// Outcome of a passing test
    #[must_use]
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            error: None,
        }
    }

    /// Outcome of a failing test
    #[must_use]
    pub fn failed(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            error: Some(error.into()),
        }
    }

    /// Whether the test failed
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Captures a screenshot after each failed test and attaches it to the
/// report.
///
/// Screenshots land under `<results_dir>/<app_version>/`, one file per
/// failed test, named after the display name with spaces replaced by
/// underscores.
#[derive(Debug, Clone)]
pub struct ScreenshotOnFailure {
    results_dir: PathBuf,
    app_version: String,
}

impl ScreenshotOnFailure {
    /// Build the hook from the suite configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            results_dir: config.results_dir.clone(),
            app_version: config.app_version.clone(),
        }
    }

    /// Directory screenshots are written to
    #[must_use]
    pub fn target_dir(&self) -> PathBuf {
        self.results_dir.join(&self.app_version)
    }

    /// Run the hook for a completed test.
    ///
    /// Does nothing when the test passed, when the supplier yields no page,
    /// or when the page reports itself closed. Otherwise captures a
    /// screenshot and attaches it; any failure along the way is logged and
    /// swallowed.
    pub async fn after_test<F>(&self, outcome: &TestOutcome, page: F, reporter: &mut Reporter)
    where
        F: FnOnce() -> Option<Page>,
    {
        if !outcome.is_failed() {
            return;
        }

        let Some(page) = page() else {
            return;
        };
        if page.is_closed().await {
            return;
        }

        if let Err(error) = self.capture(&outcome.name, &page, reporter).await {
            warn!(%error, test = %outcome.name, "screenshot hook failed");
        }
    }

    async fn capture(&self, test_name: &str, page: &Page, reporter: &mut Reporter) -> E2eResult<()> {
        let dir = self.target_dir();
        std::fs::create_dir_all(&dir)?;

        let path = dir.join(sanitized_file_name(test_name));
        let bytes = page.screenshot_to(&path).await?;
        reporter.attach(FAILURE_SCREENSHOT_LABEL, PNG_MEDIA_TYPE, bytes);
        Ok(())
    }
}

fn sanitized_file_name(test_name: &str) -> String {
    format!("{}.png", test_name.replace(' ', "_"))
}

#[cfg(all(test, not(feature = "browser")))]
mod tests {
    use super::*;
    use crate::browser::PageConfig;
    use std::path::Path;

    fn hook(dir: &Path) -> ScreenshotOnFailure {
        ScreenshotOnFailure {
            results_dir: dir.to_path_buf(),
            app_version: "local".to_string(),
        }
    }

    #[test]
    fn test_file_name_sanitizing() {
        assert_eq!(
            sanitized_file_name("health tab shows metrics"),
            "health_tab_shows_metrics.png"
        );
    }

    #[tokio::test]
    async fn test_passing_test_does_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let hook = hook(tmp.path());
        let mut reporter = Reporter::new();
        let page = Page::new(PageConfig::default());

        hook.after_test(
            &TestOutcome::passed("all good"),
            || Some(page.clone()),
            &mut reporter,
        )
        .await;

        assert!(reporter.attachments().is_empty());
        assert!(!hook.target_dir().exists());
    }

    #[tokio::test]
    async fn test_failure_writes_and_attaches() {
        let tmp = tempfile::tempdir().unwrap();
        let hook = hook(tmp.path());
        let mut reporter = Reporter::new();
        let page = Page::new(PageConfig::default());

        let outcome = TestOutcome::failed("health tab shows metrics", "element not found");
        hook.after_test(&outcome, || Some(page.clone()), &mut reporter)
            .await;

        let file = hook.target_dir().join("health_tab_shows_metrics.png");
        assert!(file.exists());
        let attachment = &reporter.attachments()[0];
        assert_eq!(attachment.label, FAILURE_SCREENSHOT_LABEL);
        assert_eq!(attachment.media_type, PNG_MEDIA_TYPE);
        assert_eq!(attachment.bytes, std::fs::read(&file).unwrap());
    }

    #[tokio::test]
    async fn test_directory_creation_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let hook = hook(tmp.path());
        let mut reporter = Reporter::new();
        let page = Page::new(PageConfig::default());

        let first = TestOutcome::failed("first failure", "boom");
        let second = TestOutcome::failed("second failure", "boom");
        hook.after_test(&first, || Some(page.clone()), &mut reporter)
            .await;
        hook.after_test(&second, || Some(page.clone()), &mut reporter)
            .await;

        assert!(hook.target_dir().join("first_failure.png").exists());
        assert!(hook.target_dir().join("second_failure.png").exists());
        assert_eq!(reporter.attachments().len(), 2);
    }

    #[tokio::test]
    async fn test_closed_page_is_left_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let hook = hook(tmp.path());
        let mut reporter = Reporter::new();
        let page = Page::new(PageConfig::default());
        page.close().await.unwrap();

        let outcome = TestOutcome::failed("late failure", "boom");
        hook.after_test(&outcome, || Some(page.clone()), &mut reporter)
            .await;

        assert!(reporter.attachments().is_empty());
        assert!(!hook.target_dir().exists());
    }

    #[tokio::test]
    async fn test_missing_page_is_left_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let hook = hook(tmp.path());
        let mut reporter = Reporter::new();

        hook.after_test(&TestOutcome::failed("no page", "boom"), || None, &mut reporter)
            .await;

        assert!(reporter.attachments().is_empty());
    }
}
