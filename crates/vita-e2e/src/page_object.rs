//! Page-object base contract.
//!
//! Every screen wrapper satisfies the same capability: a canonical URL,
//! access to the live page handle, and locator factories. Concrete screens
//! embed a [`ScreenBase`] rather than inheriting from one another.
//!
//! Construction performs no I/O and no waiting; a screen starts
//! [`ConfirmationState::Unconfirmed`] and flips to `Confirmed` only when an
//! explicit confirmation wait observes the screen's readiness signal (URL
//! match or locator visibility). A signal that never appears surfaces as a
//! timeout error from the engine adapter, untouched.

use std::time::Duration;

use crate::browser::Page;
use crate::locator::Locator;
use crate::result::E2eResult;

/// Confirmation state of a screen wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmationState {
    /// Constructed, readiness signal not yet observed
    #[default]
    Unconfirmed,
    /// Readiness signal observed
    Confirmed,
}

impl ConfirmationState {
    /// Whether the screen has been confirmed
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

/// Capability every screen wrapper satisfies.
pub trait Screen {
    /// Canonical URL identifying the screen
    fn url(&self) -> &str;

    /// The live page handle this screen drives
    fn page(&self) -> &Page;

    /// Screen name for logging
    fn name(&self) -> &'static str;

    /// Whether the readiness signal has been observed
    fn is_confirmed(&self) -> bool;

    /// Locator for an element by visible text
    fn by_text(&self, text: impl Into<String>) -> Locator
    where
        Self: Sized,
    {
        self.page().get_by_text(text)
    }

    /// Locator for an element by accessible role and name
    fn by_role(&self, role: impl Into<String>, name: impl Into<String>) -> Locator
    where
        Self: Sized,
    {
        self.page().get_by_role(role, name)
    }
}

/// Shared state composed into every concrete screen: the borrowed page
/// handle, the canonical URL and the confirmation state machine.
#[derive(Debug, Clone)]
pub struct ScreenBase {
    page: Page,
    url: String,
    state: ConfirmationState,
}

impl ScreenBase {
    /// Wrap a live page handle. No I/O happens here.
    #[must_use]
    pub fn new(page: Page, url: impl Into<String>) -> Self {
        Self {
            page,
            url: url.into(),
            state: ConfirmationState::Unconfirmed,
        }
    }

    /// Canonical URL of the screen
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The live page handle
    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// Current confirmation state
    #[must_use]
    pub const fn state(&self) -> ConfirmationState {
        self.state
    }

    /// Whether the readiness signal has been observed
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        self.state.is_confirmed()
    }

    /// Navigate the page to the canonical URL.
    ///
    /// # Errors
    ///
    /// Propagates navigation failures unchanged.
    pub async fn open(&self) -> E2eResult<()> {
        self.page.goto(&self.url).await
    }

    /// Confirm readiness by waiting for the current URL to match the
    /// canonical URL.
    ///
    /// # Errors
    ///
    /// Propagates [`E2eError::Timeout`](crate::result::E2eError::Timeout)
    /// if the URL never matches; the state stays `Unconfirmed`.
    pub async fn confirm_by_url(&mut self, timeout: Duration) -> E2eResult<()> {
        let matcher = UrlMatcher::new(&self.url);
        self.page.wait_for_url(&matcher, timeout).await?;
        self.state = ConfirmationState::Confirmed;
        tracing::debug!(url = %self.url, "screen confirmed by url");
        Ok(())
    }

    /// Confirm readiness by waiting for a locator to become visible.
    ///
    /// # Errors
    ///
    /// Propagates the locator's timeout; the state stays `Unconfirmed`.
    pub async fn confirm_by_locator(&mut self, locator: &Locator) -> E2eResult<()> {
        locator.wait_for().await?;
        self.state = ConfirmationState::Confirmed;
        tracing::debug!(url = %self.url, selector = %locator.selector(), "screen confirmed by locator");
        Ok(())
    }
}

/// URL pattern matcher used for navigation assertions.
///
/// Patterns support literal segments (`/home`), single-segment wildcards
/// (`/users/*`) and named parameters (`/users/:id`). Matching is
/// segment-by-segment over the full URL string.
#[derive(Debug, Clone)]
pub struct UrlMatcher {
    pattern: String,
    segments: Vec<UrlSegment>,
}

#[derive(Debug, Clone)]
enum UrlSegment {
    Literal(String),
    Wildcard,
    Parameter,
}

impl UrlMatcher {
    /// Create a matcher from a pattern
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s == "*" {
                    UrlSegment::Wildcard
                } else if s.starts_with(':') {
                    UrlSegment::Parameter
                } else {
                    UrlSegment::Literal(s.to_string())
                }
            })
            .collect();

        Self {
            pattern: pattern.to_string(),
            segments,
        }
    }

    /// Check whether a URL matches the pattern.
    ///
    /// Wildcards and parameters each consume exactly one segment, so the
    /// URL must have the same segment count as the pattern.
    #[must_use]
    pub fn matches(&self, url: &str) -> bool {
        let url_segments: Vec<&str> = url.split('/').filter(|s| !s.is_empty()).collect();

        if url_segments.len() != self.segments.len() {
            return false;
        }

        self.segments.iter().enumerate().all(|(i, segment)| match segment {
            UrlSegment::Literal(lit) => url_segments.get(i) == Some(&lit.as_str()),
            UrlSegment::Wildcard | UrlSegment::Parameter => true,
        })
    }

    /// The original pattern
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod url_matcher_tests {
        use super::*;

        #[test]
        fn test_literal_match() {
            let matcher = UrlMatcher::new("https://app.vita.health/home");
            assert!(matcher.matches("https://app.vita.health/home"));
            assert!(!matcher.matches("https://app.vita.health/profile"));
            assert!(!matcher.matches("https://app.vita.health/home/extra"));
        }

        #[test]
        fn test_wildcard_match() {
            let matcher = UrlMatcher::new("https://app.vita.health/users/*");
            assert!(matcher.matches("https://app.vita.health/users/123"));
            assert!(!matcher.matches("https://app.vita.health/users"));
        }

        #[test]
        fn test_parameter_match() {
            let matcher = UrlMatcher::new("https://app.vita.health/users/:id");
            assert!(matcher.matches("https://app.vita.health/users/42"));
            assert!(!matcher.matches("https://app.vita.health/users"));
        }

        #[test]
        fn test_pattern_getter() {
            let matcher = UrlMatcher::new("https://vita.health");
            assert_eq!(matcher.pattern(), "https://vita.health");
        }
    }

    #[cfg(not(feature = "browser"))]
    mod screen_base_tests {
        use super::*;
        use crate::browser::PageConfig;
        use crate::locator::Selector;

        fn base() -> ScreenBase {
            let page = Page::new(PageConfig::default());
            ScreenBase::new(page, "https://app.vita.health/home")
        }

        #[test]
        fn test_construction_is_unconfirmed() {
            let base = base();
            assert_eq!(base.state(), ConfirmationState::Unconfirmed);
            assert!(!base.is_confirmed());
        }

        #[tokio::test]
        async fn test_confirm_by_url_transitions() {
            let mut base = base();
            base.page().script_url("https://app.vita.health/home");
            base.confirm_by_url(Duration::from_millis(100)).await.unwrap();
            assert!(base.is_confirmed());
        }

        #[tokio::test]
        async fn test_confirm_timeout_leaves_unconfirmed() {
            let mut base = base();
            let err = base
                .confirm_by_url(Duration::from_millis(100))
                .await
                .unwrap_err();
            assert!(err.is_timeout());
            assert!(!base.is_confirmed());
        }

        #[tokio::test]
        async fn test_confirm_by_locator_transitions() {
            let mut base = base();
            let selector = Selector::role("heading", "Symptoms");
            base.page().script_visible(&selector);
            let locator = base.page().locator(selector);
            base.confirm_by_locator(&locator).await.unwrap();
            assert!(base.is_confirmed());
        }

        #[tokio::test]
        async fn test_open_navigates() {
            let base = base();
            base.open().await.unwrap();
            assert_eq!(
                base.page().current_url().await.unwrap(),
                "https://app.vita.health/home"
            );
        }
    }
}
