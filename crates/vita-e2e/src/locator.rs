//! Locator abstraction for element selection and interaction.
//!
//! A [`Locator`] is a lazy handle: constructing one performs no engine I/O.
//! Queries (`is_visible`), waits (`wait_for`) and actions (`click`) go
//! through the owning [`Page`](crate::browser::Page) only when invoked, and
//! auto-wait up to the locator's timeout.

use std::fmt;
use std::time::Duration;

use crate::browser::Page;
use crate::result::E2eResult;

/// Default timeout for locator auto-waiting (5 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Selector for locating elements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Visible text content (e.g. "Get the app")
    Text(String),
    /// Accessible role plus accessible name (e.g. heading "Symptoms")
    Role {
        /// ARIA role
        role: String,
        /// Accessible name
        name: String,
    },
    /// CSS selector
    Css(String),
    /// Test ID selector (`data-testid` attribute)
    TestId(String),
}

impl Selector {
    /// Create a visible-text selector
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a role + accessible-name selector
    #[must_use]
    pub fn role(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Role {
            role: role.into(),
            name: name.into(),
        }
    }

    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create a test ID selector
    #[must_use]
    pub fn test_id(id: impl Into<String>) -> Self {
        Self::TestId(id.into())
    }

    /// Convert to a JavaScript query expression resolving to the element
    /// (or `null`), for CDP evaluation.
    #[must_use]
    pub fn to_query(&self) -> String {
        match self {
            Self::Text(t) => format!(
                "Array.from(document.querySelectorAll('*')).find(el => el.children.length === 0 && el.textContent.trim() === {t:?})"
            ),
            Self::Role { role, name } => format!(
                "Array.from(document.querySelectorAll('[role={role:?}], {role}')).find(el => (el.getAttribute('aria-label') || el.textContent).trim() === {name:?})"
            ),
            Self::Css(s) => format!("document.querySelector({s:?})"),
            Self::TestId(id) => format!("document.querySelector('[data-testid=\"' + {id:?} + '\"]')"),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(t) => write!(f, "text={t}"),
            Self::Role { role, name } => write!(f, "role={role}[name={name}]"),
            Self::Css(s) => write!(f, "css={s}"),
            Self::TestId(id) => write!(f, "testid={id}"),
        }
    }
}

/// Options controlling locator behavior
#[derive(Debug, Clone)]
pub struct LocatorOptions {
    /// Timeout for auto-waiting
    pub timeout: Duration,
    /// Whether the element must be visible (vs merely attached)
    pub visible: bool,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            visible: true,
        }
    }
}

/// A handle for finding and interacting with one element on a live page.
#[derive(Debug, Clone)]
pub struct Locator {
    page: Page,
    selector: Selector,
    options: LocatorOptions,
}

impl Locator {
    /// Create a locator bound to a page
    #[must_use]
    pub fn new(page: Page, selector: Selector) -> Self {
        Self {
            page,
            selector,
            options: LocatorOptions::default(),
        }
    }

    /// Override the auto-wait timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// Require only attachment, not visibility
    #[must_use]
    pub const fn attached(mut self) -> Self {
        self.options.visible = false;
        self
    }

    /// Get the selector
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Get the options
    #[must_use]
    pub const fn options(&self) -> &LocatorOptions {
        &self.options
    }

    /// Check whether the element is currently visible, without waiting.
    ///
    /// # Errors
    ///
    /// Returns an error if the page is closed or the query fails.
    pub async fn is_visible(&self) -> E2eResult<bool> {
        self.page.is_visible(&self.selector).await
    }

    /// Wait until the element reaches its required state (visible by
    /// default), up to the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`E2eError::Timeout`](crate::result::E2eError::Timeout) if
    /// the element never appears.
    pub async fn wait_for(&self) -> E2eResult<()> {
        self.page
            .wait_for_visible(&self.selector, self.options.timeout)
            .await
    }

    /// Click the element, auto-waiting for it first.
    ///
    /// # Errors
    ///
    /// Propagates engine failures unchanged (element not found, page
    /// closed, wait timeout).
    pub async fn click(&self) -> E2eResult<()> {
        self.page
            .wait_for_visible(&self.selector, self.options.timeout)
            .await?;
        self.page.click(&self.selector).await
    }
}
