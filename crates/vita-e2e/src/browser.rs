//! Engine adapter: the narrow interface the suite consumes from the
//! browser automation engine.
//!
//! When compiled with the `browser` feature this drives a real Chromium via
//! the Chrome DevTools Protocol (chromiumoxide). Without the feature it
//! compiles as a scriptable in-memory mock, so the suite's own tests run
//! deterministically with no browser installed.
//!
//! Either flavor exposes the same surface: navigation, URL waits, locator
//! visibility waits, clicks, network-response rendezvous, screenshots and
//! closed-state queries. Timeout failures pass through unchanged; nothing
//! here retries.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::result::E2eResult;

/// Default wait timeout (30 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Polling interval for CDP-side waits (50ms)
pub const POLL_INTERVAL_MS: u64 = 50;

/// Page/session configuration
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Run in headless mode
    pub headless: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Default timeout for wait operations, in milliseconds
    pub default_timeout_ms: u64,
    /// Path to chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
    /// Sandbox mode (disable for containers)
    pub sandbox: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 390,
            viewport_height: 844,
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
            chromium_path: None,
            sandbox: true,
        }
    }
}

impl PageConfig {
    /// Set viewport dimensions
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the default wait timeout
    #[must_use]
    pub const fn with_default_timeout(mut self, timeout_ms: u64) -> Self {
        self.default_timeout_ms = timeout_ms;
        self
    }

    /// Set chromium path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Disable sandbox (for containers/CI)
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }

    /// Default timeout as a [`Duration`]
    #[must_use]
    pub const fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }
}

/// An observed network response: URL, status code and raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// Response URL
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl ApiResponse {
    /// Create a response record
    #[must_use]
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// Whether the status code is 200 OK
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`E2eError::Json`] if the body is not valid JSON of the
    /// expected shape. Missing optional fields are not an error; the DTOs
    /// tolerate partial payloads.
    pub fn body_json<T: DeserializeOwned>(&self) -> E2eResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

// ============================================================================
// Real CDP implementation (when the `browser` feature is enabled)
// ============================================================================

#[cfg(feature = "browser")]
mod cdp {
    use std::future::Future;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
    use chromiumoxide::cdp::browser_protocol::network::GetResponseBodyParams;
    use chromiumoxide::cdp::browser_protocol::network::EventResponseReceived;
    use chromiumoxide::cdp::browser_protocol::page::{
        CaptureScreenshotFormat, CaptureScreenshotParams,
    };
    use chromiumoxide::page::Page as CdpPage;
    use futures::StreamExt;
    use tokio::sync::Mutex;

    use super::{ApiResponse, PageConfig, POLL_INTERVAL_MS};
    use crate::locator::{Locator, Selector};
    use crate::page_object::UrlMatcher;
    use crate::result::{E2eError, E2eResult};

    /// Browser session with a live CDP connection
    #[derive(Debug)]
    pub struct Browser {
        config: PageConfig,
        inner: Arc<Mutex<CdpBrowser>>,
        #[allow(dead_code)]
        handle: tokio::task::JoinHandle<()>,
    }

    impl Browser {
        /// Launch a browser session.
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Launch`] if the browser cannot be started.
        pub async fn launch(config: PageConfig) -> E2eResult<Self> {
            let mut builder = CdpConfig::builder()
                .window_size(config.viewport_width, config.viewport_height);

            if !config.headless {
                builder = builder.with_head();
            }

            if !config.sandbox {
                builder = builder.no_sandbox();
            }

            if let Some(ref path) = config.chromium_path {
                builder = builder.chrome_executable(path);
            }

            let cdp_config = builder.build().map_err(|e| E2eError::Launch {
                message: e.to_string(),
            })?;

            let (browser, mut handler) =
                CdpBrowser::launch(cdp_config)
                    .await
                    .map_err(|e| E2eError::Launch {
                        message: e.to_string(),
                    })?;

            let handle = tokio::spawn(async move {
                while let Some(h) = handler.next().await {
                    if h.is_err() {
                        break;
                    }
                }
            });

            Ok(Self {
                config,
                inner: Arc::new(Mutex::new(browser)),
                handle,
            })
        }

        /// Open a new tab.
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Page`] if the tab cannot be created.
        pub async fn new_page(&self) -> E2eResult<Page> {
            let browser = self.inner.lock().await;
            let cdp_page = browser
                .new_page("about:blank")
                .await
                .map_err(|e| E2eError::Page {
                    message: e.to_string(),
                })?;

            Ok(Page {
                config: self.config.clone(),
                inner: Arc::new(Mutex::new(cdp_page)),
                closed: Arc::new(AtomicBool::new(false)),
            })
        }

        /// Get the session configuration
        #[must_use]
        pub const fn config(&self) -> &PageConfig {
            &self.config
        }

        /// Close the browser session.
        pub async fn close(self) -> E2eResult<()> {
            let mut browser = self.inner.lock().await;
            browser.close().await.map_err(|e| E2eError::Launch {
                message: e.to_string(),
            })?;
            Ok(())
        }
    }

    /// A live browser tab. Cheap to clone; every page object built on the
    /// same tab shares this handle.
    #[derive(Debug, Clone)]
    pub struct Page {
        config: PageConfig,
        inner: Arc<Mutex<CdpPage>>,
        closed: Arc<AtomicBool>,
    }

    impl Page {
        /// Navigate to a URL.
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Navigation`] if navigation fails.
        pub async fn goto(&self, url: &str) -> E2eResult<()> {
            let page = self.inner.lock().await;
            page.goto(url).await.map_err(|e| E2eError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;
            Ok(())
        }

        /// Current URL of the tab.
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Page`] if the engine query fails.
        pub async fn current_url(&self) -> E2eResult<String> {
            let page = self.inner.lock().await;
            let url = page.url().await.map_err(|e| E2eError::Page {
                message: e.to_string(),
            })?;
            Ok(url.unwrap_or_else(|| String::from("about:blank")))
        }

        /// Wait until the current URL matches `matcher`.
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Timeout`] if no match is observed in time.
        pub async fn wait_for_url(
            &self,
            matcher: &UrlMatcher,
            timeout: Duration,
        ) -> E2eResult<()> {
            let started = Instant::now();
            loop {
                if matcher.matches(&self.current_url().await?) {
                    return Ok(());
                }
                if started.elapsed() >= timeout {
                    return Err(E2eError::Timeout {
                        ms: timeout.as_millis() as u64,
                        what: format!("url matching {}", matcher.pattern()),
                    });
                }
                tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
            }
        }

        /// Check element visibility without waiting.
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Page`] if evaluation fails.
        pub async fn is_visible(&self, selector: &Selector) -> E2eResult<bool> {
            let expr = format!(
                "(() => {{ const el = {}; return !!el && !!(el.offsetWidth || el.offsetHeight || el.getClientRects().length); }})()",
                selector.to_query()
            );
            let page = self.inner.lock().await;
            let result = page.evaluate(expr).await.map_err(|e| E2eError::Page {
                message: e.to_string(),
            })?;
            result.into_value().map_err(|e| E2eError::Page {
                message: e.to_string(),
            })
        }

        /// Wait until an element is visible.
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Timeout`] if it never becomes visible.
        pub async fn wait_for_visible(
            &self,
            selector: &Selector,
            timeout: Duration,
        ) -> E2eResult<()> {
            let started = Instant::now();
            loop {
                if self.is_visible(selector).await? {
                    return Ok(());
                }
                if started.elapsed() >= timeout {
                    return Err(E2eError::Timeout {
                        ms: timeout.as_millis() as u64,
                        what: selector.to_string(),
                    });
                }
                tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
            }
        }

        /// Click an element.
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Page`] if the element cannot be found or
        /// the click fails.
        pub async fn click(&self, selector: &Selector) -> E2eResult<()> {
            let expr = format!(
                "(() => {{ const el = {}; if (!el) throw new Error('element not found: {}'); el.click(); return true; }})()",
                selector.to_query(),
                selector
            );
            let page = self.inner.lock().await;
            page.evaluate(expr).await.map_err(|e| E2eError::Page {
                message: e.to_string(),
            })?;
            Ok(())
        }

        /// Rendezvous: install a response listener, run `trigger`, and
        /// return the first response matching `predicate`.
        ///
        /// The listener is registered before the trigger future is polled,
        /// so a response fired during the trigger is never missed.
        ///
        /// # Errors
        ///
        /// Propagates trigger failures; returns [`E2eError::Timeout`] if no
        /// matching response arrives within the configured timeout.
        pub async fn expect_response<P, Fut>(
            &self,
            predicate: P,
            trigger: Fut,
        ) -> E2eResult<ApiResponse>
        where
            P: Fn(&ApiResponse) -> bool,
            Fut: Future<Output = E2eResult<()>>,
        {
            let mut events = {
                let page = self.inner.lock().await;
                page.event_listener::<EventResponseReceived>()
                    .await
                    .map_err(|e| E2eError::Page {
                        message: e.to_string(),
                    })?
            };

            trigger.await?;

            let timeout = self.config.default_timeout();
            let started = Instant::now();
            loop {
                let remaining = timeout.saturating_sub(started.elapsed());
                if remaining.is_zero() {
                    return Err(E2eError::Timeout {
                        ms: timeout.as_millis() as u64,
                        what: String::from("matching network response"),
                    });
                }

                let Ok(Some(event)) = tokio::time::timeout(remaining, events.next()).await
                else {
                    return Err(E2eError::Timeout {
                        ms: timeout.as_millis() as u64,
                        what: String::from("matching network response"),
                    });
                };

                let status = u16::try_from(event.response.status).unwrap_or(0);
                let mut response =
                    ApiResponse::new(event.response.url.clone(), status, String::new());
                if !predicate(&response) {
                    continue;
                }

                response.body = self.response_body(event.request_id.clone()).await?;
                return Ok(response);
            }
        }

        async fn response_body(
            &self,
            request_id: chromiumoxide::cdp::browser_protocol::network::RequestId,
        ) -> E2eResult<String> {
            let page = self.inner.lock().await;
            let body = page
                .execute(GetResponseBodyParams::new(request_id))
                .await
                .map_err(|e| E2eError::Page {
                    message: e.to_string(),
                })?;
            if body.result.base64_encoded {
                use base64::Engine;
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(body.result.body.as_bytes())
                    .map_err(|e| E2eError::Page {
                        message: e.to_string(),
                    })?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            } else {
                Ok(body.result.body.clone())
            }
        }

        /// Capture a PNG screenshot.
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Screenshot`] on capture failure.
        pub async fn screenshot(&self) -> E2eResult<Vec<u8>> {
            let page = self.inner.lock().await;
            let params = CaptureScreenshotParams::builder()
                .format(CaptureScreenshotFormat::Png)
                .build();
            let shot = page
                .execute(params)
                .await
                .map_err(|e| E2eError::Screenshot {
                    message: e.to_string(),
                })?;

            use base64::Engine;
            base64::engine::general_purpose::STANDARD
                .decode(&shot.data)
                .map_err(|e| E2eError::Screenshot {
                    message: e.to_string(),
                })
        }

        /// Capture a PNG screenshot and write it to `path`.
        ///
        /// # Errors
        ///
        /// Returns capture or I/O errors.
        pub async fn screenshot_to(&self, path: &std::path::Path) -> E2eResult<Vec<u8>> {
            let bytes = self.screenshot().await?;
            tokio::fs::write(path, &bytes).await?;
            Ok(bytes)
        }

        /// Whether this tab has been closed.
        pub async fn is_closed(&self) -> bool {
            self.closed.load(Ordering::SeqCst)
        }

        /// Close the tab.
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Page`] if the close command fails.
        pub async fn close(&self) -> E2eResult<()> {
            use chromiumoxide::cdp::browser_protocol::page::CloseParams;
            let page = self.inner.lock().await;
            page.execute(CloseParams::default())
                .await
                .map_err(|e| E2eError::Page {
                    message: e.to_string(),
                })?;
            self.closed.store(true, Ordering::SeqCst);
            Ok(())
        }

        /// Build a locator bound to this page
        #[must_use]
        pub fn locator(&self, selector: Selector) -> Locator {
            Locator::new(self.clone(), selector)
        }

        /// Locator for an element by visible text
        #[must_use]
        pub fn get_by_text(&self, text: impl Into<String>) -> Locator {
            self.locator(Selector::text(text))
        }

        /// Locator for an element by accessible role and name
        #[must_use]
        pub fn get_by_role(
            &self,
            role: impl Into<String>,
            name: impl Into<String>,
        ) -> Locator {
            self.locator(Selector::role(role, name))
        }
    }
}

// ============================================================================
// Mock implementation (when the `browser` feature is NOT enabled)
// ============================================================================

#[cfg(not(feature = "browser"))]
mod mock {
    use std::collections::HashSet;
    use std::future::Future;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
    use std::time::Duration;

    use super::{ApiResponse, PageConfig};
    use crate::locator::{Locator, Selector};
    use crate::page_object::UrlMatcher;
    use crate::result::{E2eError, E2eResult};

    // Smallest payload that still looks like a PNG to consumers checking
    // magic bytes.
    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    /// Browser session (in-memory mock)
    #[derive(Debug)]
    pub struct Browser {
        config: PageConfig,
    }

    impl Browser {
        /// Launch a browser session (mock; always succeeds).
        ///
        /// # Errors
        ///
        /// Kept fallible for signature parity with the CDP flavor.
        pub async fn launch(config: PageConfig) -> E2eResult<Self> {
            Ok(Self { config })
        }

        /// Open a new tab.
        ///
        /// # Errors
        ///
        /// Kept fallible for signature parity with the CDP flavor.
        pub async fn new_page(&self) -> E2eResult<Page> {
            Ok(Page::new(self.config.clone()))
        }

        /// Get the session configuration
        #[must_use]
        pub const fn config(&self) -> &PageConfig {
            &self.config
        }

        /// Close the browser session.
        pub async fn close(self) -> E2eResult<()> {
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct PageState {
        url: String,
        visible: HashSet<String>,
        responses: Vec<ApiResponse>,
        clicks: Vec<String>,
        screenshot_png: Vec<u8>,
        closed: bool,
    }

    /// A scriptable in-memory tab. Cheap to clone; every page object built
    /// on the same tab shares this handle.
    ///
    /// Wait operations check the scripted state once and fail immediately
    /// with a timeout error when the signal is not present, so unit tests
    /// stay fast and deterministic.
    #[derive(Debug, Clone)]
    pub struct Page {
        config: PageConfig,
        state: Arc<Mutex<PageState>>,
    }

    impl Page {
        /// Create a detached mock tab (tests may skip `Browser` entirely)
        #[must_use]
        pub fn new(config: PageConfig) -> Self {
            Self {
                config,
                state: Arc::new(Mutex::new(PageState {
                    url: String::from("about:blank"),
                    screenshot_png: PNG_MAGIC.to_vec(),
                    ..PageState::default()
                })),
            }
        }

        fn state(&self) -> MutexGuard<'_, PageState> {
            self.state.lock().unwrap_or_else(PoisonError::into_inner)
        }

        fn ensure_open(&self) -> E2eResult<()> {
            if self.state().closed {
                return Err(E2eError::Page {
                    message: String::from("page has been closed"),
                });
            }
            Ok(())
        }

        /// Navigate to a URL.
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Page`] if the tab is closed.
        pub async fn goto(&self, url: &str) -> E2eResult<()> {
            self.ensure_open()?;
            self.state().url = url.to_string();
            Ok(())
        }

        /// Current URL of the tab.
        ///
        /// # Errors
        ///
        /// Kept fallible for signature parity with the CDP flavor.
        pub async fn current_url(&self) -> E2eResult<String> {
            Ok(self.state().url.clone())
        }

        /// Wait until the current URL matches `matcher`.
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Timeout`] when the scripted URL does not
        /// match.
        pub async fn wait_for_url(
            &self,
            matcher: &UrlMatcher,
            timeout: Duration,
        ) -> E2eResult<()> {
            self.ensure_open()?;
            if matcher.matches(&self.state().url) {
                return Ok(());
            }
            Err(E2eError::Timeout {
                ms: timeout.as_millis() as u64,
                what: format!("url matching {}", matcher.pattern()),
            })
        }

        /// Check element visibility without waiting.
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Page`] if the tab is closed.
        pub async fn is_visible(&self, selector: &Selector) -> E2eResult<bool> {
            self.ensure_open()?;
            Ok(self.state().visible.contains(&selector.to_string()))
        }

        /// Wait until an element is visible.
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Timeout`] when the element is not scripted
        /// visible.
        pub async fn wait_for_visible(
            &self,
            selector: &Selector,
            timeout: Duration,
        ) -> E2eResult<()> {
            if self.is_visible(selector).await? {
                return Ok(());
            }
            Err(E2eError::Timeout {
                ms: timeout.as_millis() as u64,
                what: selector.to_string(),
            })
        }

        /// Click an element.
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Page`] if the element is not visible or the
        /// tab is closed.
        pub async fn click(&self, selector: &Selector) -> E2eResult<()> {
            self.ensure_open()?;
            let key = selector.to_string();
            let mut state = self.state();
            if !state.visible.contains(&key) {
                return Err(E2eError::Page {
                    message: format!("element not found: {key}"),
                });
            }
            state.clicks.push(key);
            Ok(())
        }

        /// Rendezvous: run `trigger`, then return the first scripted
        /// response matching `predicate`.
        ///
        /// Responses queued by the trigger itself are observed, matching
        /// the listener-before-trigger contract of the CDP flavor.
        ///
        /// # Errors
        ///
        /// Propagates trigger failures; returns [`E2eError::Timeout`] when
        /// no scripted response matches.
        pub async fn expect_response<P, Fut>(
            &self,
            predicate: P,
            trigger: Fut,
        ) -> E2eResult<ApiResponse>
        where
            P: Fn(&ApiResponse) -> bool,
            Fut: Future<Output = E2eResult<()>>,
        {
            self.ensure_open()?;
            trigger.await?;

            let mut state = self.state();
            if let Some(index) = state.responses.iter().position(|r| predicate(r)) {
                return Ok(state.responses.remove(index));
            }
            Err(E2eError::Timeout {
                ms: self.config.default_timeout_ms,
                what: String::from("matching network response"),
            })
        }

        /// Capture a PNG screenshot (scripted bytes).
        ///
        /// # Errors
        ///
        /// Returns [`E2eError::Screenshot`] if the tab is closed.
        pub async fn screenshot(&self) -> E2eResult<Vec<u8>> {
            if self.state().closed {
                return Err(E2eError::Screenshot {
                    message: String::from("page has been closed"),
                });
            }
            Ok(self.state().screenshot_png.clone())
        }

        /// Capture a screenshot and write it to `path`.
        ///
        /// # Errors
        ///
        /// Returns capture or I/O errors.
        pub async fn screenshot_to(&self, path: &std::path::Path) -> E2eResult<Vec<u8>> {
            let bytes = self.screenshot().await?;
            std::fs::write(path, &bytes)?;
            Ok(bytes)
        }

        /// Whether this tab has been closed.
        pub async fn is_closed(&self) -> bool {
            self.state().closed
        }

        /// Close the tab.
        ///
        /// # Errors
        ///
        /// Kept fallible for signature parity with the CDP flavor.
        pub async fn close(&self) -> E2eResult<()> {
            self.state().closed = true;
            Ok(())
        }

        /// Build a locator bound to this page
        #[must_use]
        pub fn locator(&self, selector: Selector) -> Locator {
            Locator::new(self.clone(), selector)
        }

        /// Locator for an element by visible text
        #[must_use]
        pub fn get_by_text(&self, text: impl Into<String>) -> Locator {
            self.locator(Selector::text(text))
        }

        /// Locator for an element by accessible role and name
        #[must_use]
        pub fn get_by_role(
            &self,
            role: impl Into<String>,
            name: impl Into<String>,
        ) -> Locator {
            self.locator(Selector::role(role, name))
        }

        // --- test scripting -------------------------------------------------

        /// Script the current URL
        pub fn script_url(&self, url: impl Into<String>) {
            self.state().url = url.into();
        }

        /// Script an element as visible
        pub fn script_visible(&self, selector: &Selector) {
            let key = selector.to_string();
            let _ = self.state().visible.insert(key);
        }

        /// Script an element as no longer visible
        pub fn script_hidden(&self, selector: &Selector) {
            let key = selector.to_string();
            let _ = self.state().visible.remove(&key);
        }

        /// Queue a network response for `expect_response`
        pub fn script_response(&self, response: ApiResponse) {
            self.state().responses.push(response);
        }

        /// Script the screenshot payload
        pub fn script_screenshot(&self, bytes: Vec<u8>) {
            self.state().screenshot_png = bytes;
        }

        /// Selectors clicked so far, in order
        #[must_use]
        pub fn clicks(&self) -> Vec<String> {
            self.state().clicks.clone()
        }
    }
}

// Re-export based on feature
#[cfg(feature = "browser")]
pub use cdp::{Browser, Page};

#[cfg(not(feature = "browser"))]
pub use mock::{Browser, Page};

#[cfg(all(test, not(feature = "browser")))]
mod tests {
    use super::*;
    use crate::locator::Selector;
    use crate::page_object::UrlMatcher;
    use crate::result::E2eError;

    fn page() -> Page {
        Page::new(PageConfig::default())
    }

    mod navigation_tests {
        use super::*;

        #[tokio::test]
        async fn test_goto_updates_url() {
            let page = page();
            page.goto("https://app.vita.health/home").await.unwrap();
            assert_eq!(
                page.current_url().await.unwrap(),
                "https://app.vita.health/home"
            );
        }

        #[tokio::test]
        async fn test_wait_for_url_times_out_on_mismatch() {
            let page = page();
            let matcher = UrlMatcher::new("https://app.vita.health/home");
            let err = page
                .wait_for_url(&matcher, Duration::from_millis(100))
                .await
                .unwrap_err();
            assert!(err.is_timeout());
        }

        #[tokio::test]
        async fn test_goto_on_closed_page_fails() {
            let page = page();
            page.close().await.unwrap();
            assert!(page.goto("https://app.vita.health/home").await.is_err());
        }
    }

    mod element_tests {
        use super::*;

        #[tokio::test]
        async fn test_visibility_follows_script() {
            let page = page();
            let selector = Selector::text("Health");
            assert!(!page.is_visible(&selector).await.unwrap());
            page.script_visible(&selector);
            assert!(page.is_visible(&selector).await.unwrap());
            page.script_hidden(&selector);
            assert!(!page.is_visible(&selector).await.unwrap());
        }

        #[tokio::test]
        async fn test_click_missing_element_propagates() {
            let page = page();
            let err = page.click(&Selector::text("Health")).await.unwrap_err();
            match err {
                E2eError::Page { message } => assert!(message.contains("text=Health")),
                other => panic!("expected page error, got {other}"),
            }
        }

        #[tokio::test]
        async fn test_click_records_order() {
            let page = page();
            page.script_visible(&Selector::text("Health"));
            page.script_visible(&Selector::text("Profile"));
            page.click(&Selector::text("Health")).await.unwrap();
            page.click(&Selector::text("Profile")).await.unwrap();
            assert_eq!(page.clicks(), vec!["text=Health", "text=Profile"]);
        }
    }

    mod response_tests {
        use super::*;

        #[tokio::test]
        async fn test_expect_response_matches_queued() {
            let page = page();
            page.script_response(ApiResponse::new(
                "https://api.vita.health/api/v1/health-data?days=7",
                200,
                r#"{"status":"ok"}"#,
            ));

            let trigger = page.goto("https://app.vita.health/health-metrics");
            let response = page
                .expect_response(
                    |r| r.url.contains("/api/v1/health-data") && r.is_success(),
                    trigger,
                )
                .await
                .unwrap();
            assert_eq!(response.status, 200);
        }

        #[tokio::test]
        async fn test_expect_response_sees_trigger_side_effects() {
            let page = page();
            let other = page.clone();
            let trigger = async move {
                other.script_response(ApiResponse::new("/api/v1/health-data", 200, "{}"));
                Ok(())
            };
            let response = page
                .expect_response(|r| r.is_success(), trigger)
                .await
                .unwrap();
            assert_eq!(response.url, "/api/v1/health-data");
        }

        #[tokio::test]
        async fn test_expect_response_times_out_without_match() {
            let page = page();
            page.script_response(ApiResponse::new("/api/v1/health-data", 500, ""));
            let err = page
                .expect_response(|r| r.is_success(), async { Ok(()) })
                .await
                .unwrap_err();
            assert!(err.is_timeout());
        }
    }

    mod screenshot_tests {
        use super::*;

        #[tokio::test]
        async fn test_screenshot_returns_png_bytes() {
            let page = page();
            let bytes = page.screenshot().await.unwrap();
            assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
        }

        #[tokio::test]
        async fn test_screenshot_after_close_fails() {
            let page = page();
            page.close().await.unwrap();
            assert!(page.is_closed().await);
            assert!(page.screenshot().await.is_err());
        }
    }
}
