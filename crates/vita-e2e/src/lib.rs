//! End-to-end test automation toolkit for the Vita health & wellness web
//! product (mobile web and desktop web).
//!
//! The crate is a page-object layer over a browser automation engine:
//! typed screen wrappers with explicit wait/confirmation semantics, data
//! models mirroring the product's JSON APIs, and test-support services
//! (step reporting, screenshot-on-failure).
//!
//! # Layers
//!
//! - [`config`] — environment-resolved URLs and endpoint fragments
//! - [`model`] — optional-field mirrors of API responses
//! - [`browser`] / [`locator`] — the narrow engine interface (scriptable
//!   mock by default; real Chromium behind the `browser` feature)
//! - [`page_object`] / [`pages`] — the screen wrappers tests drive
//! - [`report`] / [`hooks`] — reporting and lifecycle services
//!
//! # Example
//!
//! ```no_run
//! use vita_e2e::browser::{Browser, PageConfig};
//! use vita_e2e::config::Config;
//! use vita_e2e::pages::HomeScreen;
//!
//! # async fn run() -> vita_e2e::E2eResult<()> {
//! let config = Config::from_env()?;
//! let browser = Browser::launch(PageConfig::default()).await?;
//! let page = browser.new_page().await?;
//!
//! let mut home = HomeScreen::new(page, &config);
//! home.open().await?;
//! home.wait_for_confirmation().await?;
//! home.click_health_tab().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod browser;
pub mod config;
pub mod hooks;
pub mod locator;
pub mod logging;
pub mod model;
pub mod page_object;
pub mod pages;
pub mod report;
pub mod result;

pub use browser::{ApiResponse, Browser, Page, PageConfig};
pub use config::Config;
pub use hooks::{ScreenshotOnFailure, TestOutcome};
pub use locator::{Locator, Selector};
pub use page_object::{ConfirmationState, Screen, ScreenBase, UrlMatcher};
pub use report::Reporter;
pub use result::{E2eError, E2eResult};
