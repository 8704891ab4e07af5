//! Test reporting: named steps, module/epic tags and binary attachments.
//!
//! The [`Reporter`] collects what one test case produces; the suite creates
//! one per test and discards it at teardown.

use std::time::SystemTime;

/// Named step labels used across the suite.
pub mod steps {
    /// Open the mobile-web home screen
    pub const OPEN_HOME: &str = "Open home screen";
    /// Switch to the Health tab
    pub const SWITCH_TO_HEALTH_TAB: &str = "Switch to health tab";
    /// Switch to the Profile tab
    pub const SWITCH_TO_PROFILE_TAB: &str = "Switch to profile tab";
    /// Fetch and decode the health-data API response
    pub const FETCH_HEALTH_DATA: &str = "Fetch health data response";
    /// Select an activity level option
    pub const SELECT_ACTIVITY_LEVEL: &str = "Select activity level";
    /// Select a menstrual status option
    pub const SELECT_MENSTRUAL_STATUS: &str = "Select menstrual status";
    /// Toggle symptoms and save
    pub const RECORD_SYMPTOMS: &str = "Record symptoms";
    /// Open the public website home
    pub const OPEN_WEBSITE: &str = "Open website home";
}

/// Module/epic tags used to group tests in reports.
pub mod epics {
    /// Mobile-web app flows
    pub const MOBILE_WEB: &str = "Mobile Web";
    /// Public desktop website flows
    pub const WEBSITE: &str = "Website";
    /// Profile questionnaires
    pub const PROFILE: &str = "Profile";
    /// Health metrics and health data
    pub const HEALTH_METRICS: &str = "Health Metrics";
}

/// Label under which failure screenshots are attached
pub const FAILURE_SCREENSHOT_LABEL: &str = "failure screenshot";

/// PNG media type for screenshot attachments
pub const PNG_MEDIA_TYPE: &str = "image/png";

/// A recorded step
#[derive(Debug, Clone)]
pub struct StepRecord {
    /// Step label
    pub name: String,
    /// When the step was recorded
    pub timestamp: SystemTime,
}

/// A binary artifact attached to the test report
#[derive(Debug, Clone)]
pub struct Attachment {
    /// Attachment label
    pub label: String,
    /// Media type (e.g. `image/png`)
    pub media_type: String,
    /// Raw bytes
    pub bytes: Vec<u8>,
}

/// Per-test report collector.
#[derive(Debug, Default)]
pub struct Reporter {
    epic: Option<&'static str>,
    steps: Vec<StepRecord>,
    attachments: Vec<Attachment>,
}

impl Reporter {
    /// Create an empty reporter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reporter tagged with an epic
    #[must_use]
    pub fn for_epic(epic: &'static str) -> Self {
        Self {
            epic: Some(epic),
            ..Self::default()
        }
    }

    /// The epic tag, if any
    #[must_use]
    pub const fn epic(&self) -> Option<&'static str> {
        self.epic
    }

    /// Record a named step
    pub fn step(&mut self, name: impl Into<String>) {
        let name = name.into();
        tracing::debug!(step = %name, "test step");
        self.steps.push(StepRecord {
            name,
            timestamp: SystemTime::now(),
        });
    }

    /// Attach a binary artifact
    pub fn attach(
        &mut self,
        label: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) {
        self.attachments.push(Attachment {
            label: label.into(),
            media_type: media_type.into(),
            bytes,
        });
    }

    /// Steps recorded so far, in order
    #[must_use]
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Attachments recorded so far, in order
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }
}
