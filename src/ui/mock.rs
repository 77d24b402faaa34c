//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use netlaunch::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.open_url("https://example.com").unwrap();
//! assert_eq!(ui.opened_urls(), ["https://example.com"]);
//! ```

use crate::error::{LaunchError, Result};

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    dialogs: Vec<(String, String)>,
    opened_urls: Vec<String>,
    fail_open: bool,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `open_url` call fail (the URL is still recorded).
    pub fn failing_open() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    /// Dialogs shown, as `(title, body)`.
    pub fn dialogs(&self) -> &[(String, String)] {
        &self.dialogs
    }

    /// URLs passed to `open_url`.
    pub fn opened_urls(&self) -> &[String] {
        &self.opened_urls
    }

    /// Check if a dialog with the given title was shown.
    pub fn has_dialog(&self, title: &str) -> bool {
        self.dialogs.iter().any(|(t, _)| t == title)
    }
}

impl UserInterface for MockUI {
    fn error_dialog(&mut self, title: &str, body: &str) {
        self.dialogs.push((title.to_string(), body.to_string()));
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        self.opened_urls.push(url.to_string());
        if self.fail_open {
            return Err(LaunchError::Other(anyhow::anyhow!(
                "no handler for {}",
                url
            )));
        }
        Ok(())
    }
}
