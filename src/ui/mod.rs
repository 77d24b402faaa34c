//! User-facing notifications.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`DialogUI`] for modal message boxes on Windows
//! - [`TerminalUI`] for styled stderr output elsewhere
//! - [`MockUI`] for capturing interactions in tests
//!
//! # Example
//!
//! ```
//! use netlaunch::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error_dialog("Unable to find PEBakery", "Unable to find PEBakery.");
//! assert_eq!(ui.dialogs().len(), 1);
//! ```

#[cfg(windows)]
pub mod dialog;
pub mod mock;
pub mod terminal;
pub mod theme;

#[cfg(windows)]
pub use dialog::DialogUI;
pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, LauncherTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Show a blocking error notification with a title and body.
    fn error_dialog(&mut self, title: &str, body: &str);

    /// Open a URL in the default browser.
    fn open_url(&mut self, url: &str) -> Result<()>;
}

/// Create the UI appropriate for the host.
pub fn create_ui() -> Box<dyn UserInterface> {
    #[cfg(windows)]
    {
        Box::new(DialogUI::new())
    }
    #[cfg(not(windows))]
    {
        Box::new(TerminalUI::new())
    }
}

/// Open a URL with the platform handler.
pub(crate) fn open_with_default_handler(url: &str) -> Result<()> {
    open::that(url).map_err(|e| {
        anyhow::anyhow!(
            "Failed to open URL. You can open it manually:\n  {}\n\nError: {}",
            url,
            e
        )
        .into()
    })
}
