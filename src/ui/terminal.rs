//! Terminal UI for hosts without message boxes.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{open_with_default_handler, should_use_colors, LauncherTheme, UserInterface};

/// Writes notifications to stderr.
pub struct TerminalUI {
    term: Term,
    theme: LauncherTheme,
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            LauncherTheme::new()
        } else {
            LauncherTheme::plain()
        };

        Self {
            term: Term::stderr(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn error_dialog(&mut self, title: &str, body: &str) {
        writeln!(self.term, "{}", self.theme.format_error(title, body)).ok();
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        writeln!(self.term, "{}", self.theme.format_link(url)).ok();
        open_with_default_handler(url)
    }
}
