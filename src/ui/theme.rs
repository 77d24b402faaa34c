//! Visual theme and styling.

use console::Style;

/// Styles for terminal notifications.
#[derive(Debug, Clone)]
pub struct LauncherTheme {
    /// Style for error titles (red bold).
    pub error: Style,
    /// Style for URLs (underlined).
    pub link: Style,
    /// Style for secondary text.
    pub dim: Style,
}

impl Default for LauncherTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LauncherTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
            link: Style::new().underlined(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            link: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format an error notification: icon and title, then the body.
    pub fn format_error(&self, title: &str, body: &str) -> String {
        format!(
            "{}\n  {}",
            self.error.apply_to(format!("✗ {}", title)),
            body
        )
    }

    /// Format a URL hand-off line.
    pub fn format_link(&self, url: &str) -> String {
        format!("{} {}", self.dim.apply_to("→"), self.link.apply_to(url))
    }
}

/// Check if colors should be enabled on stderr.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}
