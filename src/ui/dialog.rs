//! Win32 message boxes.

use crate::error::Result;

use super::{open_with_default_handler, UserInterface};

/// Modal dialog UI for the windowed launcher.
#[derive(Debug, Default)]
pub struct DialogUI;

impl DialogUI {
    /// Create a new dialog UI.
    pub fn new() -> Self {
        Self
    }
}

impl UserInterface for DialogUI {
    fn error_dialog(&mut self, title: &str, body: &str) {
        use windows::core::HSTRING;
        use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

        // SAFETY: both strings outlive the call and no owner window is passed.
        unsafe {
            MessageBoxW(
                None,
                &HSTRING::from(body),
                &HSTRING::from(title),
                MB_OK | MB_ICONERROR,
            );
        }
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        open_with_default_handler(url)
    }
}
