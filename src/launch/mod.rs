//! Starting the main application.
//!
//! The [`ProcessLauncher`] trait lets the bootstrap be tested without
//! spawning anything. [`ShellLauncher`] uses the Windows shell "open" verb,
//! [`DirectLauncher`] spawns the process directly on other hosts.

pub mod args;
pub mod mock;

pub use args::{quote_args, split_forwarded};
pub use mock::MockLauncher;

use std::path::Path;
use std::process::Command;

use crate::error::{LaunchError, Result};

/// Starts a process without waiting for it.
pub trait ProcessLauncher {
    /// Start `path` with `workdir` as its working directory.
    ///
    /// `params` is the already-quoted parameter string from [`quote_args`].
    fn launch(&mut self, path: &Path, workdir: &Path, params: &str) -> Result<()>;
}

/// Launches through `ShellExecuteW` with the "open" verb.
#[cfg(windows)]
#[derive(Debug, Default)]
pub struct ShellLauncher;

#[cfg(windows)]
impl ProcessLauncher for ShellLauncher {
    fn launch(&mut self, path: &Path, workdir: &Path, params: &str) -> Result<()> {
        use windows::core::HSTRING;
        use windows::Win32::UI::Shell::ShellExecuteW;
        use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

        // SAFETY: all strings outlive the call and no owner window is passed.
        let instance = unsafe {
            ShellExecuteW(
                None,
                &HSTRING::from("open"),
                &HSTRING::from(path.as_os_str()),
                &HSTRING::from(params),
                &HSTRING::from(workdir.as_os_str()),
                SW_SHOWNORMAL,
            )
        };

        // Values up to 32 are error codes
        let code = instance.0 as isize;
        if code <= 32 {
            return Err(LaunchError::SpawnFailed {
                path: path.to_path_buf(),
                message: format!("ShellExecute returned {}", code),
            });
        }

        Ok(())
    }
}

/// Spawns the target directly and detaches from it.
#[derive(Debug, Default)]
pub struct DirectLauncher;

impl ProcessLauncher for DirectLauncher {
    fn launch(&mut self, path: &Path, workdir: &Path, params: &str) -> Result<()> {
        Command::new(path)
            .args(split_forwarded(params))
            .current_dir(workdir)
            .spawn()
            .map_err(|e| LaunchError::SpawnFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}

/// Create the launcher appropriate for the host.
pub fn default_launcher() -> Box<dyn ProcessLauncher> {
    #[cfg(windows)]
    {
        Box::new(ShellLauncher)
    }
    #[cfg(not(windows))]
    {
        Box::new(DirectLauncher)
    }
}
