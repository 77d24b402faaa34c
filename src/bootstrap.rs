//! The launch sequence.
//!
//! [`Bootstrap::run`] checks that the main application is in place, checks
//! its runtime prerequisite, and hands the forwarded arguments to it. All
//! host interaction goes through the probe, launcher and UI it is given.

use std::path::Path;

use crate::config::LauncherConfig;
use crate::error::{LaunchError, Result};
use crate::install::locate_target;
use crate::launch::{quote_args, ProcessLauncher};
use crate::runtime::{HostArch, RuntimeProbe};
use crate::ui::UserInterface;

/// How a launch attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The target was started.
    Launched,
    /// The target binary does not exist.
    TargetMissing,
    /// The runtime prerequisite is not installed.
    PrerequisiteMissing,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Launched => 0,
            Outcome::TargetMissing | Outcome::PrerequisiteMissing => 1,
        }
    }
}

/// Runs the launch sequence against injected host capabilities.
pub struct Bootstrap<'a> {
    config: &'a LauncherConfig,
    probe: &'a dyn RuntimeProbe,
    launcher: &'a mut dyn ProcessLauncher,
    ui: &'a mut dyn UserInterface,
    arch: HostArch,
}

impl<'a> Bootstrap<'a> {
    pub fn new(
        config: &'a LauncherConfig,
        probe: &'a dyn RuntimeProbe,
        launcher: &'a mut dyn ProcessLauncher,
        ui: &'a mut dyn UserInterface,
    ) -> Self {
        Self {
            config,
            probe,
            launcher,
            ui,
            arch: HostArch::current(),
        }
    }

    /// Override the host architecture used for installer URLs.
    pub fn with_arch(mut self, arch: HostArch) -> Self {
        self.arch = arch;
        self
    }

    /// Run the launch sequence.
    ///
    /// The target check comes first, so a missing target is reported even
    /// when the prerequisite is also missing.
    ///
    /// # Errors
    ///
    /// Returns `SpawnFailed` if the launcher could not start the target.
    pub fn run(&mut self, install_dir: &Path, args: &[String]) -> Result<Outcome> {
        tracing::debug!("Install directory: {}", install_dir.display());

        let Some(target) = locate_target(install_dir, self.config) else {
            let err = LaunchError::TargetNotFound {
                path: self.config.target_path(install_dir),
            };
            tracing::warn!("{}", err);

            let (title, body) = self.config.target_missing_text();
            self.ui.error_dialog(&title, &body);
            return Ok(Outcome::TargetMissing);
        };

        tracing::debug!("Checking prerequisite: {}", self.probe.describe());
        if !self.probe.is_satisfied() {
            self.prompt_install();
            return Ok(Outcome::PrerequisiteMissing);
        }

        let params = quote_args(args);
        tracing::debug!("Launching {} with {:?}", target.display(), params);
        self.launcher.launch(&target, install_dir, &params)?;
        tracing::info!("Launched {}", target.display());

        Ok(Outcome::Launched)
    }

    fn prompt_install(&mut self) {
        let prereq = &self.config.prerequisite;
        let err = LaunchError::PrerequisiteMissing {
            runtime: prereq.name.clone(),
            version: prereq.display_version(),
        };
        tracing::warn!("{}", err);

        let (title, body) = self.config.prerequisite_missing_text();
        self.ui.error_dialog(&title, &body);

        if let Some(url) = prereq.installer_url(self.arch) {
            tracing::debug!("Opening installer page {}", url);
            if let Err(e) = self.ui.open_url(&url) {
                tracing::warn!("{}", e);
            }
        }
    }
}
