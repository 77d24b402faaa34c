//! Recording launcher for tests.

use std::path::{Path, PathBuf};

use crate::error::{LaunchError, Result};

use super::ProcessLauncher;

/// A launch request captured by [`MockLauncher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRecord {
    pub path: PathBuf,
    pub workdir: PathBuf,
    pub params: String,
}

/// Records launches instead of starting processes.
#[derive(Debug, Default)]
pub struct MockLauncher {
    launches: Vec<LaunchRecord>,
    fail: bool,
}

impl MockLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher whose every launch fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn launches(&self) -> &[LaunchRecord] {
        &self.launches
    }
}

impl ProcessLauncher for MockLauncher {
    fn launch(&mut self, path: &Path, workdir: &Path, params: &str) -> Result<()> {
        self.launches.push(LaunchRecord {
            path: path.to_path_buf(),
            workdir: workdir.to_path_buf(),
            params: params.to_string(),
        });

        if self.fail {
            return Err(LaunchError::SpawnFailed {
                path: path.to_path_buf(),
                message: "mock failure".to_string(),
            });
        }
        Ok(())
    }
}
