//! Install directory and target discovery.

use std::path::{Path, PathBuf};

use crate::config::LauncherConfig;
use crate::error::{LaunchError, Result};

/// Directory containing the running launcher binary.
///
/// # Errors
///
/// Returns `InstallDirUnavailable` if the host cannot report the
/// executable path.
pub fn resolve_install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| LaunchError::InstallDirUnavailable {
        message: e.to_string(),
    })?;
    install_dir_of(&exe)
}

/// Directory containing `exe`, without trailing separators.
pub fn install_dir_of(exe: &Path) -> Result<PathBuf> {
    let dir = exe
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| LaunchError::InstallDirUnavailable {
            message: format!("{} has no parent directory", exe.display()),
        })?;

    Ok(trim_trailing_separators(dir))
}

/// Strip trailing path separators, keeping a bare root (`/`, `C:\`) intact.
pub fn trim_trailing_separators(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };

    let bytes = s.as_bytes();
    let mut end = bytes.len();
    while end > 1 && std::path::is_separator(bytes[end - 1] as char) && bytes[end - 2] != b':' {
        end -= 1;
    }

    PathBuf::from(&s[..end])
}

/// Path of the main application if it exists as a file.
pub fn locate_target(install_dir: &Path, config: &LauncherConfig) -> Option<PathBuf> {
    let path = config.target_path(install_dir);
    path.is_file().then_some(path)
}
