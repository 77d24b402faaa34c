//! Launcher config discovery and loading.
//!
//! The launcher looks for a single optional file, `netlaunch.yml`, in its
//! install directory. When present it is deep-merged over
//! [`LauncherConfig::default`].

use crate::config::merger::deep_merge;
use crate::config::schema::LauncherConfig;
use crate::error::{LaunchError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the launcher config.
pub const CONFIG_FILE_NAME: &str = "netlaunch.yml";

/// Path of the launcher config for an install directory.
pub fn config_path(install_dir: &Path) -> PathBuf {
    install_dir.join(CONFIG_FILE_NAME)
}

/// Load the launcher config for an install directory.
///
/// Returns the defaults when no config file exists.
///
/// # Errors
///
/// Returns `Config` if the file exists but is not valid YAML or does not
/// match the schema.
pub fn load_launcher_config(install_dir: &Path) -> Result<LauncherConfig> {
    let path = config_path(install_dir);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, install_dir.display());
            return Ok(LauncherConfig::default());
        }
        Err(e) => return Err(LaunchError::Io(e)),
    };

    parse_config(&content, &path)
}

/// Parse YAML content and layer it over the defaults.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<LauncherConfig> {
    let config_err = |message: String| LaunchError::Config {
        path: source_path.to_path_buf(),
        message,
    };

    let overlay: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| config_err(e.to_string()))?;
    let defaults =
        serde_yaml::to_value(LauncherConfig::default()).map_err(|e| config_err(e.to_string()))?;

    let merged = deep_merge(&defaults, &overlay);

    serde_yaml::from_value(merged).map_err(|e| config_err(e.to_string()))
}
