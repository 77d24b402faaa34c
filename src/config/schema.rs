//! Launcher configuration schema.
//!
//! These structs map to the optional `netlaunch.yml` file that sits next
//! to the launcher. Every field has a compiled-in default, so an absent
//! file reproduces the shipped launcher.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::runtime::installer::{netcore_installer_url, netfx_installer_url, HostArch};
use crate::runtime::netfx;
use crate::runtime::RuntimeVersion;

/// Root configuration structure for netlaunch.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Product name shown in dialogs
    pub product: String,

    /// File name of the main application binary
    pub target: String,

    /// Directory under the install directory that holds `target`
    pub binary_dir: String,

    /// Runtime the main application needs
    pub prerequisite: PrerequisiteConfig,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            product: "PEBakery".to_string(),
            target: format!("PEBakery{}", std::env::consts::EXE_SUFFIX),
            binary_dir: "Binary".to_string(),
            prerequisite: PrerequisiteConfig::default(),
        }
    }
}

impl LauncherConfig {
    /// Full path of the main application binary for an install directory.
    pub fn target_path(&self, install_dir: &Path) -> PathBuf {
        install_dir.join(&self.binary_dir).join(&self.target)
    }

    /// Dialog title and body for a missing target.
    pub fn target_missing_text(&self) -> (String, String) {
        (
            format!("Unable to find {}", self.product),
            format!("Unable to find {}.", self.product),
        )
    }

    /// Dialog title and body for a missing prerequisite.
    pub fn prerequisite_missing_text(&self) -> (String, String) {
        let prereq = &self.prerequisite;
        let version = prereq.display_version();
        (
            format!("Install {} {}", prereq.name, version),
            format!(
                "{} requires {} {} or newer.",
                self.product, prereq.name, version
            ),
        )
    }
}

/// Kind of runtime prerequisite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrerequisiteKind {
    /// .NET Framework 4.5+, detected through the registry `Release` value
    NetFx,
    /// .NET (Core) runtime, detected through `dotnet --list-runtimes`
    NetCore,
    /// No prerequisite
    None,
}

/// Runtime prerequisite settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrerequisiteConfig {
    /// How to detect the runtime
    pub kind: PrerequisiteKind,

    /// Runtime name shown in dialogs
    pub name: String,

    /// Minimum runtime version (quote it in YAML: `"4.8"`)
    pub version: RuntimeVersion,

    /// Explicit minimum registry `Release` value (netfx only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<u32>,

    /// Also require the Windows Desktop runtime (netcore only)
    #[serde(skip_serializing_if = "is_false")]
    pub desktop: bool,

    /// Page opened when the runtime is missing (overrides the derived URL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installer_url: Option<String>,
}

impl Default for PrerequisiteConfig {
    fn default() -> Self {
        Self {
            kind: PrerequisiteKind::NetFx,
            name: ".NET Framework".to_string(),
            version: RuntimeVersion::new(4, 7, 2),
            release: None,
            desktop: false,
            installer_url: None,
        }
    }
}

impl PrerequisiteConfig {
    /// A prerequisite that is always met.
    pub fn none() -> Self {
        Self {
            kind: PrerequisiteKind::None,
            name: String::new(),
            ..Self::default()
        }
    }

    /// A .NET runtime prerequisite.
    pub fn netcore(version: RuntimeVersion) -> Self {
        Self {
            kind: PrerequisiteKind::NetCore,
            name: ".NET Runtime".to_string(),
            version,
            ..Self::default()
        }
    }

    /// Minimum registry `Release` value: explicit, or looked up from `version`.
    pub fn release_threshold(&self) -> Option<u32> {
        self.release
            .or_else(|| netfx::release_threshold(&self.version))
    }

    /// Version as shown to the user.
    ///
    /// .NET runtimes match on `major.minor`, so the patch is omitted.
    pub fn display_version(&self) -> String {
        match self.kind {
            PrerequisiteKind::NetCore => self.version.to_short_string(),
            PrerequisiteKind::NetFx | PrerequisiteKind::None => self.version.to_string(),
        }
    }

    /// Page to open when the prerequisite is missing.
    pub fn installer_url(&self, arch: HostArch) -> Option<String> {
        if let Some(url) = &self.installer_url {
            return Some(url.clone());
        }
        match self.kind {
            PrerequisiteKind::NetFx => Some(netfx_installer_url(&self.version)),
            PrerequisiteKind::NetCore => {
                Some(netcore_installer_url(&self.version, self.desktop, arch))
            }
            PrerequisiteKind::None => None,
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}
