//! Runtime prerequisite probes.
//!
//! A [`RuntimeProbe`] answers one question: is the runtime the target
//! application needs installed on this host? Probes never fail; anything
//! that goes wrong while asking the host counts as "not installed".
//!
//! # Example
//!
//! ```
//! use netlaunch::config::PrerequisiteConfig;
//! use netlaunch::runtime::probe_for;
//!
//! let prereq = PrerequisiteConfig::none();
//! let probe = probe_for(&prereq).unwrap();
//! assert!(probe.is_satisfied());
//! ```

use std::cell::Cell;

use crate::config::{PrerequisiteConfig, PrerequisiteKind};
use crate::error::{LaunchError, Result};

use super::netcore::{self, NetCoreProbe};
use super::netfx::{self, NetFxReleaseProbe};

/// Capability to check a runtime prerequisite on the host.
pub trait RuntimeProbe {
    /// Whether the prerequisite is installed.
    fn is_satisfied(&self) -> bool;

    /// Short description for diagnostics.
    fn describe(&self) -> String;
}

/// Probe for hosts or products without a runtime prerequisite.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysSatisfied;

impl RuntimeProbe for AlwaysSatisfied {
    fn is_satisfied(&self) -> bool {
        true
    }

    fn describe(&self) -> String {
        "no prerequisite".to_string()
    }
}

/// Probe with a fixed answer that counts how often it was asked.
#[derive(Debug, Default)]
pub struct MockProbe {
    satisfied: bool,
    calls: Cell<usize>,
}

impl MockProbe {
    pub fn satisfied() -> Self {
        Self {
            satisfied: true,
            calls: Cell::new(0),
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    /// Number of `is_satisfied` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl RuntimeProbe for MockProbe {
    fn is_satisfied(&self) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.satisfied
    }

    fn describe(&self) -> String {
        format!("mock (satisfied: {})", self.satisfied)
    }
}

/// Build the probe for a configured prerequisite on the current host.
///
/// .NET Framework only exists on Windows; elsewhere its check is replaced
/// by [`AlwaysSatisfied`]. The desktop runtime is likewise Windows-only.
///
/// # Errors
///
/// Returns `UnsupportedPrerequisite` when the requested version is older
/// than anything the probe can detect, or is a .NET Framework version with
/// no known `Release` value and no explicit `release`.
pub fn probe_for(prereq: &PrerequisiteConfig) -> Result<Box<dyn RuntimeProbe>> {
    match prereq.kind {
        PrerequisiteKind::NetFx => {
            let threshold = prereq.release_threshold().ok_or_else(|| {
                LaunchError::UnsupportedPrerequisite {
                    message: format!(
                        "no known Release value for {} {}; use a released version from {} on or set `release`",
                        prereq.name,
                        prereq.version,
                        netfx::MIN_DETECTABLE.to_short_string()
                    ),
                }
            })?;

            if cfg!(windows) {
                Ok(Box::new(NetFxReleaseProbe::new(threshold)))
            } else {
                tracing::debug!("{} has no meaning on this host, skipping check", prereq.name);
                Ok(Box::new(AlwaysSatisfied))
            }
        }
        PrerequisiteKind::NetCore => {
            let minimum = if prereq.desktop {
                netcore::MIN_DETECTABLE_DESKTOP
            } else {
                netcore::MIN_DETECTABLE
            };
            if prereq.version < minimum {
                return Err(LaunchError::UnsupportedPrerequisite {
                    message: format!(
                        "the launcher can detect {} {} or later, not {}",
                        prereq.name,
                        minimum.to_short_string(),
                        prereq.version
                    ),
                });
            }

            let desktop = prereq.desktop && cfg!(windows);
            if prereq.desktop && !desktop {
                tracing::debug!("Desktop runtime is Windows-only, checking base runtime only");
            }
            Ok(Box::new(NetCoreProbe::new(prereq.version, desktop)))
        }
        PrerequisiteKind::None => Ok(Box::new(AlwaysSatisfied)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RuntimeVersion;

    #[test]
    fn always_satisfied_is_satisfied() {
        assert!(AlwaysSatisfied.is_satisfied());
        assert_eq!(AlwaysSatisfied.describe(), "no prerequisite");
    }

    #[test]
    fn none_kind_yields_always_satisfied() {
        let probe = probe_for(&PrerequisiteConfig::none()).unwrap();
        assert!(probe.is_satisfied());
    }

    #[test]
    fn netfx_below_4_5_is_unsupported() {
        let prereq = PrerequisiteConfig {
            version: RuntimeVersion::new(4, 0, 0),
            release: None,
            ..PrerequisiteConfig::default()
        };
        let err = probe_for(&prereq).err().unwrap();
        assert!(matches!(err, LaunchError::UnsupportedPrerequisite { .. }));
        assert!(err.to_string().contains("4.5"));
    }

    #[test]
    fn netfx_unknown_version_is_unsupported() {
        let prereq = PrerequisiteConfig {
            version: RuntimeVersion::new(4, 8, 1),
            ..PrerequisiteConfig::default()
        };
        let err = probe_for(&prereq).err().unwrap();
        assert!(matches!(err, LaunchError::UnsupportedPrerequisite { .. }));
    }

    #[test]
    fn netfx_explicit_release_allows_any_version() {
        let prereq = PrerequisiteConfig {
            version: RuntimeVersion::new(4, 0, 0),
            release: Some(1),
            ..PrerequisiteConfig::default()
        };
        assert!(probe_for(&prereq).is_ok());
    }

    #[cfg(not(windows))]
    #[test]
    fn netfx_is_skipped_off_windows() {
        let probe = probe_for(&PrerequisiteConfig::default()).unwrap();
        assert!(probe.is_satisfied());
        assert_eq!(probe.describe(), "no prerequisite");
    }

    #[cfg(windows)]
    #[test]
    fn netfx_uses_registry_on_windows() {
        let probe = probe_for(&PrerequisiteConfig::default()).unwrap();
        assert!(probe.describe().contains("461808"));
    }

    #[test]
    fn netcore_desktop_below_3_0_is_unsupported() {
        let prereq = PrerequisiteConfig {
            version: RuntimeVersion::new(2, 1, 0),
            desktop: true,
            ..PrerequisiteConfig::netcore(RuntimeVersion::new(2, 1, 0))
        };
        assert!(matches!(
            probe_for(&prereq),
            Err(LaunchError::UnsupportedPrerequisite { .. })
        ));
    }

    #[test]
    fn netcore_base_2_1_is_supported() {
        let prereq = PrerequisiteConfig::netcore(RuntimeVersion::new(2, 1, 0));
        let probe = probe_for(&prereq).unwrap();
        assert!(probe.describe().contains("Microsoft.NETCore.App 2.1"));
    }
}
