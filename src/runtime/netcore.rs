//! .NET runtime detection through `dotnet --list-runtimes`.
//!
//! The runtime installer does not leave a reliable registry marker, so the
//! host's `dotnet` muxer is asked directly. Its output looks like:
//!
//! ```text
//! Microsoft.AspNetCore.App 6.0.14 [C:\Program Files\dotnet\shared\Microsoft.AspNetCore.App]
//! Microsoft.NETCore.App 6.0.14 [C:\Program Files\dotnet\shared\Microsoft.NETCore.App]
//! Microsoft.WindowsDesktop.App 6.0.14 [C:\Program Files\dotnet\shared\Microsoft.WindowsDesktop.App]
//! ```

use regex::Regex;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

use crate::error::{LaunchError, Result};

use super::installer::HostArch;
use super::probe::RuntimeProbe;
use super::version::RuntimeVersion;

/// Runtime id of the base .NET runtime.
pub const NET_CORE_ID: &str = "Microsoft.NETCore.App";

/// Runtime id of the Windows Desktop runtime (WPF / WinForms).
pub const WINDOWS_DESKTOP_ID: &str = "Microsoft.WindowsDesktop.App";

/// Oldest base runtime `--list-runtimes` reports reliably.
pub const MIN_DETECTABLE: RuntimeVersion = RuntimeVersion::new(2, 1, 0);

/// The desktop runtime first shipped with 3.0.
pub const MIN_DETECTABLE_DESKTOP: RuntimeVersion = RuntimeVersion::new(3, 0, 0);

/// Regex for a single `--list-runtimes` line: `<id> <version> [<path>]`.
static RUNTIME_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<id>\S+)\s+(?P<version>\S+)(?:\s+\[(?P<path>.*)\])?\s*$")
        .expect("RUNTIME_LINE_REGEX must compile")
});

/// Installed runtimes keyed by runtime id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeList {
    runtimes: BTreeMap<String, Vec<RuntimeVersion>>,
}

impl RuntimeList {
    /// Parse the stdout of `dotnet --list-runtimes`.
    ///
    /// Lines that do not look like `<id> <version> [<path>]` are skipped.
    pub fn parse(output: &str) -> Self {
        let mut runtimes: BTreeMap<String, Vec<RuntimeVersion>> = BTreeMap::new();

        for line in output.lines() {
            let Some((id, version)) = parse_runtime_line(line) else {
                continue;
            };
            runtimes.entry(id).or_default().push(version);
        }

        Self { runtimes }
    }

    /// Run `<dotnet> --list-runtimes` and parse its output.
    ///
    /// If the program cannot be started or exits unsuccessfully, the list
    /// is empty: no runtime is considered installed.
    pub fn query(dotnet: &OsString) -> Self {
        let output = Command::new(dotnet)
            .arg("--list-runtimes")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match output {
            Ok(out) if out.status.success() => Self::parse(&String::from_utf8_lossy(&out.stdout)),
            Ok(out) => {
                tracing::debug!("{:?} --list-runtimes exited with {}", dotnet, out.status);
                Self::default()
            }
            Err(e) => {
                tracing::debug!("Failed to run {:?}: {}", dotnet, e);
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.runtimes.is_empty()
    }

    /// All installed versions of a runtime, in the order they were listed.
    pub fn versions(&self, id: &str) -> &[RuntimeVersion] {
        self.runtimes.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a runtime has a version equal to `target` ignoring patch.
    pub fn has_compatible(&self, id: &str, target: &RuntimeVersion) -> bool {
        self.versions(id).iter().any(|v| v.eq_ignoring_patch(target))
    }

    /// Installed versions of a runtime with the given major, sorted ascending
    /// and deduplicated.
    pub fn versions_with_major(&self, id: &str, major: u16) -> Vec<RuntimeVersion> {
        let mut versions: Vec<RuntimeVersion> = self
            .versions(id)
            .iter()
            .filter(|v| v.major == major)
            .copied()
            .collect();
        versions.sort();
        versions.dedup();
        versions
    }

    /// Latest installed version with the given major.
    ///
    /// With `desktop`, only versions installed for both the base and the
    /// Windows Desktop runtime count.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeNotInstalled` or `RuntimeMajorNotInstalled` naming
    /// the runtime that is missing, or `NoMatchingRuntime` when the base
    /// and desktop runtimes share no version.
    pub fn latest_with_major(&self, major: u16, desktop: bool) -> Result<RuntimeVersion> {
        let mut versions = self.installed_major(NET_CORE_ID, major)?;

        if desktop {
            let desktop_versions = self.installed_major(WINDOWS_DESKTOP_ID, major)?;
            versions.retain(|v| desktop_versions.contains(v));
        }

        versions
            .last()
            .copied()
            .ok_or(LaunchError::NoMatchingRuntime { major })
    }

    fn installed_major(&self, id: &str, major: u16) -> Result<Vec<RuntimeVersion>> {
        if !self.runtimes.contains_key(id) {
            return Err(LaunchError::RuntimeNotInstalled { id: id.to_string() });
        }

        let versions = self.versions_with_major(id, major);
        if versions.is_empty() {
            return Err(LaunchError::RuntimeMajorNotInstalled {
                id: id.to_string(),
                major,
            });
        }
        Ok(versions)
    }
}

/// Parse one `--list-runtimes` line into `(id, version)`.
pub fn parse_runtime_line(line: &str) -> Option<(String, RuntimeVersion)> {
    let caps = RUNTIME_LINE_REGEX.captures(line.trim())?;
    let version = caps["version"].parse().ok()?;
    Some((caps["id"].to_string(), version))
}

/// Registry key (under `HKEY_LOCAL_MACHINE`) with one subkey per installed
/// runtime architecture.
pub const INSTALLED_VERSIONS_KEY: &str = r"SOFTWARE\dotnet\Setup\InstalledVersions";

/// Whether a .NET runtime for the host architecture is registered.
///
/// Checks that `InstalledVersions\{arch}` opens in the 64-bit registry view.
/// A `dotnet` on PATH may belong to another architecture, so its runtime
/// list is only trusted when this key exists.
#[cfg(windows)]
pub fn host_arch_registered() -> bool {
    use windows::core::HSTRING;
    use windows::Win32::System::Registry::{
        RegCloseKey, RegOpenKeyExW, HKEY, HKEY_LOCAL_MACHINE, KEY_READ, KEY_WOW64_64KEY,
    };

    let Some(arch) = HostArch::current().as_str() else {
        return false;
    };
    let subkey = format!(r"{}\{}", INSTALLED_VERSIONS_KEY, arch);

    let mut key = HKEY::default();
    // SAFETY: `key` is a live HKEY slot and is closed below on success.
    let status = unsafe {
        RegOpenKeyExW(
            HKEY_LOCAL_MACHINE,
            &HSTRING::from(subkey.as_str()),
            None,
            KEY_READ | KEY_WOW64_64KEY,
            &mut key,
        )
    };

    if status.is_err() {
        tracing::debug!("Registry key {} unavailable", subkey);
        return false;
    }

    // SAFETY: `key` was opened above.
    unsafe {
        let _ = RegCloseKey(key);
    }
    true
}

/// There is no runtime registration outside Windows; the runtime list decides.
#[cfg(not(windows))]
pub fn host_arch_registered() -> bool {
    true
}

/// Probe that checks `dotnet --list-runtimes` for a compatible runtime.
#[derive(Debug, Clone)]
pub struct NetCoreProbe {
    target: RuntimeVersion,
    desktop: bool,
    dotnet: OsString,
    registered: fn() -> bool,
}

impl NetCoreProbe {
    /// Create a probe that runs `dotnet` from PATH.
    pub fn new(target: RuntimeVersion, desktop: bool) -> Self {
        Self::with_program(target, desktop, "dotnet")
    }

    /// Create a probe that runs a specific `dotnet` executable.
    pub fn with_program(
        target: RuntimeVersion,
        desktop: bool,
        dotnet: impl Into<OsString>,
    ) -> Self {
        Self {
            target,
            desktop,
            dotnet: dotnet.into(),
            registered: host_arch_registered,
        }
    }

    /// Replace the host architecture registration check.
    ///
    /// This allows testing without a Windows registry.
    pub fn with_registration(mut self, registered: fn() -> bool) -> Self {
        self.registered = registered;
        self
    }

    /// Evaluate a runtime list without running anything.
    pub fn check(&self, runtimes: &RuntimeList) -> bool {
        let mut installed = runtimes.has_compatible(NET_CORE_ID, &self.target);
        if self.desktop {
            installed &= runtimes.has_compatible(WINDOWS_DESKTOP_ID, &self.target);
        }
        installed
    }
}

impl RuntimeProbe for NetCoreProbe {
    fn is_satisfied(&self) -> bool {
        if !(self.registered)() {
            tracing::debug!("No .NET runtime registered for {:?}", HostArch::current());
            return false;
        }

        let runtimes = RuntimeList::query(&self.dotnet);
        tracing::debug!("Installed runtimes: {:?}", runtimes);
        self.check(&runtimes)
    }

    fn describe(&self) -> String {
        let mut desc = format!("{} {}", NET_CORE_ID, self.target.to_short_string());
        if self.desktop {
            desc.push_str(&format!(
                " + {} {}",
                WINDOWS_DESKTOP_ID,
                self.target.to_short_string()
            ));
        }
        desc
    }
}
