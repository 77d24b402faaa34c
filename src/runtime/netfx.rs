//! .NET Framework detection through the registry `Release` value.
//!
//! .NET Framework 4.5 and later register themselves under a single key and
//! publish a monotonically increasing DWORD named `Release`. A target version
//! is installed iff that DWORD is at least the version's minimum release.

use super::probe::RuntimeProbe;
use super::version::RuntimeVersion;

/// Registry key (under `HKEY_LOCAL_MACHINE`) holding the install marker.
pub const NDP_KEY: &str = r"SOFTWARE\Microsoft\NET Framework Setup\NDP\v4\Full";

/// Name of the DWORD value under [`NDP_KEY`].
pub const RELEASE_VALUE: &str = "Release";

/// Minimum `Release` value for each .NET Framework version.
const RELEASE_TABLE: &[(RuntimeVersion, u32)] = &[
    (RuntimeVersion::new(4, 5, 0), 378389),
    (RuntimeVersion::new(4, 5, 1), 378675),
    (RuntimeVersion::new(4, 5, 2), 379893),
    (RuntimeVersion::new(4, 6, 0), 393295),
    (RuntimeVersion::new(4, 6, 1), 394254),
    (RuntimeVersion::new(4, 6, 2), 394802),
    (RuntimeVersion::new(4, 7, 0), 460798),
    (RuntimeVersion::new(4, 7, 1), 461308),
    (RuntimeVersion::new(4, 7, 2), 461808),
    (RuntimeVersion::new(4, 8, 0), 528040),
];

/// Oldest .NET Framework version that publishes a `Release` value.
pub const MIN_DETECTABLE: RuntimeVersion = RuntimeVersion::new(4, 5, 0);

/// Look up the minimum `Release` value for a .NET Framework version.
///
/// Only released versions are known. Returns `None` for anything else,
/// including versions before 4.5, which do not publish `Release`.
pub fn release_threshold(version: &RuntimeVersion) -> Option<u32> {
    RELEASE_TABLE
        .iter()
        .find(|(v, _)| v == version)
        .map(|(_, release)| *release)
}

/// Whether a read `Release` value satisfies a threshold.
///
/// An absent value means the framework is not installed.
pub fn meets_threshold(release: Option<u32>, threshold: u32) -> bool {
    release.is_some_and(|r| r >= threshold)
}

/// Read the installed `Release` value from the registry.
///
/// Any failure to open the key or read the value yields `None`.
#[cfg(windows)]
pub fn read_installed_release() -> Option<u32> {
    use windows::core::HSTRING;
    use windows::Win32::System::Registry::{
        RegGetValueW, HKEY_LOCAL_MACHINE, RRF_RT_REG_DWORD, RRF_SUBKEY_WOW6464KEY,
    };

    let mut value: u32 = 0;
    let mut size = std::mem::size_of::<u32>() as u32;

    // SAFETY: `value` is a live u32 and `size` holds its length in bytes.
    let status = unsafe {
        RegGetValueW(
            HKEY_LOCAL_MACHINE,
            &HSTRING::from(NDP_KEY),
            &HSTRING::from(RELEASE_VALUE),
            RRF_RT_REG_DWORD | RRF_SUBKEY_WOW6464KEY,
            None,
            Some(&mut value as *mut u32 as *mut std::ffi::c_void),
            Some(&mut size as *mut u32),
        )
    };

    if status.is_ok() {
        Some(value)
    } else {
        tracing::debug!("Registry value {}\\{} unavailable", NDP_KEY, RELEASE_VALUE);
        None
    }
}

/// There is no .NET Framework registry outside Windows.
#[cfg(not(windows))]
pub fn read_installed_release() -> Option<u32> {
    None
}

/// Probe that compares the registry `Release` value against a threshold.
#[derive(Debug, Clone)]
pub struct NetFxReleaseProbe {
    threshold: u32,
    reader: fn() -> Option<u32>,
}

impl NetFxReleaseProbe {
    /// Create a probe that reads the host registry.
    pub fn new(threshold: u32) -> Self {
        Self::with_reader(threshold, read_installed_release)
    }

    /// Create a probe with a custom release reader.
    ///
    /// This allows testing without a Windows registry.
    pub fn with_reader(threshold: u32, reader: fn() -> Option<u32>) -> Self {
        Self { threshold, reader }
    }
}

impl RuntimeProbe for NetFxReleaseProbe {
    fn is_satisfied(&self) -> bool {
        let release = (self.reader)();
        tracing::debug!(
            "NDP Release = {:?}, required >= {}",
            release,
            self.threshold
        );
        meets_threshold(release, self.threshold)
    }

    fn describe(&self) -> String {
        format!("registry {}\\{} >= {}", NDP_KEY, RELEASE_VALUE, self.threshold)
    }
}
