//! Installer download pages for missing runtimes.

use super::version::RuntimeVersion;

const NETFX_THANK_YOU: &str = "https://dotnet.microsoft.com/download/dotnet-framework/thank-you";
const NETCORE_THANK_YOU: &str = "https://dotnet.microsoft.com/download/dotnet-core/thank-you";
const DOTNET_THANK_YOU: &str = "https://dotnet.microsoft.com/download/dotnet/thank-you";
const DOTNET_LANDING: &str = "https://dotnet.microsoft.com/download/dotnet";

/// Processor architecture as spelled in runtime installer names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostArch {
    X86,
    X64,
    Arm64,
    Unknown,
}

impl HostArch {
    /// Architecture of the running host.
    pub fn current() -> Self {
        Self::from_target_arch(std::env::consts::ARCH)
    }

    /// Map a Rust `target_arch` name.
    pub fn from_target_arch(arch: &str) -> Self {
        match arch {
            "x86" => HostArch::X86,
            "x86_64" => HostArch::X64,
            "aarch64" => HostArch::Arm64,
            _ => HostArch::Unknown,
        }
    }

    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            HostArch::X86 => Some("x86"),
            HostArch::X64 => Some("x64"),
            HostArch::Arm64 => Some("arm64"),
            HostArch::Unknown => None,
        }
    }
}

/// Installer page for a .NET Framework version.
///
/// 4.5 only ships a web installer; every later release has an offline one.
pub fn netfx_installer_url(version: &RuntimeVersion) -> String {
    if version.major == 4 && version.minor == 5 && version.patch == 0 {
        return format!("{}/net45-web-installer", NETFX_THANK_YOU);
    }

    let mut slug = format!("net{}{}", version.major, version.minor);
    if version.patch > 0 {
        slug.push_str(&version.patch.to_string());
    }
    format!("{}/{}-offline-installer", NETFX_THANK_YOU, slug)
}

/// Installer page for a .NET (Core) runtime.
///
/// Runtimes before 5.0 live under the `dotnet-core` path. Unknown
/// architectures get the generic download page.
pub fn netcore_installer_url(version: &RuntimeVersion, desktop: bool, arch: HostArch) -> String {
    let Some(arch) = arch.as_str() else {
        return DOTNET_LANDING.to_string();
    };

    let base = if version.major >= 5 {
        DOTNET_THANK_YOU
    } else {
        NETCORE_THANK_YOU
    };
    let flavor = if desktop { "desktop-" } else { "" };

    format!(
        "{}/runtime-{}{}-windows-{}-installer",
        base, flavor, version, arch
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn netfx_45_uses_web_installer() {
        assert_eq!(
            netfx_installer_url(&RuntimeVersion::new(4, 5, 0)),
            "https://dotnet.microsoft.com/download/dotnet-framework/thank-you/net45-web-installer"
        );
    }

    #[test]
    fn netfx_patch_appended_when_nonzero() {
        assert_eq!(
            netfx_installer_url(&RuntimeVersion::new(4, 7, 2)),
            "https://dotnet.microsoft.com/download/dotnet-framework/thank-you/net472-offline-installer"
        );
        assert_eq!(
            netfx_installer_url(&RuntimeVersion::new(4, 8, 0)),
            "https://dotnet.microsoft.com/download/dotnet-framework/thank-you/net48-offline-installer"
        );
    }

    #[test]
    fn netcore_pre_5_uses_dotnet_core_path() {
        assert_eq!(
            netcore_installer_url(&RuntimeVersion::new(3, 1, 5), true, HostArch::X64),
            "https://dotnet.microsoft.com/download/dotnet-core/thank-you/runtime-desktop-3.1.5-windows-x64-installer"
        );
    }

    #[test]
    fn netcore_5_and_later_uses_dotnet_path() {
        assert_eq!(
            netcore_installer_url(&RuntimeVersion::new(6, 0, 14), false, HostArch::Arm64),
            "https://dotnet.microsoft.com/download/dotnet/thank-you/runtime-6.0.14-windows-arm64-installer"
        );
    }

    #[test]
    fn netcore_unknown_arch_falls_back_to_landing_page() {
        assert_eq!(
            netcore_installer_url(&RuntimeVersion::new(6, 0, 14), false, HostArch::Unknown),
            "https://dotnet.microsoft.com/download/dotnet"
        );
    }

    #[test]
    fn host_arch_from_target_arch() {
        assert_eq!(HostArch::from_target_arch("x86_64"), HostArch::X64);
        assert_eq!(HostArch::from_target_arch("aarch64"), HostArch::Arm64);
        assert_eq!(HostArch::from_target_arch("x86"), HostArch::X86);
        assert_eq!(HostArch::from_target_arch("riscv64"), HostArch::Unknown);
        assert_eq!(HostArch::Unknown.as_str(), None);
    }
}
