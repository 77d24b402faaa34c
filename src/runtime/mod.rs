//! Runtime prerequisite detection.
//!
//! # Modules
//!
//! - [`probe`] - The [`RuntimeProbe`] capability and the per-host factory
//! - [`netfx`] - .NET Framework registry `Release` check
//! - [`netcore`] - .NET runtime check via `dotnet --list-runtimes`
//! - [`installer`] - Installer download pages
//! - [`version`] - Runtime version numbers

pub mod installer;
pub mod netcore;
pub mod netfx;
pub mod probe;
pub mod version;

pub use installer::{netcore_installer_url, netfx_installer_url, HostArch};
pub use netcore::{NetCoreProbe, RuntimeList, NET_CORE_ID, WINDOWS_DESKTOP_ID};
pub use netfx::{release_threshold, NetFxReleaseProbe};
pub use probe::{probe_for, AlwaysSatisfied, MockProbe, RuntimeProbe};
pub use version::RuntimeVersion;
