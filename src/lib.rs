//! netlaunch - Bootstrap launcher for .NET desktop applications.
//!
//! netlaunch sits next to an application's `Binary/` directory. It checks
//! that the main executable is present and that its runtime is installed,
//! then starts it with the launcher's own arguments and exits.
//!
//! # Modules
//!
//! - [`bootstrap`] - The launch sequence
//! - [`config`] - Launcher configuration and its defaults
//! - [`error`] - Error types and result aliases
//! - [`install`] - Install directory and target discovery
//! - [`launch`] - Argument forwarding and process start
//! - [`runtime`] - .NET Framework and .NET runtime detection
//! - [`ui`] - Error dialogs and installer hand-off
//!
//! # Example
//!
//! ```
//! use netlaunch::bootstrap::{Bootstrap, Outcome};
//! use netlaunch::config::LauncherConfig;
//! use netlaunch::launch::MockLauncher;
//! use netlaunch::runtime::MockProbe;
//! use netlaunch::ui::MockUI;
//! use tempfile::TempDir;
//!
//! let install_dir = TempDir::new().unwrap();
//! let config = LauncherConfig::default();
//! let probe = MockProbe::satisfied();
//! let mut launcher = MockLauncher::new();
//! let mut ui = MockUI::new();
//!
//! // No Binary/ directory, so the launcher reports the missing target
//! let outcome = Bootstrap::new(&config, &probe, &mut launcher, &mut ui)
//!     .run(install_dir.path(), &[])
//!     .unwrap();
//! assert_eq!(outcome, Outcome::TargetMissing);
//! assert!(ui.has_dialog("Unable to find PEBakery"));
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod install;
pub mod launch;
pub mod runtime;
pub mod ui;

pub use error::{LaunchError, Result};
