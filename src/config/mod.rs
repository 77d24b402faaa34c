//! Launcher configuration.
//!
//! - Schema definitions and compiled-in defaults in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use netlaunch::config::load_launcher_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("netlaunch.yml"), "product: MyApp").unwrap();
//!
//! let config = load_launcher_config(temp.path()).unwrap();
//! assert_eq!(config.product, "MyApp");
//! assert_eq!(config.binary_dir, "Binary");
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{config_path, load_launcher_config, parse_config, CONFIG_FILE_NAME};
pub use merger::deep_merge;
pub use schema::{LauncherConfig, PrerequisiteConfig, PrerequisiteKind};
