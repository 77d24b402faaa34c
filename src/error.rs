//! Error types for launcher operations.
//!
//! This module defines [`LaunchError`], the primary error type used throughout
//! the launcher, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `TargetNotFound` and `PrerequisiteMissing` are user-facing: the
//!   bootstrap shows a dialog for them and exits with code 1
//! - Registry and runtime-list failures never surface here; probes coerce
//!   them to "not installed"
//! - Spawn failures propagate to `main` unchanged

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The main application binary is not where the package layout puts it.
    #[error("Unable to find target executable: {path}")]
    TargetNotFound { path: PathBuf },

    /// The runtime the main application depends on is not installed.
    #[error("Missing prerequisite {runtime} {version}")]
    PrerequisiteMissing { runtime: String, version: String },

    /// A .NET runtime id has no installed versions at all.
    #[error(".NET [{id}] runtime is not installed.")]
    RuntimeNotInstalled { id: String },

    /// A .NET runtime id has no installed version with the requested major.
    #[error(".NET [{id}] runtime v[{major}.x] is not installed.")]
    RuntimeMajorNotInstalled { id: String, major: u16 },

    /// No version of the requested major is installed for every required runtime.
    #[error(".NET Runtime v[{major}.x] is not installed.")]
    NoMatchingRuntime { major: u16 },

    /// The host could not report the launcher's own location.
    #[error("Unable to determine install directory: {message}")]
    InstallDirUnavailable { message: String },

    /// The host refused to start the target process.
    #[error("Failed to launch {path}: {message}")]
    SpawnFailed { path: PathBuf, message: String },

    /// The configured prerequisite is older than anything the probes can detect.
    #[error("Unsupported prerequisite: {message}")]
    UnsupportedPrerequisite { message: String },

    /// Launcher config file exists but could not be parsed.
    #[error("Invalid launcher config at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LaunchError>;
