//! Runtime version numbers.
//!
//! Runtimes report versions as `major.minor[.patch]`, and previews carry a
//! label (`6.0.0-preview.3.21201.4`). Only the first number of a preview
//! label is kept; other prerelease suffixes are dropped.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const PREVIEW_MARK: &str = "-preview.";

/// A `major.minor.patch[-preview.N]` runtime version.
///
/// Ordering compares major, then minor, then patch. A preview sorts below
/// the release with the same numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuntimeVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
    pub preview: Option<u16>,
}

impl RuntimeVersion {
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
            preview: None,
        }
    }

    /// A preview build, e.g. `6.0.0-preview.3`.
    pub const fn with_preview(major: u16, minor: u16, patch: u16, preview: u16) -> Self {
        Self {
            major,
            minor,
            patch,
            preview: Some(preview),
        }
    }

    pub fn is_preview(&self) -> bool {
        self.preview.is_some()
    }

    /// Compare major and minor only.
    ///
    /// Runtimes of the same `major.minor` line are interchangeable for the
    /// application; the patch number only matters when building download URLs.
    pub fn eq_ignoring_patch(&self, other: &Self) -> bool {
        self.major == other.major && self.minor == other.minor
    }

    /// Format as `major.minor`.
    pub fn to_short_string(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl Ord for RuntimeVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.preview, other.preview) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(&b),
            })
    }
}

impl PartialOrd for RuntimeVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(preview) = self.preview {
            write!(f, "{}{}", PREVIEW_MARK, preview)?;
        }
        Ok(())
    }
}

impl FromStr for RuntimeVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid runtime version: {}", s);
        let trimmed = s.trim();

        let (numeric, label) = match trimmed.find(PREVIEW_MARK) {
            Some(pos) => (&trimmed[..pos], Some(&trimmed[pos + PREVIEW_MARK.len()..])),
            None => (trimmed.split('-').next().unwrap_or(""), None),
        };

        let parts: Vec<&str> = numeric.split('.').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(invalid());
        }

        let parse = |part: &str| -> Result<u16, String> {
            part.parse::<u16>().map_err(|_| invalid())
        };

        let major = parse(parts[0])?;
        let minor = parse(parts[1])?;
        let patch = match parts.get(2) {
            Some(p) => parse(p)?,
            None => 0,
        };

        // `3.21201.4`: only the first number is the preview index
        let preview = match label {
            Some(label) => Some(parse(label.split('.').next().unwrap_or(""))?),
            None => None,
        };

        Ok(Self {
            major,
            minor,
            patch,
            preview,
        })
    }
}

impl TryFrom<String> for RuntimeVersion {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuntimeVersion> for String {
    fn from(version: RuntimeVersion) -> Self {
        version.to_string()
    }
}
