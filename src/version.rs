//! Build tool version parsing
//!
//! Extracts a `major.minor.patch` version from the free-form output of
//! `cmake --version`. Parsing is pure so every edge case can be tested without
//! spawning a process.

use regex::Regex;
use semver::Version;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Oldest `CMake` release the extension's build files support
pub const MINIMUM_CMAKE_VERSION: ToolVersion = ToolVersion::new(3, 10, 0);

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"version\s*([\d.]+)").expect("should build valid regex"));

/// Errors from version extraction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("no version number found")]
    Missing,

    #[error("malformed version number: {0}")]
    Malformed(String),
}

/// A build tool version, ordered by major, minor, then patch
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToolVersion(Version);

impl ToolVersion {
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(Version::new(major, minor, patch))
    }

    /// Whether this version satisfies `minimum`
    #[must_use]
    pub fn at_least(&self, minimum: &Self) -> bool {
        self >= minimum
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.0.major, self.0.minor, self.0.patch)
    }
}

/// Parse the version reported by `cmake --version`.
///
/// The first `version <digits and dots>` match wins. Missing components count
/// as zero (`3.10` is `3.10.0`), components past the patch number are ignored,
/// and any suffix after the numeric part (`-rc2`) is dropped.
pub fn parse_tool_version(output: &str) -> Result<ToolVersion, VersionParseError> {
    let raw = VERSION_PATTERN
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(VersionParseError::Missing)?;

    // A sentence-ending period is not part of the number
    let digits = raw.trim_end_matches('.');
    if digits.is_empty() {
        return Err(VersionParseError::Malformed(raw.to_string()));
    }

    let mut parts = [0_u64; 3];
    for (slot, component) in parts.iter_mut().zip(digits.split('.')) {
        *slot = component
            .parse()
            .map_err(|_| VersionParseError::Malformed(raw.to_string()))?;
    }
    let [major, minor, patch] = parts;

    Ok(ToolVersion::new(major, minor, patch))
}
