//! Package metadata
//!
//! Published to the packaging system alongside the built extension. None of
//! these values change how the extension is built except `version`, which is
//! forwarded to `CMake` as `EXAMPLE_VERSION_INFO`.

use semver::VersionReq;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Distribution name of the package
pub const PACKAGE_NAME: &str = "pnp_python_binding";

/// Distribution version of the package
pub const PACKAGE_VERSION: &str = "0.6.3";

/// Minimum interpreter version the extension supports
pub const PYTHON_REQUIRES: &str = ">=3.6";

/// Errors from metadata validation
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("package {0} must not be empty")]
    EmptyField(&'static str),

    #[error("invalid interpreter requirement '{requirement}'")]
    InvalidRequirement {
        requirement: String,
        #[source]
        source: semver::Error,
    },
}

/// Metadata describing how the package is distributed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    pub python_requires: String,
    /// The extension is loaded from disk, so the package cannot run from a zip
    pub zip_safe: bool,
}

impl Default for PackageMetadata {
    fn default() -> Self {
        Self {
            name: PACKAGE_NAME.to_string(),
            version: PACKAGE_VERSION.to_string(),
            python_requires: PYTHON_REQUIRES.to_string(),
            zip_safe: false,
        }
    }
}

/// `[package]` table of the config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataOverrides {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub python_requires: Option<String>,
    #[serde(default)]
    pub zip_safe: Option<bool>,
}

impl PackageMetadata {
    /// Apply overrides from the config file
    #[must_use]
    pub fn with_overrides(mut self, overrides: &MetadataOverrides) -> Self {
        if let Some(name) = &overrides.name {
            self.name.clone_from(name);
        }
        if let Some(version) = &overrides.version {
            self.version.clone_from(version);
        }
        if let Some(requires) = &overrides.python_requires {
            self.python_requires.clone_from(requires);
        }
        if let Some(zip_safe) = overrides.zip_safe {
            self.zip_safe = zip_safe;
        }
        self
    }

    /// Check that the metadata can be published
    pub fn validate(&self) -> Result<(), MetadataError> {
        if self.name.trim().is_empty() {
            return Err(MetadataError::EmptyField("name"));
        }
        if self.version.trim().is_empty() {
            return Err(MetadataError::EmptyField("version"));
        }
        self.python_requirement()?;
        Ok(())
    }

    /// Parsed form of `python_requires`
    pub fn python_requirement(&self) -> Result<VersionReq, MetadataError> {
        VersionReq::parse(&self.python_requires).map_err(|source| {
            MetadataError::InvalidRequirement {
                requirement: self.python_requires.clone(),
                source,
            }
        })
    }
}
