//! Extension build type definitions
//!
//! The package ships one native extension built by `CMake`. This module
//! defines the extension descriptor, the steps run for it, and the stages a
//! build passes through.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::version::ToolVersion;

/// A named native artifact and the directory holding its `CMakeLists.txt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CMakeExtension {
    name: String,
    source_dir: PathBuf,
}

impl CMakeExtension {
    /// Describe an extension. The source directory is made absolute against
    /// the current directory; an empty path means the current directory.
    pub fn new(name: impl Into<String>, source_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let source_dir = source_dir.as_ref();
        let source_dir = if source_dir.as_os_str().is_empty() {
            std::env::current_dir()?
        } else {
            std::path::absolute(source_dir)?
        };

        Ok(Self {
            name: name.into(),
            source_dir,
        })
    }

    /// Dotted module name, e.g. `pnp_python_binding` or `pkg.native`
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }
}

/// The external invocations run for every extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    /// Generate build files from the source directory
    Configure,
    /// Compile
    Build,
    /// Final install/link pass
    Finalize,
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Configure => "configure",
            Self::Build => "build",
            Self::Finalize => "finalize",
        })
    }
}

/// Progress of a build. Each stage is reached only when the previous one
/// succeeded; a failure leaves the build at its last reached stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BuildStage {
    NotStarted,
    ToolchainVerified,
    Configured,
    Built,
    Installed,
}

impl BuildStage {
    /// Stage reached once `step` completes
    #[must_use]
    pub const fn after(step: BuildStep) -> Self {
        match step {
            BuildStep::Configure => Self::Configured,
            BuildStep::Build => Self::Built,
            BuildStep::Finalize => Self::Installed,
        }
    }
}

/// What runs after `cmake --build`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinalizeStep {
    /// Run `make` in the build directory
    #[default]
    Make,
    /// Run `cmake --install .`
    Install,
}

impl std::str::FromStr for FinalizeStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "make" => Ok(Self::Make),
            "install" => Ok(Self::Install),
            other => Err(format!(
                "unknown finalize step '{other}' (expected 'make' or 'install')"
            )),
        }
    }
}

/// Outcome of one extension's configure/build/finalize run
#[derive(Debug, Clone)]
pub struct ExtensionReport {
    pub name: String,
    /// Directory the artifact was written to (ends with a separator)
    pub output_dir: String,
    pub duration: Duration,
}

/// Outcome of a full build
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub cmake_version: ToolVersion,
    pub extensions: Vec<ExtensionReport>,
}

impl BuildReport {
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.extensions.iter().map(|e| e.duration).sum()
    }
}
