//! Configuration management
//!
//! Settings come from four layers, lowest priority first: built-in defaults,
//! the TOML config file, the environment, and command-line flags. The result
//! is a [`BuildConfig`] that the orchestrator receives whole; nothing below
//! this module reads the process environment.

use crate::env_vars;
use crate::extensions::types::{CMakeExtension, FinalizeStep};
use crate::metadata::{MetadataOverrides, PackageMetadata};
use crate::runner::find_executable;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Project-local config file name
pub const CONFIG_FILE_NAME: &str = "pnp-build.toml";

/// Build type used when nothing overrides it
pub const DEFAULT_BUILD_TYPE: &str = "Release";

/// Default root for built extension modules
pub const DEFAULT_BUILD_LIB: &str = "build/lib";

/// Default scratch directory for `CMake`
pub const DEFAULT_BUILD_TEMP: &str = "build/temp";

/// Errors from loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}

/// Contents of `pnp-build.toml`
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// `CMake` executable
    #[serde(default)]
    pub cmake: Option<String>,

    /// Make executable for the finalize step
    #[serde(default)]
    pub make: Option<String>,

    /// Interpreter the extension is built against
    #[serde(default)]
    pub python: Option<String>,

    #[serde(default)]
    pub build_type: Option<String>,

    #[serde(default)]
    pub build_lib: Option<String>,

    #[serde(default)]
    pub build_temp: Option<String>,

    #[serde(default)]
    pub finalize: Option<FinalizeStep>,

    /// Pass `--config <build type>` to `cmake --build`
    #[serde(default)]
    pub pass_build_type: Option<bool>,

    #[serde(default)]
    pub package: MetadataOverrides,

    #[serde(default, rename = "extension")]
    pub extensions: Vec<ExtensionEntry>,
}

/// One `[[extension]]` entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtensionEntry {
    pub name: String,
    #[serde(default)]
    pub source_dir: Option<String>,
}

impl Config {
    /// Load configuration.
    /// Priority: `custom_path` -> `./pnp-build.toml` -> user config dir -> defaults.
    ///
    /// An explicit path must exist. The implicit locations are skipped when
    /// absent, but a file that exists and fails to parse is an error.
    pub fn load_with_options(
        custom_path: Option<&Path>,
        env: &EnvSnapshot,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = custom_path {
            return Self::load_from(path);
        }

        let local = Path::new(CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::load_from(local);
        }

        if let Some(config_dir) = Self::user_config_dir(env) {
            let config_path = config_dir.join("config.toml");
            if config_path.is_file() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Parse a config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    fn user_config_dir(env: &EnvSnapshot) -> Option<PathBuf> {
        if let Some(xdg_config) = &env.xdg_config_home {
            return Some(xdg_config.join("pnp-build"));
        }

        dirs::home_dir().map(|home| home.join(".config").join("pnp-build"))
    }

    /// Package metadata with this file's `[package]` overrides applied
    #[must_use]
    pub fn metadata(&self) -> PackageMetadata {
        PackageMetadata::default().with_overrides(&self.package)
    }

    /// Extensions to build. Without `[[extension]]` entries the package
    /// builds a single extension named after itself from the current directory.
    pub fn extensions(&self, metadata: &PackageMetadata) -> io::Result<Vec<CMakeExtension>> {
        if self.extensions.is_empty() {
            return Ok(vec![CMakeExtension::new(&metadata.name, ".")?]);
        }

        self.extensions
            .iter()
            .map(|entry| CMakeExtension::new(&entry.name, entry.source_dir.as_deref().unwrap_or(".")))
            .collect()
    }
}

/// Environment variables relevant to the build, read once at startup
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    pub build_type: Option<String>,
    pub cmake: Option<String>,
    pub make: Option<String>,
    pub python: Option<String>,
    pub path: Option<OsString>,
    pub xdg_config_home: Option<PathBuf>,
}

impl EnvSnapshot {
    /// Read the process environment
    #[must_use]
    pub fn capture() -> Self {
        Self {
            build_type: env_vars::build_type(),
            cmake: env_vars::cmake(),
            make: env_vars::make_command(),
            python: env_vars::python(),
            path: env_vars::path(),
            xdg_config_home: env_vars::xdg_config_home(),
        }
    }
}

/// Command-line overrides; `None` defers to lower layers
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub cmake: Option<PathBuf>,
    pub make: Option<PathBuf>,
    pub python: Option<PathBuf>,
    pub build_type: Option<String>,
    pub build_lib: Option<PathBuf>,
    pub build_temp: Option<PathBuf>,
    pub finalize: Option<FinalizeStep>,
}

/// Everything one build needs, fully resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub cmake: PathBuf,
    pub make: PathBuf,
    pub python: PathBuf,
    pub build_type: String,
    /// Package version forwarded as `EXAMPLE_VERSION_INFO`
    pub version: String,
    pub build_lib: PathBuf,
    pub build_temp: PathBuf,
    pub finalize: FinalizeStep,
    pub pass_build_type: bool,
}

impl BuildConfig {
    /// Merge all layers into a build configuration
    #[must_use]
    pub fn resolve(file: &Config, env: &EnvSnapshot, overrides: &Overrides, version: &str) -> Self {
        let pick = |cli: Option<&PathBuf>, env: Option<&String>, file: Option<&String>| {
            cli.cloned()
                .or_else(|| env.map(PathBuf::from))
                .or_else(|| file.map(PathBuf::from))
        };

        let cmake = pick(overrides.cmake.as_ref(), env.cmake.as_ref(), file.cmake.as_ref())
            .map_or_else(|| PathBuf::from("cmake"), anchor_tool_path);
        let make = pick(overrides.make.as_ref(), env.make.as_ref(), file.make.as_ref())
            .map_or_else(|| PathBuf::from("make"), anchor_tool_path);
        let python = pick(overrides.python.as_ref(), env.python.as_ref(), file.python.as_ref())
            .map_or_else(|| default_python(env.path.as_deref()), anchor_tool_path);

        let build_type = overrides
            .build_type
            .clone()
            .or_else(|| env.build_type.clone())
            .or_else(|| file.build_type.clone())
            .unwrap_or_else(|| DEFAULT_BUILD_TYPE.to_string());

        let build_lib = overrides
            .build_lib
            .clone()
            .or_else(|| file.build_lib.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_LIB));
        let build_temp = overrides
            .build_temp
            .clone()
            .or_else(|| file.build_temp.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_TEMP));

        Self {
            cmake,
            make,
            python,
            build_type,
            version: version.to_string(),
            build_lib,
            build_temp,
            finalize: overrides.finalize.or(file.finalize).unwrap_or_default(),
            pass_build_type: file.pass_build_type.unwrap_or(false),
        }
    }
}

/// Pin a relative tool path to the current directory.
///
/// Build steps run inside the scratch directory, so `./tools/cmake` must not
/// be resolved against it. Bare names stay as they are for the `PATH` lookup.
fn anchor_tool_path(path: PathBuf) -> PathBuf {
    if path.is_absolute() || path.components().count() < 2 {
        return path;
    }
    std::path::absolute(&path).unwrap_or(path)
}

/// First `python3` or `python` on `PATH`, else a bare `python3`
fn default_python(path_var: Option<&std::ffi::OsStr>) -> PathBuf {
    find_executable("python3", path_var)
        .or_else(|| find_executable("python", path_var))
        .unwrap_or_else(|| PathBuf::from("python3"))
}
