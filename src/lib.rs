//! pnp-build internal library code
//!
//! Builds the `pnp_python_binding` native extension with `CMake` and places
//! the artifact where the packaging system expects it.

pub mod config;
pub mod env_vars;
pub mod error;
pub mod extensions;
pub mod logging;
pub mod metadata;
pub mod paths;
pub mod runner;
#[cfg(test)]
pub mod test_utils;
pub mod version;

// Re-export common types for convenience
pub use config::{BuildConfig, Config, ConfigError, EnvSnapshot, Overrides};
pub use error::BuildError;
pub use extensions::{
    BuildReport, BuildStage, BuildStep, CMakeExtension, ExtensionBuilder, ExtensionPlan,
    FinalizeStep, plan_extension,
};
pub use metadata::{MetadataError, PackageMetadata};
pub use paths::{resolve_output_dir, with_trailing_separator};
pub use runner::{Invocation, OutputMode, ProcessOutput, ProcessRunner, SystemRunner};
pub use version::{MINIMUM_CMAKE_VERSION, ToolVersion, parse_tool_version};
