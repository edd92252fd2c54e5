//! Extension Builder Orchestration
//!
//! Verifies the toolchain once, then builds every extension in order. The
//! first failure ends the whole build.

use super::cmake_extension::CMakeExtensionBuilder;
use super::types::{BuildReport, BuildStage, CMakeExtension};
use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::runner::{Invocation, ProcessRunner, SystemRunner};
use crate::version::{MINIMUM_CMAKE_VERSION, ToolVersion, parse_tool_version};
use std::io;
use tracing::{debug, info};

/// Extension builder coordinator
///
/// Owns the build configuration and the process runner, and tracks how far
/// the current build has progressed.
#[derive(Debug)]
pub struct ExtensionBuilder<R = SystemRunner> {
    config: BuildConfig,
    runner: R,
    stage: BuildStage,
}

impl ExtensionBuilder<SystemRunner> {
    /// Create a builder that runs the real toolchain
    #[must_use]
    pub const fn system(config: BuildConfig) -> Self {
        Self::new(config, SystemRunner)
    }
}

impl<R: ProcessRunner> ExtensionBuilder<R> {
    #[must_use]
    pub const fn new(config: BuildConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            stage: BuildStage::NotStarted,
        }
    }

    /// Last stage the build reached
    #[must_use]
    pub const fn stage(&self) -> BuildStage {
        self.stage
    }

    #[must_use]
    pub const fn config(&self) -> &BuildConfig {
        &self.config
    }

    #[must_use]
    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// Check that `CMake` runs and is recent enough.
    ///
    /// `extensions` only feeds the error message, so the user learns what
    /// needed the missing tool.
    pub fn verify_toolchain(
        &mut self,
        extensions: &[CMakeExtension],
    ) -> Result<ToolVersion, BuildError> {
        let query = Invocation::new(&self.config.cmake)
            .arg("--version")
            .capture();
        debug!("checking toolchain: {query}");

        let missing = |source: io::Error| BuildError::PrerequisiteMissing {
            extensions: extensions
                .iter()
                .map(CMakeExtension::name)
                .collect::<Vec<_>>()
                .join(", "),
            source,
        };

        let output = self.runner.run(&query).map_err(missing)?;
        if !output.success() {
            return Err(missing(io::Error::other(format!(
                "`{query}` exited with status {}",
                output
                    .code
                    .map_or_else(|| "unknown".to_string(), |c| c.to_string())
            ))));
        }

        let reported = format!("{}{}", output.stdout, output.stderr);
        let version =
            parse_tool_version(&reported).map_err(|_| BuildError::UnrecognizedVersion {
                output: reported.trim().to_string(),
            })?;

        if !version.at_least(&MINIMUM_CMAKE_VERSION) {
            return Err(BuildError::PrerequisiteTooOld {
                found: version,
                required: MINIMUM_CMAKE_VERSION,
            });
        }

        info!(%version, "found CMake");
        self.stage = BuildStage::ToolchainVerified;
        Ok(version)
    }

    /// Verify the toolchain, then configure, build and finalize each extension
    pub fn run(&mut self, extensions: &[CMakeExtension]) -> Result<BuildReport, BuildError> {
        self.stage = BuildStage::NotStarted;
        let cmake_version = self.verify_toolchain(extensions)?;

        let mut reports = Vec::with_capacity(extensions.len());
        for ext in extensions {
            // Each extension walks configure -> build -> finalize again
            self.stage = BuildStage::ToolchainVerified;
            let report = CMakeExtensionBuilder::new(&self.config).build(
                &mut self.runner,
                ext,
                &mut self.stage,
            )?;
            info!(
                extension = %report.name,
                elapsed = ?report.duration,
                "extension built"
            );
            reports.push(report);
        }

        Ok(BuildReport {
            cmake_version,
            extensions: reports,
        })
    }
}
