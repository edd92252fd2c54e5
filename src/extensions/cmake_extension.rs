//! `CMake` extension building
//!
//! Builds one extension in the shared scratch directory:
//! ```bash
//! mkdir -p build/temp
//! cd build/temp
//! cmake <source_dir> -DCMAKE_LIBRARY_OUTPUT_DIRECTORY=<extdir>/ ...
//! cmake --build .
//! make                # or: cmake --install .
//! ```
//!
//! Planning is separate from execution so the exact commands can be shown
//! without running anything.

use super::args::{build_args, configure_args};
use super::types::{BuildStage, BuildStep, CMakeExtension, ExtensionReport, FinalizeStep};
use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::paths::resolve_output_dir;
use crate::runner::{Invocation, ProcessRunner};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// The commands that build one extension, in execution order
#[derive(Debug, Clone)]
pub struct ExtensionPlan {
    pub extension: String,
    /// Artifact directory, always ending with a separator
    pub output_dir: String,
    pub build_temp: PathBuf,
    pub steps: Vec<(BuildStep, Invocation)>,
}

/// Compose the configure, build and finalize invocations for `ext`
pub fn plan_extension(config: &BuildConfig, ext: &CMakeExtension) -> std::io::Result<ExtensionPlan> {
    let output_dir = resolve_output_dir(&config.build_lib, ext.name())?;
    let build_temp = config.build_temp.clone();

    let configure = Invocation::new(&config.cmake)
        .arg(ext.source_dir().to_string_lossy())
        .args(configure_args(config, &output_dir))
        .current_dir(&build_temp);

    let build = Invocation::new(&config.cmake)
        .args(["--build", "."])
        .args(build_args(config))
        .current_dir(&build_temp);

    let finalize = match config.finalize {
        FinalizeStep::Make => Invocation::new(&config.make),
        FinalizeStep::Install => Invocation::new(&config.cmake).args(["--install", "."]),
    }
    .current_dir(&build_temp);

    Ok(ExtensionPlan {
        extension: ext.name().to_string(),
        output_dir,
        build_temp,
        steps: vec![
            (BuildStep::Configure, configure),
            (BuildStep::Build, build),
            (BuildStep::Finalize, finalize),
        ],
    })
}

/// Runs an [`ExtensionPlan`] step by step
#[derive(Debug)]
pub struct CMakeExtensionBuilder<'a> {
    config: &'a BuildConfig,
}

impl<'a> CMakeExtensionBuilder<'a> {
    #[must_use]
    pub const fn new(config: &'a BuildConfig) -> Self {
        Self { config }
    }

    /// Build `ext`, advancing `stage` as each step succeeds.
    ///
    /// The scratch directory is created before configure and left in place
    /// afterwards. The first failing step stops the build.
    pub fn build<R: ProcessRunner>(
        &self,
        runner: &mut R,
        ext: &CMakeExtension,
        stage: &mut BuildStage,
    ) -> Result<ExtensionReport, BuildError> {
        let start_time = Instant::now();

        let plan = plan_extension(self.config, ext).map_err(|e| {
            BuildError::io(
                format!("Failed to resolve output directory for {}", ext.name()),
                e,
            )
        })?;
        info!(extension = %plan.extension, output_dir = %plan.output_dir, "building extension");

        std::fs::create_dir_all(&plan.build_temp).map_err(|e| {
            BuildError::io(
                format!(
                    "Failed to create build directory {}",
                    plan.build_temp.display()
                ),
                e,
            )
        })?;
        debug!(build_temp = %plan.build_temp.display(), "build directory ready");

        for (step, invocation) in &plan.steps {
            info!(extension = %plan.extension, %step, "running {invocation}");

            let output = runner.run(invocation).map_err(|e| {
                BuildError::io(
                    format!(
                        "Failed to execute {} for {step} step",
                        invocation.program.display()
                    ),
                    e,
                )
            })?;

            if !output.success() {
                return Err(BuildError::StepFailed {
                    extension: plan.extension.clone(),
                    step: *step,
                    status: output.code,
                });
            }

            *stage = BuildStage::after(*step);
            debug!(extension = %plan.extension, stage = ?stage, "step complete");
        }

        Ok(ExtensionReport {
            name: plan.extension,
            output_dir: plan.output_dir,
            duration: start_time.elapsed(),
        })
    }
}
