//! Error types for the extension build
//!
//! Every error here is fatal for the build that raised it. Nothing is retried.

use crate::extensions::types::BuildStep;
use crate::version::ToolVersion;
use std::io;
use thiserror::Error;

/// Errors raised while verifying the toolchain or running build steps
#[derive(Debug, Error)]
pub enum BuildError {
    /// The build tool could not be located or invoked
    #[error("CMake must be installed to build the following extensions: {extensions}")]
    PrerequisiteMissing {
        extensions: String,
        #[source]
        source: io::Error,
    },

    /// The build tool is present but older than the supported minimum
    #[error("CMake >= {required} is required (found {found})")]
    PrerequisiteTooOld {
        found: ToolVersion,
        required: ToolVersion,
    },

    /// The version query produced no recognizable version number
    #[error("Could not determine CMake version from output: {output:?}")]
    UnrecognizedVersion { output: String },

    /// An external build step exited unsuccessfully
    #[error("{step} step failed for extension {extension} ({})", exit_description(.status))]
    StepFailed {
        extension: String,
        step: BuildStep,
        status: Option<i32>,
    },

    /// Filesystem or spawn failure around a build step
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl BuildError {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

#[allow(clippy::ref_option)]
fn exit_description(status: &Option<i32>) -> String {
    status.map_or_else(
        || "terminated by signal".to_string(),
        |code| format!("exit status {code}"),
    )
}
