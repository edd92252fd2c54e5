//! Shared test utilities for pnp-build tests
//!
//! This module provides a scripted process runner and configuration fixtures
//! so the orchestrator can be exercised without a real toolchain.

use crate::runner::{Invocation, ProcessOutput, ProcessRunner};
use std::io;

/// Canned reply for a matching invocation
#[derive(Debug, Clone)]
pub enum Response {
    Exit(ProcessOutput),
    /// Behave as if the program does not exist
    NotFound,
}

impl From<ProcessOutput> for Response {
    fn from(output: ProcessOutput) -> Self {
        Self::Exit(output)
    }
}

/// A [`ProcessRunner`] that records every invocation and answers from a script.
///
/// Unscripted version queries report `cmake version 3.22.1`; everything else
/// exits 0.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub calls: Vec<Invocation>,
    /// Whether each call's working directory existed when it ran
    pub cwd_existed: Vec<bool>,
    script: Vec<(String, Response)>,
}

impl RecordingRunner {
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Reply with `response` when the first argument (or, for argument-less
    /// calls, the program's file name) equals `key`
    pub fn respond_to_first_arg(mut self, key: &str, response: impl Into<Response>) -> Self {
        self.script.push((key.to_string(), response.into()));
        self
    }

    fn lookup(&self, invocation: &Invocation) -> Option<&Response> {
        let key = invocation.args.first().cloned().or_else(|| {
            invocation
                .program
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })?;

        self.script
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, response)| response)
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&mut self, invocation: &Invocation) -> io::Result<ProcessOutput> {
        self.calls.push(invocation.clone());
        self.cwd_existed
            .push(invocation.cwd.as_ref().is_none_or(|dir| dir.is_dir()));

        match self.lookup(invocation) {
            Some(Response::Exit(output)) => Ok(output.clone()),
            Some(Response::NotFound) => Err(io::Error::from(io::ErrorKind::NotFound)),
            None if invocation.args.first().is_some_and(|a| a == "--version") => {
                Ok(ProcessOutput::exited(0).with_stdout("cmake version 3.22.1\n"))
            }
            None => Ok(ProcessOutput::exited(0)),
        }
    }
}

pub mod fixtures {
    use crate::config::BuildConfig;
    use crate::extensions::types::FinalizeStep;
    use std::path::{Path, PathBuf};

    /// Build configuration with fixed tool paths and the given directories
    pub fn build_config(build_lib: &Path, build_temp: &Path) -> BuildConfig {
        BuildConfig {
            cmake: PathBuf::from("/usr/bin/cmake"),
            make: PathBuf::from("/usr/bin/make"),
            python: PathBuf::from("/usr/bin/python3"),
            build_type: "Release".to_string(),
            version: "0.6.3".to_string(),
            build_lib: build_lib.to_path_buf(),
            build_temp: build_temp.to_path_buf(),
            finalize: FinalizeStep::Make,
            pass_build_type: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_and_defaults_to_success() {
        let mut runner = RecordingRunner::succeeding();
        let output = runner.run(&Invocation::new("make")).unwrap();

        assert!(output.success());
        assert_eq!(runner.calls.len(), 1);
        assert_eq!(runner.cwd_existed, vec![true]);
    }

    #[test]
    fn scripted_program_name_matches_argumentless_calls() {
        let mut runner =
            RecordingRunner::succeeding().respond_to_first_arg("make", ProcessOutput::exited(2));

        let output = runner.run(&Invocation::new("/usr/bin/make")).unwrap();
        assert_eq!(output.code, Some(2));
    }

    #[test]
    fn not_found_response_is_spawn_error() {
        let mut runner =
            RecordingRunner::succeeding().respond_to_first_arg("--version", Response::NotFound);

        let err = runner
            .run(&Invocation::new("cmake").arg("--version"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
