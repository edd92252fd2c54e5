//! Shared test helpers and utilities

use pnp_build::{BuildConfig, FinalizeStep, Invocation, ProcessOutput, ProcessRunner};
use std::io;
use std::path::{Path, PathBuf};

/// Path to the compiled `pnp-build` binary
#[allow(dead_code)]
pub(crate) fn get_pnp_build_binary() -> &'static str {
    env!("CARGO_BIN_EXE_pnp-build")
}

/// Build configuration pointing at fixed tool paths and the given directories
#[allow(dead_code)]
pub(crate) fn test_config(build_lib: &Path, build_temp: &Path) -> BuildConfig {
    BuildConfig {
        cmake: PathBuf::from("cmake"),
        make: PathBuf::from("make"),
        python: PathBuf::from("/usr/bin/python3"),
        build_type: "Release".to_string(),
        version: "0.6.3".to_string(),
        build_lib: build_lib.to_path_buf(),
        build_temp: build_temp.to_path_buf(),
        finalize: FinalizeStep::Make,
        pass_build_type: false,
    }
}

/// A fake toolchain: reports `version_output` for `--version`, exits with
/// `build_exit` for `--build`, and succeeds otherwise. Every call is recorded
/// together with whether its working directory existed at the time.
#[allow(dead_code)]
#[derive(Debug)]
pub(crate) struct ScriptedRunner {
    pub(crate) version_output: Option<String>,
    pub(crate) build_exit: i32,
    pub(crate) calls: Vec<Invocation>,
    pub(crate) cwd_existed: Vec<bool>,
}

#[allow(dead_code)]
impl ScriptedRunner {
    pub(crate) fn new(version: &str) -> Self {
        Self {
            version_output: Some(format!("cmake version {version}\n")),
            build_exit: 0,
            calls: Vec::new(),
            cwd_existed: Vec::new(),
        }
    }

    /// A runner whose tool cannot be found
    pub(crate) fn missing() -> Self {
        Self {
            version_output: None,
            ..Self::new("0.0.0")
        }
    }

    pub(crate) fn failing_build(mut self, code: i32) -> Self {
        self.build_exit = code;
        self
    }

    /// First argument of each recorded call, or the program for bare calls
    pub(crate) fn call_heads(&self) -> Vec<String> {
        self.calls
            .iter()
            .map(|call| {
                call.args
                    .first()
                    .cloned()
                    .unwrap_or_else(|| call.program.display().to_string())
            })
            .collect()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&mut self, invocation: &Invocation) -> io::Result<ProcessOutput> {
        self.calls.push(invocation.clone());
        self.cwd_existed
            .push(invocation.cwd.as_ref().is_none_or(|dir| dir.is_dir()));

        match invocation.args.first().map(String::as_str) {
            Some("--version") => self.version_output.as_ref().map_or_else(
                || Err(io::Error::from(io::ErrorKind::NotFound)),
                |out| Ok(ProcessOutput::exited(0).with_stdout(out.clone())),
            ),
            Some("--build") => Ok(ProcessOutput::exited(self.build_exit)),
            _ => Ok(ProcessOutput::exited(0)),
        }
    }
}

/// Fake `cmake` and `make` shell scripts that append their arguments to a log
#[cfg(unix)]
#[allow(dead_code)]
#[derive(Debug)]
pub(crate) struct FakeToolchain {
    pub(crate) cmake: PathBuf,
    pub(crate) make: PathBuf,
    pub(crate) log: PathBuf,
}

#[cfg(unix)]
#[allow(dead_code)]
impl FakeToolchain {
    /// Write the scripts into `dir`
    pub(crate) fn install(dir: &Path, version: &str, build_exit: i32) -> Self {
        use std::fmt::Write;

        let log = dir.join("invocations.log");
        let cmake = dir.join("fake-cmake");
        let make = dir.join("fake-make");

        let mut cmake_script = String::from("#!/bin/sh\n");
        writeln!(cmake_script, "echo \"cmake $*\" >> '{}'", log.display()).unwrap();
        writeln!(cmake_script, "case \"$1\" in").unwrap();
        writeln!(cmake_script, "  --version) echo \"cmake version {version}\"; exit 0 ;;").unwrap();
        writeln!(cmake_script, "  --build) exit {build_exit} ;;").unwrap();
        writeln!(cmake_script, "esac").unwrap();
        cmake_script.push_str("exit 0\n");
        write_executable(&cmake, &cmake_script);

        let make_script = format!("#!/bin/sh\necho \"make $*\" >> '{}'\nexit 0\n", log.display());
        write_executable(&make, &make_script);

        Self { cmake, make, log }
    }

    /// Logged invocations, one per line, trailing whitespace removed
    pub(crate) fn invocations(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect()
    }
}

#[cfg(unix)]
#[allow(dead_code)]
fn write_executable(path: &Path, contents: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, contents).expect("Failed to write fake tool");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake tool executable");
}
