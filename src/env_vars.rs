//! Environment variable handling.
//!
//! These readers are only called from [`EnvSnapshot::capture`], once per
//! invocation. Everything downstream works from the snapshot.
//!
//! [`EnvSnapshot::capture`]: crate::config::EnvSnapshot::capture

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

// Unset and empty are treated the same
fn non_empty(var: &str) -> Option<String> {
    env::var(var).ok().filter(|s| !s.is_empty())
}

/// Get the `CMake` build type (`Release`, `Debug`, ...).
pub fn build_type() -> Option<String> {
    non_empty("BUILD_TYPE")
}

/// Get the `CMake` executable override.
pub fn cmake() -> Option<String> {
    non_empty("CMAKE")
}

/// Get the make command used by the finalize step.
pub fn make_command() -> Option<String> {
    non_empty("MAKE")
}

/// Get the interpreter the extension is built against.
pub fn python() -> Option<String> {
    non_empty("PYTHON")
}

/// Get the raw `PATH` used to locate executables.
pub fn path() -> Option<OsString> {
    env::var_os("PATH")
}

/// Get `XDG_CONFIG_HOME` for the user config file location.
pub fn xdg_config_home() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
