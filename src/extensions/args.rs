//! `CMake` argument composition
//!
//! The configure parameters are fixed apart from the values taken from the
//! build configuration. The extension's `CMakeLists.txt` relies on every one
//! of them.

use crate::config::BuildConfig;

/// `-D` definitions passed to the configure step, in order.
///
/// `output_dir` must already end with a path separator.
#[must_use]
pub fn configure_args(config: &BuildConfig, output_dir: &str) -> Vec<String> {
    vec![
        define("CMAKE_LIBRARY_OUTPUT_DIRECTORY", output_dir),
        define("CMAKE_ARCHIVE_OUTPUT_DIRECTORY", output_dir),
        define("CMAKE_LIBRARY_OUTPUT_DIRECTORY_RELEASE", output_dir),
        define("CMAKE_ARCHIVE_OUTPUT_DIRECTORY_RELEASE", output_dir),
        define("PYTHON_EXECUTABLE", &config.python.to_string_lossy()),
        define("EXAMPLE_VERSION_INFO", &config.version),
        define("CMAKE_BUILD_TYPE", &config.build_type),
        define("BUILD_SHARED_LIBS", "OFF"),
        define("CMAKE_POSITION_INDEPENDENT_CODE", "ON"),
        define("WITH_PYBIND11", "ON"),
    ]
}

/// Extra arguments for `cmake --build .`
///
/// Empty unless `pass_build_type` is set, since single-config generators
/// already take the build type from `CMAKE_BUILD_TYPE`.
#[must_use]
pub fn build_args(config: &BuildConfig) -> Vec<String> {
    if config.pass_build_type {
        vec!["--config".to_string(), config.build_type.clone()]
    } else {
        Vec::new()
    }
}

fn define(key: &str, value: &str) -> String {
    format!("-D{key}={value}")
}
