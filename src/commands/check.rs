//! Check command
//!
//! Verify that a supported CMake is available without building anything

use super::prepare;
use crate::BuildOptions;
use anyhow::Result;
use pnp_build::{ExtensionBuilder, MINIMUM_CMAKE_VERSION};

pub(crate) fn run(options: &BuildOptions) -> Result<()> {
    let prepared = prepare(options)?;
    let cmake = prepared.config.cmake.clone();

    let mut builder = ExtensionBuilder::system(prepared.config);
    let version = builder.verify_toolchain(&prepared.extensions)?;

    println!(
        "CMake {version} at {} (>= {MINIMUM_CMAKE_VERSION} required)",
        cmake.display()
    );
    Ok(())
}
