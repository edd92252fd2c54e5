//! Native extension building
//!
//! Handles compilation of the package's native extension with `CMake`: the
//! toolchain is checked once, then each extension is configured, built and
//! finalized in a shared scratch directory.

pub mod args;
pub mod builder;
pub mod cmake_extension;
pub mod types;

pub use builder::ExtensionBuilder;
pub use cmake_extension::{CMakeExtensionBuilder, ExtensionPlan, plan_extension};
pub use types::{
    BuildReport, BuildStage, BuildStep, CMakeExtension, ExtensionReport, FinalizeStep,
};
