//! Common test utilities and helpers
//!
//! This module provides shared functionality used across integration tests:
//! - Binary path resolution (via `get_pnp_build_binary`)
//! - A scripted process runner for library tests (via `helpers`)
//! - Fake `cmake`/`make` executables for CLI tests (via `helpers`)

pub(crate) mod helpers;

// Re-export get_pnp_build_binary for convenient access
#[allow(unused_imports)]
pub(crate) use helpers::get_pnp_build_binary;
