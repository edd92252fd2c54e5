//! Metadata command
//!
//! Display the package metadata published alongside the extension

use anyhow::{Context, Result};
use pnp_build::{Config, EnvSnapshot};
use std::path::Path;

pub(crate) fn run(config_path: Option<&Path>, json: bool) -> Result<()> {
    let file = Config::load_with_options(config_path, &EnvSnapshot::capture())
        .context("Failed to load configuration")?;
    let metadata = file.metadata();
    metadata.validate().context("Invalid package metadata")?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&metadata).context("Failed to serialize metadata")?;
        println!("{rendered}");
        return Ok(());
    }

    println!("name: {}", metadata.name);
    println!("version: {}", metadata.version);
    println!("python_requires: {}", metadata.python_requires);
    println!("zip_safe: {}", metadata.zip_safe);
    Ok(())
}
