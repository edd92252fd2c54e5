//! Build-ext command
//!
//! Configure, build and finalize every extension

use super::prepare;
use crate::BuildOptions;
use anyhow::{Context, Result};
use pnp_build::ExtensionBuilder;

pub(crate) fn run(options: &BuildOptions) -> Result<()> {
    let prepared = prepare(options)?;

    let mut builder = ExtensionBuilder::system(prepared.config);
    let report = builder.run(&prepared.extensions).with_context(|| {
        format!(
            "Building {} {} failed at stage {:?}",
            prepared.metadata.name,
            prepared.metadata.version,
            builder.stage()
        )
    })?;

    for ext in &report.extensions {
        println!(
            "Built {} into {} in {:.1}s",
            ext.name,
            ext.output_dir,
            ext.duration.as_secs_f64()
        );
    }
    if report.extensions.len() > 1 {
        println!(
            "Built {} extensions in {:.1}s",
            report.extensions.len(),
            report.total_duration().as_secs_f64()
        );
    }

    Ok(())
}
