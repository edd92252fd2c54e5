//! Plan command
//!
//! Print the configure, build and finalize commands for each extension

use super::prepare;
use crate::BuildOptions;
use anyhow::{Context, Result};
use pnp_build::plan_extension;

pub(crate) fn run(options: &BuildOptions) -> Result<()> {
    let prepared = prepare(options)?;

    for ext in &prepared.extensions {
        let plan = plan_extension(&prepared.config, ext)
            .with_context(|| format!("Failed to plan extension {}", ext.name()))?;

        println!("{} -> {}", plan.extension, plan.output_dir);
        println!("  cd {}", plan.build_temp.display());
        for (step, invocation) in &plan.steps {
            println!("  [{step}] {invocation}");
        }
    }

    Ok(())
}
