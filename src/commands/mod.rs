//! Command implementations

pub(crate) mod build_ext;
pub(crate) mod check;
pub(crate) mod metadata;
pub(crate) mod plan;

use crate::BuildOptions;
use anyhow::{Context, Result};
use pnp_build::{BuildConfig, CMakeExtension, Config, EnvSnapshot, Overrides, PackageMetadata};

/// Everything a toolchain command needs, resolved from all config layers
#[derive(Debug)]
pub(crate) struct Prepared {
    pub(crate) config: BuildConfig,
    pub(crate) extensions: Vec<CMakeExtension>,
    pub(crate) metadata: PackageMetadata,
}

/// Read the environment once and merge it with the config file and flags
pub(crate) fn prepare(options: &BuildOptions) -> Result<Prepared> {
    let env = EnvSnapshot::capture();
    let file = Config::load_with_options(options.config.as_deref(), &env)
        .context("Failed to load configuration")?;

    let metadata = file.metadata();
    metadata.validate().context("Invalid package metadata")?;

    let overrides = Overrides {
        cmake: options.cmake.clone(),
        make: options.make.clone(),
        python: options.python.clone(),
        build_type: options.build_type.clone(),
        build_lib: options.build_lib.clone(),
        build_temp: options.build_temp.clone(),
        finalize: options.finalize,
    };
    let config = BuildConfig::resolve(&file, &env, &overrides, &metadata.version);

    let extensions = if options.name.is_some() || options.source_dir.is_some() {
        let name = options.name.as_deref().unwrap_or(&metadata.name);
        let source_dir = options
            .source_dir
            .clone()
            .unwrap_or_else(|| ".".into());
        vec![CMakeExtension::new(name, &source_dir).context("Failed to resolve source directory")?]
    } else {
        file.extensions(&metadata)
            .context("Failed to resolve extension source directories")?
    };

    Ok(Prepared {
        config,
        extensions,
        metadata,
    })
}
