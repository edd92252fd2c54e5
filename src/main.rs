//! pnp-build command-line interface
//!
//! Builds the `pnp_python_binding` native extension with `CMake`

use clap::{Args, Parser, Subcommand};
use pnp_build::FinalizeStep;
use std::path::PathBuf;
use std::process;

/// Print `err` and each underlying cause, plus the backtrace when asked
fn report_error(err: &anyhow::Error, show_backtrace: bool) {
    eprintln!("error: {err}");
    for cause in err.chain().skip(1) {
        eprintln!("caused by: {cause}");
    }

    let backtrace = err.backtrace();
    if show_backtrace && backtrace.status() == std::backtrace::BacktraceStatus::Captured {
        eprintln!("\n{backtrace}");
    }
}

#[derive(Parser)]
#[command(name = "pnp-build")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build the pnp_python_binding native extension", long_about = None)]
#[command(disable_version_flag = true)]
pub(crate) struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    _version: Option<bool>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Show a backtrace for errors (requires `RUST_BACKTRACE=1`)
    #[arg(long, global = true)]
    backtrace: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that touches the toolchain
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct BuildOptions {
    /// Config file (defaults to ./pnp-build.toml, then the user config dir)
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,

    /// Extension name (replaces the extensions listed in the config file)
    #[arg(long)]
    pub(crate) name: Option<String>,

    /// Directory containing the extension's CMakeLists.txt
    #[arg(long)]
    pub(crate) source_dir: Option<PathBuf>,

    /// Root directory for built extension modules
    #[arg(long)]
    pub(crate) build_lib: Option<PathBuf>,

    /// Scratch directory for CMake's intermediate files
    #[arg(long)]
    pub(crate) build_temp: Option<PathBuf>,

    /// CMake build type (overrides `BUILD_TYPE`)
    #[arg(long)]
    pub(crate) build_type: Option<String>,

    /// CMake executable
    #[arg(long)]
    pub(crate) cmake: Option<PathBuf>,

    /// Make executable for the finalize step
    #[arg(long)]
    pub(crate) make: Option<PathBuf>,

    /// Interpreter the extension is built against
    #[arg(long)]
    pub(crate) python: Option<PathBuf>,

    /// Step run after `cmake --build`: `make` or `install`
    #[arg(long)]
    pub(crate) finalize: Option<FinalizeStep>,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure, build and install the native extension
    #[command(visible_alias = "build_ext")]
    BuildExt {
        #[command(flatten)]
        options: BuildOptions,
    },

    /// Check that a supported CMake is installed
    Check {
        #[command(flatten)]
        options: BuildOptions,
    },

    /// Print the commands build-ext would run, without running them
    Plan {
        #[command(flatten)]
        options: BuildOptions,
    },

    /// Print package metadata
    Metadata {
        /// Config file with `[package]` overrides
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    pnp_build::logging::init(cli.debug);

    let result = match cli.command {
        Commands::BuildExt { options } => commands::build_ext::run(&options),
        Commands::Check { options } => commands::check::run(&options),
        Commands::Plan { options } => commands::plan::run(&options),
        Commands::Metadata { config, json } => commands::metadata::run(config.as_deref(), json),
    };

    if let Err(e) = result {
        report_error(&e, cli.backtrace);
        process::exit(1);
    }
}

mod commands;
