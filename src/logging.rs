//! Logging setup
//!
//! Installs a `tracing` subscriber for the CLI. `RUST_LOG` wins when set;
//! otherwise `--debug` selects the `debug` level and the default is `warn`.

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is not set
#[must_use]
pub const fn default_directive(debug: bool) -> &'static str {
    if debug { "debug" } else { "warn" }
}

/// `RUST_LOG` when it parses, else [`default_directive`]
#[must_use]
pub fn env_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(debug)))
}

/// Initialize logging for the process. Later calls are ignored.
pub fn init(debug: bool) {
    // A subscriber may already be installed (tests, embedding); keep it
    if tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialized");
    }
}
