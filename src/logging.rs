//! Log output
//!
//! Logs go to stderr so JSON reports on stdout stay machine-readable.
//! `RUST_LOG` takes precedence over `--verbose`.

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "mvnfetch=debug" } else { "warn" }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}
