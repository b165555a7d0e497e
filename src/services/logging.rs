//! Tracing subscriber setup
//!
//! Logs go to stderr so they never mix with report output. `RUST_LOG` wins
//! when set; otherwise the level is `info`, or `debug` when verbose.

use tracing_subscriber::EnvFilter;

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "long_lines=debug,longlines=debug"
    } else {
        "info"
    }
}

/// Build the filter used by `init_tracing`
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Initialize the global tracing subscriber. Safe to call more than once;
/// later calls are ignored.
pub fn init_tracing(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
