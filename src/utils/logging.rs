//! Diagnostic logging setup
//!
//! Pipeline stages emit `tracing` events; they go to stderr so the styled
//! report on stdout stays readable. `RUST_LOG` wins over the verbosity flag.

use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a default filter directive
pub fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
