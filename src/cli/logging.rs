//! Tracing subscriber setup

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter for a verbosity level; `RUST_LOG` takes precedence
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "smoldb_site=warn",
        1 => "smoldb_site=debug",
        _ => "smoldb_site=trace",
    }
}

/// Install the global subscriber, writing to stderr
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // A second init (e.g. from tests) is harmless
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
