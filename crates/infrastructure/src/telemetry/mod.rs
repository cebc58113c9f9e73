//! Logging and metrics setup
//!
//! A `tracing_subscriber` registry with an `EnvFilter` and a fmt layer.
//! `RUST_LOG`, when set, replaces the verbosity-derived filter.

mod recorder;

pub use recorder::{build_recorder, install_metrics};
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Log filter for a `-v` count; `debug` raises it to at least `debug`
#[must_use]
pub const fn log_filter(verbosity: u8, debug: bool) -> &'static str {
    match (verbosity, debug) {
        (0, false) => "warn",
        (1, false) => "info",
        (0..=2, _) => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbosity: u8, debug: bool) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(verbosity, debug)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
