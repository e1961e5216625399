//! Log output for the registry binaries.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to `default_directive` (e.g. `"info"`).
///
/// Calling it more than once is harmless; later calls keep the first
/// subscriber.
pub fn init(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
