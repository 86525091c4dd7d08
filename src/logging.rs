use std::io;
use tracing_subscriber::EnvFilter;

/// Sends diagnostics to stderr so stdout only ever carries records.
/// `RUST_LOG` picks the level; warnings and errors are shown by default.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
