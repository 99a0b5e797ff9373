//! Logging setup
//!
//! Diagnostics go to stderr; stdout is reserved for service messages.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Initialize the tracing subscriber once for the process.
///
/// `level` is the default; `RUST_LOG` directives are applied on top.
pub fn init_tracing(level: tracing::Level) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();

        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();

        if let Err(err) = result {
            eprintln!("tracing init skipped: {err}");
        }
    });
}
