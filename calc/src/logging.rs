//! Diagnostic tracing for the calc binary.
//!
//! Diagnostics go to stderr; command output on stdout is unaffected.
//! `RUST_LOG` always wins over `--verbose`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,calc=debug" } else { "warn" }
}

/// Initialize the tracing subscriber.
///
/// # Example
/// ```bash
/// RUST_LOG=calc::io=debug calc demo --config calc.toml
/// ```
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
