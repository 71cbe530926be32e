//! Logging setup for the Weft CLI, built on the `tracing` ecosystem.
//!
//! Verbosity is controlled by `--verbose` (debug level), `--quiet` (errors
//! only), or the `RUST_LOG` environment variable; the default is info-level
//! logging for the weft crates.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("weft_graph=debug,weft_cli=debug")
    } else if quiet {
        EnvFilter::new("weft_graph=error,weft_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("weft_graph=info,weft_cli=info"))
    };

    // Logs go to stderr; stdout is reserved for the issue report.
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
