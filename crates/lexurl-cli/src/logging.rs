//! Tracing initialization for the `lexurl` binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding per-target log levels, e.g. `lexurl=debug`.
pub const LOG_ENV: &str = "LEXURL_LOG";

/// Install a stderr subscriber so stdout stays machine-readable.
///
/// `LEXURL_LOG` wins when set and valid; otherwise `verbose` picks between
/// `lexurl=debug` and `lexurl=warn`.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "lexurl=debug" } else { "lexurl=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}
