//! Tracing subscriber setup
//!
//! Logs go to stderr so they never mix with converted output on stdout.
//! `RUST_LOG` takes precedence over the verbosity flag.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter for a `-v` count (0 = warn, 1 = info, 2 = debug, 3+ = trace)
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "morse_desk=warn,warn",
        1 => "morse_desk=info,warn",
        2 => "morse_desk=debug,warn",
        _ => "morse_desk=trace,info",
    }
}

/// Installs the global subscriber
///
/// Uses `try_init`, so calling it again (e.g. across tests) is harmless.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .try_init();
}
