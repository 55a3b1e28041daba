//! Diagnostic logging to stderr.
//!
//! Chat output goes to stdout; diagnostics (failed requests, config
//! decisions) go through `tracing` to stderr so they never mix with
//! piped replies.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `botline=debug`.
pub const LOG_ENV: &str = "BOTLINE_LOG";

/// Filter used when `BOTLINE_LOG` is not set, by `-v` count.
pub fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,botline={level}")
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
