//! Global tracing subscriber for the command-line tool

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install a formatted subscriber writing to stderr
///
/// `RUST_LOG` overrides `default_filter`. Returns false when a global
/// subscriber was already installed.
pub fn init_logging(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
