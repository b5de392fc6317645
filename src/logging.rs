//! Diagnostics setup for the `songlist` binary.
//!
//! Events go to stderr so they never mix with anything a caller pipes from
//! stdout. The filter comes from `SONGLIST_LOG` using the usual
//! `tracing_subscriber` directive syntax (`info`, `songlist=debug`, ...).

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

pub const ENV_LOG_FILTER: &str = "SONGLIST_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `SONGLIST_LOG`, falling back to `warn` when the
/// variable is unset or unparsable.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .ok();
}
