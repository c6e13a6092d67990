//! Diagnostics for devlog itself
//!
//! The library reports swallowed write failures and configuration problems
//! through `tracing`. Nothing is shown unless a subscriber is installed;
//! the `devlog` binary installs one with [`DebugLogger::init`].

use tracing_subscriber::{fmt, EnvFilter};

/// Internal diagnostics subscriber
pub struct DebugLogger;

impl DebugLogger {
    /// Install a stderr `fmt` subscriber for the `devlog` target.
    ///
    /// Does nothing if a global subscriber is already set.
    pub fn init(debug: bool) {
        let filter = if debug {
            EnvFilter::new("devlog=debug")
        } else {
            EnvFilter::new("devlog=warn")
        };

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_line_number(debug)
            .try_init();
    }
}
