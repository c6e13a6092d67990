//! devlog
//!
//! Development-time debug lines: each one carries a tag, a timestamp, the
//! calling file, line and function, and is colored by level. Two formatters
//! prepare values for those lines: [`dump`] (indented JSON) and [`table`]
//! (nested values flattened into aligned columns).
//!
//! ```no_run
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Peer { addr: String, retries: u32 }
//!
//! let peer = Peer { addr: "10.0.0.2:7000".into(), retries: 3 };
//! devlog::info!("connected", peer.addr);
//! devlog::warnf!("retrying {} more times", peer.retries);
//! devlog::info!("peer state", devlog::table(&peer));
//! devlog::error!("token", devlog::redact("s3cr3t-t0ken"));
//! ```
//!
//! Output is a synchronous best-effort write; errors are never returned to
//! the caller. Library diagnostics go through `tracing`.

#![deny(rust_2018_idioms)]
#![warn(missing_docs)]

pub mod caller;
pub mod config;
pub mod error;
pub mod format;
pub mod global;
pub mod logger;
mod macros;
pub mod utils;

pub use caller::{CallSite, FixedLocation, Location, LocationProvider, SourceRoots};
pub use config::{ColorMode, DevlogConfig, Palette};
pub use error::{DevlogError, Result};
pub use format::{redact, Grid, Value};
pub use global::{dump, is_enabled, set_enabled, set_output, table, table_value};
pub use logger::{CaptureBuffer, Level, Logger, Sink, Spaced};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
