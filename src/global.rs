//! Package-level default logger
//!
//! The macros and free functions use a process-wide [`Logger`] created lazily
//! from [`DevlogConfig::from_env`](crate::DevlogConfig::from_env). Reads are
//! lock-free. Reconfiguring swaps in a new logger; two threads reconfiguring at
//! once race and the last swap wins, so do it during startup or test setup.

use crate::caller::CallSite;
use crate::format::Value;
use crate::logger::{Level, Logger, Sink};
use arc_swap::ArcSwap;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, OnceLock};

fn slot() -> &'static ArcSwap<Logger> {
    static DEFAULT: OnceLock<ArcSwap<Logger>> = OnceLock::new();
    DEFAULT.get_or_init(|| ArcSwap::from_pointee(Logger::from_env()))
}

/// Snapshot of the current default logger
pub fn logger() -> Arc<Logger> {
    slot().load_full()
}

/// Replace the default logger
pub fn set_logger(logger: Logger) {
    slot().store(Arc::new(logger));
}

/// Modify a copy of the default logger and install it
pub fn configure<F: FnMut(&mut Logger)>(mut update: F) {
    slot().rcu(|current| {
        let mut next = Logger::clone(current);
        update(&mut next);
        next
    });
}

/// Whether the default logger is enabled
pub fn is_enabled() -> bool {
    slot().load().is_enabled()
}

/// Turn the default logger on or off
pub fn set_enabled(enabled: bool) {
    configure(|logger| logger.set_enabled(enabled));
}

/// Point the default logger at another stream
pub fn set_output(sink: Sink) {
    configure(|logger| logger.set_sink(sink.clone()));
}

/// Emit through the default logger; used by the logging macros
pub fn emit(level: Level, site: CallSite, payload: &dyn fmt::Display) {
    slot().load().emit(level, &site, payload);
}

/// [`Logger::dump`] on the default logger
pub fn dump<T: Serialize + ?Sized>(value: &T) -> String {
    slot().load().dump(value)
}

/// [`Logger::table`] on the default logger
pub fn table<T: Serialize + ?Sized>(value: &T) -> String {
    slot().load().table(value)
}

/// [`Logger::table_value`] on the default logger
pub fn table_value(value: &Value) -> String {
    slot().load().table_value(value)
}
