//! Line emitter
//!
//! A [`Logger`] owns its configuration, its output [`Sink`] and a
//! [`LocationProvider`]. Every line has the shape
//! `[DEVLOG] <time> <file>:<line> <function> <payload>`, wrapped in the
//! level's ANSI color when coloring is on. An unknown function is left out.

pub mod level;
pub mod sink;

pub use level::{Level, RESET};
pub use sink::{CaptureBuffer, Sink};

use crate::caller::{CallSite, LocationProvider, SourceRoots};
use crate::config::{ColorMode, DevlogConfig, TIME_FORMAT_RFC3339};
use crate::format::{dump_json, Grid, Value};
use crate::utils::terminal;
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::sync::Arc;

/// Fixed tag at the start of every line
pub const TAG: &str = "[DEVLOG]";

/// `Display` adapter joining values with single spaces
pub struct Spaced<'a>(
    /// Values to join
    pub &'a [&'a dyn fmt::Display],
);

impl fmt::Display for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(arg, f)?;
        }
        Ok(())
    }
}

/// Debug line writer with its own configuration
#[derive(Clone)]
pub struct Logger {
    config: DevlogConfig,
    sink: Sink,
    locator: Arc<dyn LocationProvider>,
}

impl Logger {
    /// Logger writing to stderr, shortening paths with the configured source roots
    pub fn new(config: DevlogConfig) -> Self {
        let locator = SourceRoots::new(config.expanded_source_roots());
        Self {
            config,
            sink: Sink::default(),
            locator: Arc::new(locator),
        }
    }

    /// Logger built from [`DevlogConfig::from_env`]
    pub fn from_env() -> Self {
        Self::new(DevlogConfig::from_env())
    }

    /// Replace the output sink
    pub fn with_sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the location provider
    pub fn with_locator<L: LocationProvider + 'static>(mut self, locator: L) -> Self {
        self.locator = Arc::new(locator);
        self
    }

    /// Current configuration
    pub fn config(&self) -> &DevlogConfig {
        &self.config
    }

    /// Current sink
    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Whether logging is on
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Turn logging on or off
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Replace the output sink in place
    pub fn set_sink(&mut self, sink: Sink) {
        self.sink = sink;
    }

    /// Write one line for `payload` at `level`, attributed to `site`.
    ///
    /// Does nothing when disabled; `payload` is not formatted in that case.
    pub fn emit(&self, level: Level, site: &CallSite, payload: &dyn fmt::Display) {
        if !self.config.enabled {
            return;
        }
        let line = self.compose(level, site, payload);
        self.sink.write_line(&line);
    }

    /// Like [`emit`](Self::emit), attributing the line to the caller.
    ///
    /// The function name is not known on this path, so the line omits it.
    #[track_caller]
    pub fn log(&self, level: Level, payload: &dyn fmt::Display) {
        self.emit(level, &CallSite::caller(), payload);
    }

    /// Pretty JSON of `value` framed by newlines, or "" when disabled.
    ///
    /// Disabling saves only the serialization; the caller has already built `value`.
    pub fn dump<T: Serialize + ?Sized>(&self, value: &T) -> String {
        if !self.config.enabled {
            return String::new();
        }
        dump_json(value)
    }

    /// Column-aligned table of `value`, or "" when disabled
    pub fn table<T: Serialize + ?Sized>(&self, value: &T) -> String {
        if !self.config.enabled {
            return String::new();
        }
        let value = Value::capture(value).unwrap_or_else(|err| Value::scalar(err));
        self.render(&value)
    }

    /// Column-aligned table of a hand-built [`Value`], or "" when disabled
    pub fn table_value(&self, value: &Value) -> String {
        if !self.config.enabled {
            return String::new();
        }
        self.render(value)
    }

    fn render(&self, value: &Value) -> String {
        Grid::from_value(value).render(&self.config.table_separator)
    }

    fn compose(&self, level: Level, site: &CallSite, payload: &dyn fmt::Display) -> String {
        let location = self.locator.locate(site);

        let mut line = String::with_capacity(128);
        let _ = write!(
            line,
            "{} {} {}:{}",
            TAG,
            self.timestamp(),
            location.file,
            location.line
        );
        if !location.function.is_empty() {
            line.push(' ');
            line.push_str(&location.function);
        }

        let preamble = line.len();
        line.push(' ');
        let _ = write!(line, "{}", payload);
        if line.len() == preamble + 1 {
            line.truncate(preamble);
        }

        if self.use_color() {
            line = format!("{}{}{}", level.ansi(self.config.palette), line, RESET);
        }
        line.push('\n');
        line
    }

    fn timestamp(&self) -> String {
        let now = chrono::Local::now();
        let mut out = String::new();
        if write!(out, "{}", now.format(&self.config.time_format)).is_err() {
            out.clear();
            let _ = write!(out, "{}", now.format(TIME_FORMAT_RFC3339));
        }
        out
    }

    fn use_color(&self) -> bool {
        match self.config.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !terminal::no_color_requested() && self.sink.is_terminal(),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DevlogConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("sink", &self.sink)
            .finish_non_exhaustive()
    }
}
