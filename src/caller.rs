//! Call-site capture and source location shortening
//!
//! Rust has no cheap runtime stack walk, so the call site is captured where the
//! log call is written: the macros record `file!()`, `line!()` and the enclosing
//! function path, while [`CallSite::caller`] relies on `#[track_caller]`. Marking
//! a wrapper with `#[track_caller]` is how a caller "skips" its own frame.

use std::path::{Path, PathBuf};

/// Raw call-site information as captured at the logging call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Source file as reported by the compiler
    pub file: &'static str,
    /// 1-based line number, 0 when unknown
    pub line: u32,
    /// Fully-qualified function path, empty when unknown
    pub function: &'static str,
}

impl CallSite {
    /// Create a call site from its parts
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self { file, line, function }
    }

    /// Call site of the nearest caller not marked `#[track_caller]`.
    ///
    /// The function name is not available this way and is left empty.
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self::new(location.file(), location.line(), "")
    }

    /// A call site with no information at all
    pub const fn unknown() -> Self {
        Self::new("", 0, "")
    }
}

/// Display-ready location: shortened path, line and bare function name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    /// File path, relative to a source root when one matched
    pub file: String,
    /// Line number
    pub line: u32,
    /// Function identifier without its module path
    pub function: String,
}

impl Location {
    /// Create a location from its parts
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }
}

/// Turns a captured [`CallSite`] into the [`Location`] printed on a log line
pub trait LocationProvider: Send + Sync {
    /// Resolve a call site; must not fail, partial data is fine
    fn locate(&self, site: &CallSite) -> Location;
}

/// Shortens paths relative to a list of source roots
#[derive(Debug, Clone, Default)]
pub struct SourceRoots {
    roots: Vec<PathBuf>,
}

impl SourceRoots {
    /// Create a resolver over the given roots, tried in order
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Configured roots
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Path relative to the first root containing it, or the path unchanged
    pub fn shorten(&self, file: &str) -> String {
        let path = Path::new(file);
        self.roots
            .iter()
            .filter(|root| !root.as_os_str().is_empty())
            .find_map(|root| path.strip_prefix(root).ok())
            .map(|relative| relative.display().to_string())
            .unwrap_or_else(|| file.to_string())
    }
}

impl LocationProvider for SourceRoots {
    fn locate(&self, site: &CallSite) -> Location {
        Location::new(self.shorten(site.file), site.line, base_name(site.function))
    }
}

/// Always reports the same location; useful for deterministic output
#[derive(Debug, Clone, Default)]
pub struct FixedLocation(pub Location);

impl LocationProvider for FixedLocation {
    fn locate(&self, _site: &CallSite) -> Location {
        self.0.clone()
    }
}

/// Last path segment of a function path, skipping closure segments.
///
/// `app::net::connect::{{closure}}` becomes `connect`.
pub fn base_name(function: &str) -> &str {
    function
        .rsplit("::")
        .find(|segment| !segment.is_empty() && *segment != "{{closure}}")
        .unwrap_or("")
}
