//! Log levels and their ANSI colors

use crate::config::Palette;
use std::fmt;

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

/// Severity of a log line; only affects its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Informational (blue)
    Info,
    /// Warning (yellow)
    Warn,
    /// Error (red)
    Error,
}

impl Level {
    /// SGR foreground code for this level in the given palette
    pub fn color_code(self, palette: Palette) -> u8 {
        match (palette, self) {
            (Palette::Bright, Level::Info) => 94,
            (Palette::Bright, Level::Warn) => 93,
            (Palette::Bright, Level::Error) => 91,
            (Palette::Standard, Level::Info) => 34,
            (Palette::Standard, Level::Warn) => 33,
            (Palette::Standard, Level::Error) => 31,
        }
    }

    /// Escape sequence that switches to this level's color
    pub fn ansi(self, palette: Palette) -> String {
        format!("\x1b[{}m", self.color_code(palette))
    }

    /// Get level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes() {
        assert_eq!(Level::Info.ansi(Palette::Bright), "\x1b[94m");
        assert_eq!(Level::Warn.ansi(Palette::Bright), "\x1b[93m");
        assert_eq!(Level::Error.ansi(Palette::Bright), "\x1b[91m");
        assert_eq!(Level::Info.color_code(Palette::Standard), 34);
        assert_eq!(Level::Error.color_code(Palette::Standard), 31);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(Level::Info.to_string(), "info");
        assert_eq!(Level::Warn.as_str(), "warn");
        assert_eq!(format!("{:>6}", Level::Error), " error");
    }
}
