//! Configuration types and loading for devlog

use crate::error::{DevlogError, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Millisecond-precision local time, e.g. `2024-05-01T13:37:00.042`
pub const TIME_FORMAT_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Date-time with UTC offset, e.g. `2024-05-01T13:37:00+02:00`
pub const TIME_FORMAT_RFC3339: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Default separator between table columns
pub const DEFAULT_TABLE_SEPARATOR: &str = " | ";

/// Main devlog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DevlogConfig {
    /// Master switch; when false nothing is written and formatters return ""
    pub enabled: bool,

    /// chrono strftime pattern for the timestamp field
    pub time_format: String,

    /// Separator placed between table columns
    pub table_separator: String,

    /// Directories stripped from displayed source paths (first match wins).
    /// Empty by default; [`DevlogConfig::from_env`] fills in discovered roots.
    pub source_roots: Vec<String>,

    /// ANSI color set used per level
    pub palette: Palette,

    /// When to emit ANSI color codes
    pub color: ColorMode,
}

/// ANSI color palettes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// High-intensity foreground colors (default)
    #[default]
    Bright,
    /// Normal-intensity foreground colors
    Standard,
}

/// Color output policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when the sink is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl Default for DevlogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            time_format: TIME_FORMAT_MILLIS.to_string(),
            table_separator: DEFAULT_TABLE_SEPARATOR.to_string(),
            source_roots: Vec::new(),
            palette: Palette::default(),
            color: ColorMode::default(),
        }
    }
}

/// Cargo's registry sources and the working directory
fn discover_source_roots() -> Vec<String> {
    let mut roots = Vec::new();

    let cargo_home = env::var_os("CARGO_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".cargo")));
    if let Some(cargo_home) = cargo_home {
        roots.push(cargo_home.join("registry").join("src").display().to_string());
    }

    if let Ok(cwd) = env::current_dir() {
        roots.push(cwd.display().to_string());
    }

    roots
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

fn is_toml(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "toml")
}

impl DevlogConfig {
    /// Load configuration from a JSON file, or TOML when the extension is `.toml`
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = if is_toml(path) {
            toml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        tracing::debug!(path = %path.display(), "loaded devlog settings");
        Ok(config)
    }

    /// Save configuration to a file, using the same format rule as [`from_file`](Self::from_file)
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = if is_toml(path) {
            toml::to_string_pretty(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Defaults plus discovered source roots, overlaid with the `DEVLOG_*`
    /// environment variables
    pub fn from_env() -> Self {
        let mut config = Self {
            source_roots: discover_source_roots(),
            ..Self::default()
        };
        config.apply_env();
        config
    }

    /// Overlay `DEVLOG_ENABLED`, `DEVLOG_TIME_FORMAT`, `DEVLOG_TABLE_SEPARATOR`
    /// and `DEVLOG_SOURCE_ROOTS` onto this configuration
    pub fn apply_env(&mut self) {
        if let Ok(enabled) = env::var("DEVLOG_ENABLED") {
            self.enabled = parse_flag(&enabled);
        }
        if let Ok(time_format) = env::var("DEVLOG_TIME_FORMAT") {
            self.time_format = time_format;
        }
        if let Ok(separator) = env::var("DEVLOG_TABLE_SEPARATOR") {
            self.table_separator = separator;
        }
        if let Some(roots) = env::var_os("DEVLOG_SOURCE_ROOTS") {
            self.source_roots = env::split_paths(&roots)
                .filter(|root| !root.as_os_str().is_empty())
                .map(|root| root.display().to_string())
                .collect();
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(DevlogError::Config(format!(
                "invalid time format: {:?}",
                self.time_format
            )));
        }

        if self.source_roots.is_empty() {
            tracing::warn!("No source roots configured; file paths will be shown in full");
        }

        Ok(())
    }

    /// Source roots with `~` and environment variables expanded
    pub fn expanded_source_roots(&self) -> Vec<PathBuf> {
        self.source_roots
            .iter()
            .map(|root| match shellexpand::full(root) {
                Ok(expanded) => PathBuf::from(expanded.as_ref()),
                Err(err) => {
                    tracing::warn!(root = %root, error = %err, "could not expand source root");
                    PathBuf::from(root)
                }
            })
            .collect()
    }

    /// Get default settings path
    pub fn default_settings_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".devlog.toml")
    }
}
