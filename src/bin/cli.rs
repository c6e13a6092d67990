//! CLI binary for devlog: render JSON as a devlog table or dump

use clap::{Parser, ValueEnum};
use devlog::{config::DevlogConfig, utils::debug::DebugLogger, DevlogError, Level, Logger, VERSION};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "devlog")]
#[command(about = "Render JSON values the way devlog prints them", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// JSON file to read (stdin when omitted)
    input: Option<PathBuf>,

    /// Output layout
    #[arg(short, long, value_enum, default_value_t = Mode::Table)]
    mode: Mode,

    /// Column separator for tables (overrides settings)
    #[arg(long)]
    separator: Option<String>,

    /// Path to settings file
    #[arg(short, long, env = "DEVLOG_SETTINGS")]
    settings: Option<PathBuf>,

    /// Send the result as a log line at this level instead of printing it
    #[arg(short, long, value_enum)]
    level: Option<LevelArg>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Column-aligned table
    Table,
    /// Indented JSON
    Dump,
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    Info,
    Warn,
    Error,
}

impl From<LevelArg> for Level {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Info => Level::Info,
            LevelArg::Warn => Level::Warn,
            LevelArg::Error => Level::Error,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger
    DebugLogger::init(cli.debug);

    let exit_code = run(cli).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        1
    });

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> devlog::Result<i32> {
    // Load configuration
    let mut config = if let Some(settings_path) = cli.settings {
        DevlogConfig::from_file(&settings_path)?
    } else {
        let default_path = DevlogConfig::default_settings_path();
        if default_path.exists() {
            DevlogConfig::from_file(&default_path)?
        } else {
            DevlogConfig::from_env()
        }
    };
    config.apply_env();

    // Override with CLI arguments
    if let Some(separator) = cli.separator {
        config.table_separator = separator;
    }

    // Rendering is the point of this tool
    config.enabled = true;
    config.validate()?;

    let input = match cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let value: serde_json::Value = serde_json::from_str(&input)
        .map_err(|e| DevlogError::Other(format!("invalid JSON input: {}", e)))?;

    let logger = Logger::new(config);
    let rendered = match cli.mode {
        Mode::Table => logger.table(&value),
        Mode::Dump => logger.dump(&value),
    };

    match cli.level {
        Some(level) => {
            let level = Level::from(level);
            tracing::debug!(level = %level, "sending rendered value as a log line");
            logger.emit(level, &devlog::call_site!(), &rendered)
        }
        None => print!("{}", rendered),
    }

    Ok(0)
}
