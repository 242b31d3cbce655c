//! Diagnostic logging through `tracing`.
//!
//! Logs go to `~/.config/cursorclamp/logs/cursorclamp.log`, or to
//! stderr when file logging is off. Prompts and user-facing messages
//! are printed directly and never pass through here.

use std::fs::{self, File, OpenOptions};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "cursorclamp.log";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Write to the log file instead of stderr.
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            file: true,
        }
    }
}

/// Maps a configured level name to a filter. Unknown names mean INFO.
pub fn parse_level(s: &str) -> LevelFilter {
    match s.to_ascii_lowercase().as_str() {
        "debug" => LevelFilter::DEBUG,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => LevelFilter::INFO,
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// Does nothing if `config.enabled` is `false`. `RUST_LOG` overrides
/// the configured level.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }

    let filter = EnvFilter::builder()
        .with_default_directive(parse_level(&config.level).into())
        .from_env_lossy();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if config.file
        && let Some(file) = open_log_file()
    {
        let _ = builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
        return;
    }

    let _ = builder.with_writer(std::io::stderr).try_init();
}

fn open_log_file() -> Option<File> {
    let log_dir = crate::config::config_dir()?.join("logs");
    fs::create_dir_all(&log_dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE_NAME))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(parse_level("DEBUG"), LevelFilter::DEBUG);
        assert_eq!(parse_level("Warn"), LevelFilter::WARN);
        assert_eq!(parse_level("error"), LevelFilter::ERROR);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(parse_level("verbose"), LevelFilter::INFO);
    }

    #[test]
    fn disabled_logging_is_the_default() {
        let config = LogConfig::default();
        assert!(!config.enabled);
        assert!(config.file);
    }
}
