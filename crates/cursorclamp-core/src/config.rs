use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

/// Top-level configuration for Cursorclamp.
///
/// Loaded from `~/.config/cursorclamp/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clamp loop timing.
    pub clamp: ClampConfig,
    /// Diagnostic logging.
    pub logging: LogConfig,
}

/// Clamp loop timing and title handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClampConfig {
    /// Milliseconds between two refreshes of the clip.
    pub tick_ms: u64,
    /// Extra milliseconds to wait after clipping a focused window.
    pub focus_hold_ms: u64,
    /// Check that the window still exists every this many ticks.
    pub validate_every: u32,
    /// Characters of the window title kept for display and liveness checks.
    pub title_max_len: usize,
}

impl Default for ClampConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            focus_hold_ms: 500,
            validate_every: 10,
            title_max_len: 50,
        }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    ///
    /// A zero tick would spin the CPU, and a zero validation cadence
    /// would never check the window.
    pub fn validate(&mut self) {
        self.clamp.tick_ms = self.clamp.tick_ms.clamp(10, 5_000);
        self.clamp.focus_hold_ms = self.clamp.focus_hold_ms.min(10_000);
        self.clamp.validate_every = self.clamp.validate_every.clamp(1, 1_000);
        self.clamp.title_max_len = self.clamp.title_max_len.clamp(1, 256);
    }
}

/// Returns the config directory: `~/.config/cursorclamp/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("cursorclamp"))
}

/// Returns the config file path: `~/.config/cursorclamp/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Loads the configuration from disk, falling back to defaults.
///
/// If the file doesn't exist, returns defaults silently.
/// If the file exists but can't be parsed, prints a warning and returns defaults.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Config::default(),
    };

    parse(&content).unwrap_or_else(|e| {
        eprintln!("Warning: failed to parse {}: {e}", path.display());
        Config::default()
    })
}

/// Parses and validates a configuration document.
pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.validate();
    Ok(config)
}

/// Generates the commented default `config.toml`.
pub fn generate_config() -> String {
    let clamp = ClampConfig::default();
    let logging = LogConfig::default();

    format!(
        r#"# Cursorclamp configuration
# Delete a key to fall back to its default.

[clamp]
# Milliseconds between two refreshes of the cursor clip (10-5000).
tick_ms = {tick}
# Extra milliseconds to wait after clipping while the window keeps focus (0-10000).
focus_hold_ms = {hold}
# Check that the selected window still exists every N ticks (1-1000).
validate_every = {validate}
# Characters of the window title shown and used to recognise the window (1-256).
title_max_len = {title}

[logging]
# Write diagnostic logs. RUST_LOG overrides the level.
enabled = {enabled}
# One of "debug", "info", "warn", "error".
level = "{level}"
# Log to ~/.config/cursorclamp/logs/cursorclamp.log instead of stderr.
file = {file}
"#,
        tick = clamp.tick_ms,
        hold = clamp.focus_hold_ms,
        validate = clamp.validate_every,
        title = clamp.title_max_len,
        enabled = logging.enabled,
        level = logging.level,
        file = logging.file,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_timing() {
        // Arrange / Act
        let config = Config::default();

        // Assert
        assert_eq!(config.clamp.tick_ms, 100);
        assert_eq!(config.clamp.focus_hold_ms, 500);
        assert_eq!(config.clamp.validate_every, 10);
        assert_eq!(config.clamp.title_max_len, 50);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_keys() {
        // Arrange
        let toml_str = "[clamp]\ntick_ms = 250\n";

        // Act
        let config = parse(toml_str).unwrap();

        // Assert
        assert_eq!(config.clamp.tick_ms, 250);
        assert_eq!(config.clamp.validate_every, 10); // default
        assert_eq!(config.logging.level, "info"); // default
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        // Arrange
        let toml_str = "[clamp]\ntick_ms = 0\nvalidate_every = 0\ntitle_max_len = 9000\n";

        // Act
        let config = parse(toml_str).unwrap();

        // Assert
        assert_eq!(config.clamp.tick_ms, 10);
        assert_eq!(config.clamp.validate_every, 1);
        assert_eq!(config.clamp.title_max_len, 256);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse("[clamp\ntick_ms = ").is_err());
    }

    #[test]
    fn generated_template_parses_to_defaults() {
        // Act
        let config = parse(&generate_config()).unwrap();

        // Assert
        assert_eq!(config.clamp, ClampConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file);
    }
}
