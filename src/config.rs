//! Configuration management for Keyprint
//!
//! Provides persistent configuration that is automatically saved to and
//! loaded from a platform-specific config file.
//!
//! ## Config File Locations
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/keyprint/config.toml` |
//! | macOS | `~/Library/Application Support/keyprint/config.toml` |
//! | Windows | `%APPDATA%\keyprint\config.toml` |

use crate::engine::DEFAULT_TERMINATOR;
use crate::keyboard::Key;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
    /// IO error reading or writing config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse config file
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize config
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Returns the path to the config file.
///
/// Creates the config directory if it doesn't exist.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    let app_dir = config_dir.join("keyprint");

    if !app_dir.exists() {
        fs::create_dir_all(&app_dir)?;
    }

    Ok(app_dir.join("config.toml"))
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Capture settings
    pub capture: CaptureConfig,
    /// Output settings
    pub output: OutputConfig,
}

/// Capture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Key whose release ends the capture session
    pub terminator: Key,
    /// Keyboard polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            terminator: DEFAULT_TERMINATOR,
            poll_interval_ms: 1,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File stem for exported data files
    pub file_stem: String,
    /// Also write the JSON report next to the CSV table
    pub write_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_stem: "keystroke_data".to_string(),
            write_json: true,
        }
    }
}

impl Config {
    /// Load configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a specific path.
    ///
    /// Useful for testing or using custom config locations.
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default config file.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get keyboard polling interval as Duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.capture.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::NamedKey;
    use std::env;

    fn temp_config_path() -> PathBuf {
        env::temp_dir().join(format!("keyprint-test-{}.toml", std::process::id()))
    }

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.capture.terminator, Key::Named(NamedKey::Escape));
        assert_eq!(config.capture.poll_interval_ms, 1);
        assert_eq!(config.output.file_stem, "keystroke_data");
        assert!(config.output.write_json);
    }

    #[test]
    fn config_poll_interval() {
        let mut config = Config::default();
        config.capture.poll_interval_ms = 5;
        assert_eq!(config.poll_interval().as_millis(), 5);
    }

    #[test]
    fn config_save_and_load_roundtrip() {
        let path = temp_config_path();

        let mut config = Config::default();
        config.capture.terminator = Key::Named(NamedKey::Enter);
        config.capture.poll_interval_ms = 2;
        config.output.write_json = false;

        config.save_to(&path).expect("Failed to save config");
        let loaded = Config::load_from(&path).expect("Failed to load config");

        assert_eq!(loaded.capture.terminator, Key::Named(NamedKey::Enter));
        assert_eq!(loaded.capture.poll_interval_ms, 2);
        assert!(!loaded.output.write_json);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn config_load_missing_file_errors() {
        let path = PathBuf::from("/nonexistent/path/config.toml");
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");

        assert!(toml_str.contains("[capture]"));
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("poll_interval_ms = 1"));
    }

    #[test]
    fn config_deserializes_char_terminator() {
        let toml_str = r#"
[capture]
terminator = { Char = "q" }
poll_interval_ms = 3

[output]
file_stem = "session"
write_json = true
"#;
        let config: Config = toml::from_str(toml_str).expect("Failed to deserialize");
        assert_eq!(config.capture.terminator, Key::Char('q'));
        assert_eq!(config.output.file_stem, "session");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::NoConfigDir;
        assert_eq!(err.to_string(), "Could not determine config directory");

        let io_err = ConfigError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(io_err.to_string().contains("IO error"));
    }
}
