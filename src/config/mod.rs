//! Configuration management module
//!
//! Handles loading, saving, and validation of the quiz UI settings.
//! Question data is compiled in and is not part of the configuration.

use crate::{QuizError, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// UI configuration persisted as TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// How long the splash screen stays up, in humantime format ("5s", "1500ms")
    pub splash_delay: String,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Title shown on the splash screen
    pub title: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            splash_delay: "5s".to_string(),
            tick_rate_ms: 250, // 4 FPS for responsive UI
            title: "Pakistani Quiz Game".to_string(),
        }
    }
}

impl QuizConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        let delay = self.splash_delay()?;
        if delay.is_zero() {
            return Err(QuizError::ConfigError(
                "Splash delay must be greater than 0".to_string(),
            ));
        }

        const MAX_SPLASH_DELAY: Duration = Duration::from_secs(60);
        if delay > MAX_SPLASH_DELAY {
            return Err(QuizError::ConfigError(format!(
                "Splash delay too long: {} (max: {})",
                self.splash_delay,
                humantime::format_duration(MAX_SPLASH_DELAY)
            )));
        }

        const MIN_TICK_MS: u64 = 16;
        const MAX_TICK_MS: u64 = 1000;
        if self.tick_rate_ms < MIN_TICK_MS || self.tick_rate_ms > MAX_TICK_MS {
            return Err(QuizError::ConfigError(format!(
                "Tick rate must be between {} and {} ms",
                MIN_TICK_MS, MAX_TICK_MS
            )));
        }

        if self.title.trim().is_empty() {
            return Err(QuizError::ConfigError("Title must not be empty".to_string()));
        }

        Ok(())
    }

    /// Parsed splash delay
    pub fn splash_delay(&self) -> Result<Duration> {
        humantime::parse_duration(&self.splash_delay).map_err(|e| {
            QuizError::ConfigError(format!("Invalid splash delay '{}': {}", self.splash_delay, e))
        })
    }

    /// Event poll interval
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Set the splash delay
    pub fn with_splash_delay(mut self, delay: Duration) -> Self {
        self.splash_delay = humantime::format_duration(delay).to_string();
        self
    }

    /// Set the tick rate
    pub fn with_tick_rate_ms(mut self, ms: u64) -> Self {
        self.tick_rate_ms = ms;
        self
    }

    /// Set the splash title
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            QuizError::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            QuizError::ConfigError(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuizError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = self.to_toml()?;

        fs::write(path, content).map_err(|e| {
            QuizError::ConfigError(format!("Failed to write config file {}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/pakquiz/pakquiz.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            QuizError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = QuizConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.splash_delay().unwrap(), Duration::from_secs(5));
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_toml_serialization() {
        let config = QuizConfig::default()
            .with_splash_delay(Duration::from_millis(1500))
            .with_tick_rate_ms(100);
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let deserialized: QuizConfig = toml::from_str(&toml_str).expect("Failed to deserialize from TOML");

        assert_eq!(deserialized.splash_delay().unwrap(), Duration::from_millis(1500));
        assert_eq!(deserialized.tick_rate_ms, 100);
        assert_eq!(deserialized.title, config.title);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: QuizConfig = toml::from_str("tick_rate_ms = 50\n").unwrap();
        assert_eq!(config.tick_rate_ms, 50);
        assert_eq!(config.splash_delay, "5s");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(QuizConfig::default().with_splash_delay(Duration::ZERO).validate().is_err());
        assert!(QuizConfig::default()
            .with_splash_delay(Duration::from_secs(120))
            .validate()
            .is_err());
        assert!(QuizConfig::default().with_tick_rate_ms(5).validate().is_err());
        assert!(QuizConfig::default().with_title("  ").validate().is_err());

        let garbled = QuizConfig {
            splash_delay: "soon".to_string(),
            ..QuizConfig::default()
        };
        assert!(matches!(garbled.validate(), Err(QuizError::ConfigError(_))));
    }

    #[test]
    fn test_config_file_path() {
        let path = QuizConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("pakquiz"));
        assert!(path.to_string_lossy().ends_with("pakquiz.toml"));
    }
}
