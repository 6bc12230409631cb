//! Configuration management for Mathquiz
//!
//! Everything has a default; the config file only needs the keys a player
//! wants to change.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::game::{FeedbackPolicy, Rules, ROUND_SECS};
use crate::logging::LogFormat;

/// Longest round the config accepts
pub const MAX_ROUND_SECS: u32 = 3600;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub round: RoundConfig,
    pub questions: QuestionsConfig,
    pub ui: UiConfig,
    pub logging: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub duration_secs: u32,
    pub feedback: FeedbackPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionsConfig {
    /// Fixed seed for reproducible question sequences
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub colors: bool,

    /// How often the input loop wakes up, in milliseconds
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: String,
    pub file: Option<String>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            duration_secs: ROUND_SECS,
            feedback: FeedbackPolicy::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            colors: true,
            tick_rate_ms: 100,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Log file path with `~` expanded
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file
            .as_ref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).to_string()))
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error: defaults are used instead.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            let mut config = Self::default();
            config.apply_env_overrides();
            config.validate()?;
            return Ok(config);
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let mut config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Environment wins over the file for display settings
    pub fn apply_env_overrides(&mut self) {
        if std::env::var("NO_COLOR").is_ok() || std::env::var("MATHQUIZ_NO_COLOR").is_ok() {
            self.ui.colors = false;
        }

        if let Some(tick_rate_ms) = std::env::var("MATHQUIZ_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.ui.tick_rate_ms = tick_rate_ms;
        }
    }

    /// Reject values the game cannot run with
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.round.duration_secs == 0 || self.round.duration_secs > MAX_ROUND_SECS {
            return Err(ConfigError::Invalid(format!(
                "round.duration_secs must be between 1 and {}, got {}",
                MAX_ROUND_SECS, self.round.duration_secs
            )));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid(
                "ui.tick_rate_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Round rules derived from the `[round]` section
    pub fn rules(&self) -> Rules {
        Rules {
            round_secs: self.round.duration_secs,
            feedback: self.round.feedback,
        }
    }
}

/// Resolve the configuration file path
///
/// `MATHQUIZ_CONFIG` wins; otherwise `<config dir>/mathquiz/config.toml`.
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("MATHQUIZ_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("mathquiz").join("config.toml"))
}
