use crate::similarity::DEFAULT_THRESHOLD;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".namesake.toml";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid similarity threshold {0}: must be within (0.0, 1.0]")]
    InvalidThreshold(f64),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Similarity threshold in (0.0, 1.0]; pairs scoring strictly above it
    /// are reported
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Names shorter than this are not harvested
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Names never harvested (each pattern must match the whole name)
    #[serde(default)]
    pub ignore: Vec<String>,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default preview format: "table", "matches", "summary", or "none"
    #[serde(default = "default_preview")]
    pub preview_format: String,

    /// Default unrestricted level (0=respect gitignore, 1=-u, 2=-uu, 3=-uuu)
    #[serde(default)]
    pub unrestricted_level: u8,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_length: default_min_length(),
            ignore: vec![],
            defaults: DefaultsConfig::default(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            preview_format: default_preview(),
            unrestricted_level: 0,
            use_color: None,
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_min_length() -> usize {
    1
}

fn default_preview() -> String {
    "matches".to_string()
}

impl Config {
    /// Load `.namesake.toml` from the given root if it exists
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }

        // Return default config if no config file exists
        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check the threshold before any matching begins; out-of-range values
    /// are an error, never silently clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_threshold(self.threshold)
    }
}

pub fn validate_threshold(threshold: f64) -> Result<(), ConfigError> {
    if threshold > 0.0 && threshold <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold(threshold))
    }
}
