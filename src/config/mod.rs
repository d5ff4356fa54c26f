//! Configuration for the recipients display
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/recipients/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Command-line flags are applied on top by the caller.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod display;
mod observability;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use display::{DisplayConfig, FileDisplay, DEFAULT_WIDTH};
pub use observability::{FileLogging, LogRotation, LoggingConfig};

use crate::measure::MeasureKind;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Theme name: "auto", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// Container width and measurement
    pub display: DisplayConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "auto".to_string(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,

    /// Optional [display] section
    pub display: Option<FileDisplay>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

impl FileConfig {
    /// Parse config file contents
    pub(crate) fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid config file syntax")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/recipients/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("recipients").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config from `path`; a missing file yields defaults
    ///
    /// A file that exists but cannot be read or parsed is an error. A broken
    /// config should fail fast, not silently fall back to defaults.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => FileConfig::parse(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Cannot read config file {}", path.display()))
            }
        }
    }

    /// Load configuration: env -> file -> defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from the config file only: file -> defaults
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::from_file(file))
    }

    /// Merge a parsed config file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::from_file(file);
        config.apply_env_overrides(env);
        config
    }

    fn from_file(file: FileConfig) -> Self {
        Self {
            theme: file.theme.unwrap_or_else(|| "auto".to_string()),
            display: DisplayConfig::from_file(file.display),
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    /// Apply RECIPIENTS_* environment variables on top of everything else
    pub fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(theme) = env("RECIPIENTS_THEME") {
            self.theme = theme;
        }

        // Unparseable width values are ignored
        if let Some(width) = env("RECIPIENTS_WIDTH").and_then(|v| v.parse().ok()) {
            self.display.width = width;
        }

        if let Some(measure) = env("RECIPIENTS_MEASURE") {
            self.display.measure = MeasureKind::from_str(&measure);
        }
    }
}
