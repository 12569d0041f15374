//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{CONFIG_DIR_NAME, DEVICE_MESSAGE_KEYS};
use crate::export::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How `emit` renders the settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
    /// Indent JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Output file when `--output` is not given; stdout when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
            path: None,
        }
    }
}

/// What the watchface firmware expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Message keys declared by the firmware
    #[serde(default = "default_message_keys")]
    pub message_keys: Vec<String>,
}

fn default_message_keys() -> Vec<String> {
    DEVICE_MESSAGE_KEYS.iter().map(ToString::to_string).collect()
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            message_keys: default_message_keys(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/WatchfaceConfig/config.toml`
/// - macOS: `~/Library/Application Support/WatchfaceConfig/config.toml`
/// - Windows: `%APPDATA%\WatchfaceConfig\config.toml`
///
/// # Validation
///
/// - `device.message_keys` must not be empty and must not contain blank keys
/// - `output.path` must not be an existing directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Rendering settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Firmware expectations
    #[serde(default)]
    pub device: DeviceConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used and a missing file yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let default_path = Self::config_file_path()?;
                if !default_path.exists() {
                    debug!("No config at {}, using defaults", default_path.display());
                    return Ok(Self::new());
                }
                default_path
            }
        };

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Saves configuration to `path` (the default location when `None`).
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        self.validate()?;

        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        // Atomic rename
        let temp_path = config_path.with_extension("toml.tmp");
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(config_path)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.device.message_keys.is_empty() {
            anyhow::bail!("device.message_keys must list at least one key");
        }

        if let Some(blank) = self
            .device
            .message_keys
            .iter()
            .position(|key| key.trim().is_empty())
        {
            anyhow::bail!("device.message_keys[{blank}] is empty");
        }

        if let Some(path) = &self.output.path {
            if path.is_dir() {
                anyhow::bail!(
                    "output.path points to a directory, expected a file: {}",
                    path.display()
                );
            }
        }

        Ok(())
    }
}
