//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.mathproc.toml` files.

use crate::number::Number;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".mathproc.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Inputs used by the demonstration run.
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Demonstration inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Numbers to sum.
    #[serde(default = "default_numbers")]
    pub numbers: Vec<Number>,

    /// Numbers to filter and double.
    #[serde(default = "default_mixed")]
    pub mixed: Vec<Number>,

    /// A non-sequence input used to show error handling.
    #[serde(default = "default_invalid")]
    pub invalid: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            numbers: default_numbers(),
            mixed: default_mixed(),
            invalid: default_invalid(),
        }
    }
}

fn default_numbers() -> Vec<Number> {
    [1, 2, 3, 4, 5].into_iter().map(Number::Int).collect()
}

fn default_mixed() -> Vec<Number> {
    [-2, -1, 0, 1, 2, 3].into_iter().map(Number::Int).collect()
}

fn default_invalid() -> String {
    "not a list".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from a directory.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Try to load configuration from the working directory.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were given explicitly.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(format) = args.format {
            self.general.format = format;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
