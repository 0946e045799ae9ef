//! Configuration module
//!
//! Handles loading and managing configuration.

mod env;

pub use env::EnvConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;
use crate::utils::LogLevel;

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./pico-spec.yaml",
    "./pico-spec.yml",
    "./pico-spec.json",
    "./.pico-spec.yaml",
    "~/.config/pico-spec/config.yaml",
];

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Report each top-level result as it settles
    pub log: bool,

    /// Use ANSI colors in console output
    pub color: bool,

    /// Output format (tree, flat, json, json-pretty, csv, summary)
    pub format: String,

    /// Tracing log level
    pub log_level: String,

    /// Write the final report to this file
    pub output: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: true,
            color: true,
            format: "tree".to_string(),
            log_level: "warn".to_string(),
            output: None,
        }
    }
}

impl AppConfig {
    /// Find configuration file in standard locations
    pub fn find() -> Option<PathBuf> {
        CONFIG_LOCATIONS
            .iter()
            .map(|location| expand_path(location))
            .find(|path| path.exists())
    }

    /// Load from the first standard location, or defaults
    pub fn load_default() -> Result<Self> {
        match Self::find() {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_yaml_file(path) {
            serde_yaml::to_string(self).context("Failed to serialize config")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if OutputFormat::from_str(&self.format).is_none() {
            anyhow::bail!(
                "Unknown output format '{}'. Valid: tree, flat, json, json-pretty, csv, summary",
                self.format
            );
        }
        if LogLevel::from_str(&self.log_level).is_none() {
            anyhow::bail!(
                "Unknown log level '{}'. Valid: trace, debug, info, warn, error",
                self.log_level
            );
        }
        Ok(())
    }

    /// Apply environment overrides
    pub fn merge_env(&mut self, env: &EnvConfig) {
        if let Some(log) = env.log {
            self.log = log;
        }
        if let Some(color) = env.color {
            self.color = color;
        }
        if let Some(format) = &env.format {
            self.format = format.clone();
        }
        if let Some(level) = &env.log_level {
            self.log_level = level.clone();
        }
        if let Some(output) = &env.output {
            self.output = Some(PathBuf::from(output));
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_str(&self.format).unwrap_or(OutputFormat::Tree)
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_str(&self.log_level).unwrap_or_default()
    }
}

/// Expand ~ to home directory
fn expand_path(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Check if file is YAML based on extension
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
