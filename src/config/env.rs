//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "PICO_SPEC";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// From PICO_SPEC_LOG
    pub log: Option<bool>,
    /// From PICO_SPEC_COLOR
    pub color: Option<bool>,
    /// From PICO_SPEC_FORMAT
    pub format: Option<String>,
    /// From PICO_SPEC_LOG_LEVEL
    pub log_level: Option<String>,
    /// From PICO_SPEC_OUTPUT
    pub output: Option<String>,
    /// From PICO_SPEC_CONFIG
    pub config_file: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using a custom variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(&format!("{ENV_PREFIX}_{name}"));

        Self {
            log: get("LOG").map(|v| parse_bool(&v)),
            color: get("COLOR").map(|v| parse_bool(&v)),
            format: get("FORMAT"),
            log_level: get("LOG_LEVEL"),
            output: get("OUTPUT"),
            config_file: get("CONFIG"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self != &Self::default()
    }

    /// Print current environment configuration
    pub fn print_summary(&self) {
        println!("Environment Configuration:");
        println!("  {ENV_PREFIX}_LOG:        {:?}", self.log);
        println!("  {ENV_PREFIX}_COLOR:      {:?}", self.color);
        println!("  {ENV_PREFIX}_FORMAT:     {:?}", self.format);
        println!("  {ENV_PREFIX}_LOG_LEVEL:  {:?}", self.log_level);
        println!("  {ENV_PREFIX}_OUTPUT:     {:?}", self.output);
        println!("  {ENV_PREFIX}_CONFIG:     {:?}", self.config_file);
    }
}

/// Parse a boolean-ish environment value
fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enabled"
    )
}
