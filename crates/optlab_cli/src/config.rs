//! CLI configuration management.
//!
//! Handles loading of `optlab.toml` with environment variable override
//! support. A missing file yields the defaults; a malformed file is an error.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use optlab_core::DEFAULT_STEP_PCT;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed
    #[error("IO error: {0}")]
    Io(String),

    /// The configuration file is not valid TOML for this schema
    #[error("Parse error: {0}")]
    Parse(String),

    /// One or more settings are out of range
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Output format for payoff curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table with a summary
    #[default]
    Table,
    /// JSON report with legs, curve and summary
    Json,
    /// `spot,payoff` rows
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::Validation(vec![format!(
                "Invalid format '{}'. Supported: table, json, csv",
                s
            )])),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OptlabConfig {
    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Sampling granularity in percent of spot
    #[serde(default = "default_step")]
    pub step: f64,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Print every n-th sample in table output
    #[serde(default = "default_stride")]
    pub stride: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_step() -> f64 {
    DEFAULT_STEP_PCT
}

fn default_stride() -> usize {
    100
}

impl Default for OptlabConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            step: default_step(),
            format: OutputFormat::default(),
            stride: default_stride(),
        }
    }
}

impl OptlabConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("OPTLAB_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(step) = lookup("OPTLAB_STEP").and_then(|s| s.parse().ok()) {
            self.step = step;
        }

        if let Some(format) = lookup("OPTLAB_FORMAT").and_then(|s| s.parse().ok()) {
            self.format = format;
        }

        if let Some(stride) = lookup("OPTLAB_STRIDE").and_then(|s| s.parse().ok()) {
            self.stride = stride;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if !self.step.is_finite() || self.step <= 0.0 {
            errors.push(format!("step must be positive, got {}", self.step));
        }

        if self.stride == 0 {
            errors.push("stride must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_is_valid() {
        let config = OptlabConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.step, DEFAULT_STEP_PCT);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = OptlabConfig::from_toml("format = \"csv\"\nstride = 10\n").unwrap();
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.stride, 10);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = OptlabConfig::from_toml("step = \"fine\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("OPTLAB_LOG_LEVEL", "debug"),
            ("OPTLAB_STEP", "0.5"),
            ("OPTLAB_FORMAT", "JSON"),
            ("OPTLAB_STRIDE", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let config = OptlabConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.step, 0.5);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.stride, 100);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = OptlabConfig {
            log_level: "loud".to_string(),
            step: 0.0,
            format: OutputFormat::Table,
            stride: 0,
        };
        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("Expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("Table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }
}
