//! Configuration for the QADL CLI.
//!
//! Supports loading configuration from:
//! 1. A configuration file (YAML)
//! 2. Environment variables (with QADL_ prefix)
//!
//! Precedence, highest first: command-line flags, environment variables,
//! the configuration file, defaults.

use std::path::Path;

use clap::ValueEnum;
use qadl_parser::{BlockPolicy, ParseOptions};
use serde::{Deserialize, Serialize};

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Parser behaviour
    #[serde(default)]
    pub parser: ParserConfig,

    /// Output rendering
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Parser settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Reject blocks that are never closed
    #[serde(default)]
    pub strict_blocks: bool,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: "summary" or "json"
    #[serde(default = "default_output_format")]
    pub format: String,

    /// Colored terminal output
    #[serde(default = "default_true")]
    pub color: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level when no `-v` flag is given: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// How `qadl parse` prints a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable overview
    Summary,
    /// Pretty-printed JSON of the whole definition
    Json,
}

fn default_output_format() -> String {
    "summary".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// Values are not validated here; [`Config::load`] validates once
    /// environment overrides have been applied.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        serde_yaml_ng::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load configuration with the following precedence:
    /// 1. Load from file if provided
    /// 2. Apply environment variable overrides
    /// 3. Validate the result
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_with(config_file, |key| std::env::var(key).ok())
    }

    fn load_with<F>(config_file: Option<&str>, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };

        let config = config.merge_vars(var);
        config.validate()?;
        Ok(config)
    }

    /// Merge `QADL_*` overrides looked up by variable name.
    ///
    /// Only variables that are set override the current values; an
    /// unparsable `QADL_STRICT_BLOCKS` is ignored.
    pub fn merge_vars<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = var("QADL_STRICT_BLOCKS") {
            if let Some(flag) = parse_flag(&v) {
                self.parser.strict_blocks = flag;
            }
        }
        if let Some(v) = var("QADL_OUTPUT_FORMAT") {
            self.output.format = v;
        }
        if let Some(v) = var("QADL_LOG_LEVEL") {
            self.logging.level = v;
        }

        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        OutputFormat::from_str(&self.output.format, true).map_err(|_| {
            ConfigError::ValidationError(format!(
                "Invalid output format: {} (expected summary or json)",
                self.output.format
            ))
        })?;

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        Ok(())
    }

    /// Configured output format.
    pub fn output_format(&self) -> Result<OutputFormat, ConfigError> {
        OutputFormat::from_str(&self.output.format, true).map_err(|_| {
            ConfigError::ValidationError(format!(
                "Invalid output format: {}",
                self.output.format
            ))
        })
    }

    /// Parse options, with `strict` from the command line forcing strict blocks.
    pub fn parse_options(&self, strict: bool) -> ParseOptions {
        let unterminated_blocks = if strict || self.parser.strict_blocks {
            BlockPolicy::Strict
        } else {
            BlockPolicy::Lenient
        };
        ParseOptions {
            unterminated_blocks,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
