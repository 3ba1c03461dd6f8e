//! Server configuration management
//!
//! Handles loading configuration from defaults, a TOML file, environment
//! variables, and CLI arguments, in that precedence order.

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use reserve_core::types::MAX_TRIALS;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}. Must be between 1 and 65535")]
    InvalidPort(u16),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid trial cap: {0}. Must be between 1 and {MAX_TRIALS}")]
    InvalidTrialCap(usize),

    #[error("Invalid histogram bin count: {0}. Must be at least 1")]
    InvalidBinCount(usize),

    #[error("Invalid confidence rank: {0}. Must be between 1 and 99")]
    InvalidConfidence(u8),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Server configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Upper bound on `numSimulations` accepted per request
    pub max_trials: usize,
    /// Histogram bin count used when a request does not specify one
    pub default_bins: usize,
    /// Percentile rank used as the reserve confidence level when a request
    /// does not specify one
    pub default_confidence: u8,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: LogLevel::Info,
            max_trials: 1_000_000,
            default_bins: 24,
            default_confidence: 95,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay `RESERVE_*` environment variables onto this configuration
    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = std::env::var("RESERVE_SERVER_HOST") {
            self.host = host;
        }
        if let Ok(port_str) = std::env::var("RESERVE_SERVER_PORT") {
            self.port = port_str
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("unparseable port: {port_str}")))?;
        }
        if let Ok(log_level) = std::env::var("RESERVE_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        if let Ok(cap_str) = std::env::var("RESERVE_MAX_TRIALS") {
            self.max_trials = cap_str
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("unparseable trial cap: {cap_str}")))?;
        }
        if let Ok(bins_str) = std::env::var("RESERVE_DEFAULT_BINS") {
            self.default_bins = bins_str
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("unparseable bin count: {bins_str}")))?;
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {e}")))?;

        let config: ServerConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port));
        }
        if self.max_trials == 0 || self.max_trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCap(self.max_trials));
        }
        if self.default_bins == 0 {
            return Err(ConfigError::InvalidBinCount(self.default_bins));
        }
        if !(1..=99).contains(&self.default_confidence) {
            return Err(ConfigError::InvalidConfidence(self.default_confidence));
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CLI argument overrides accepted by [`build_config`]
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Optional configuration file path
    pub config_file: Option<PathBuf>,
    /// Host override
    pub host: Option<String>,
    /// Port override
    pub port: Option<u16>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build the effective configuration: defaults ← file ← environment ← CLI
pub fn build_config(cli: &CliArgs) -> Result<ServerConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };

    config.apply_env()?;

    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = LogLevel::from_str(log_level)?;
    }

    config.validate()?;
    Ok(config)
}
