//! Logging configuration.

use std::fmt;
use std::str::FromStr;

use super::parse::{env_opt, env_or, env_parse};
use super::ConfigError;

const DEFAULT_FILTER: &str = "edge_index=warn";

/// Output format for log lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines from the tracing fmt layer.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}', expected: text, json", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str("text"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Logging configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Log level filter (from LOG_LEVEL or RUST_LOG).
    pub filter: String,
    /// Line format (from LOG_FORMAT).
    pub format: LogFormat,
    /// Service name for structured logging.
    pub service_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Text,
            service_name: "edge_index".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Load configuration from environment variables.
    ///
    /// LOG_LEVEL accepts simple values: trace, debug, info, warn, error
    /// RUST_LOG accepts full tracing filter syntax: edge_index=debug
    pub fn from_env() -> Result<Self, ConfigError> {
        let filter = resolve_log_filter(
            env_opt("LOG_LEVEL").as_deref(),
            env_opt("RUST_LOG").as_deref(),
        );

        Ok(Self {
            filter,
            format: env_parse("LOG_FORMAT", LogFormat::Text)?,
            service_name: env_or("SERVICE_NAME", "edge_index"),
        })
    }
}

/// Resolve the log filter.
///
/// Priority: LOG_LEVEL > RUST_LOG > default (warn). Stdout carries the
/// rewritten request, so the default stays quiet.
fn resolve_log_filter(log_level: Option<&str>, rust_log: Option<&str>) -> String {
    if let Some(level) = log_level {
        let level = level.to_lowercase();
        match level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {
                return format!("edge_index={}", level);
            }
            _ => {
                // Logging is not up yet
                eprintln!(
                    "Warning: Invalid LOG_LEVEL '{}', expected: trace, debug, info, warn, error",
                    level
                );
            }
        }
    }

    if let Some(filter) = rust_log {
        return filter.to_string();
    }

    DEFAULT_FILTER.to_string()
}
