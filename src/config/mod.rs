//! Configuration loaded from environment variables.
//!
//! `EVENT_FILE` and `PRETTY_OUTPUT` are read by the command line parser as
//! fallbacks for its `EVENT_FILE` argument and `--pretty` flag.
//!
//! | Variable        | Default           | Meaning                              |
//! |-----------------|-------------------|--------------------------------------|
//! | `LOG_LEVEL`     | -                 | trace, debug, info, warn, error      |
//! | `RUST_LOG`      | `edge_index=warn` | full tracing filter syntax           |
//! | `LOG_FORMAT`    | `text`            | `text` or `json`                     |
//! | `SERVICE_NAME`  | `edge_index`      | `ctx.service` in JSON logs           |
//! | `EVENT_FILE`    | stdin             | event JSON path, `-` for stdin       |
//! | `PRETTY_OUTPUT` | `false`           | pretty-print the returned request    |

mod error;
mod input;
mod logging;
mod parse;

pub use error::ConfigError;
pub use input::{EventSource, InputConfig};
pub use logging::{LogFormat, LoggingConfig};

/// Complete application configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Event input/output configuration.
    pub input: InputConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `input` starts at its default; the binary fills it from the command line.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            input: InputConfig::default(),
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::debug;

        debug!("Configuration loaded:");
        debug!("  Event source: {}", self.input.source.describe());
        debug!("  Pretty output: {}", self.input.pretty);
        debug!("  Log format: {}", self.logging.format);
        debug!("  Log filter: {}", self.logging.filter);
    }
}
