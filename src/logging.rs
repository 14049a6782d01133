//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! - `warn`: swallowed parse and clipboard failures
//! - `info`: server lifecycle
//! - `debug`: each successful conversion and copy

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging setup errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("Logging already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-field output
    #[default]
    Pretty,
    /// Single-line output
    Compact,
    /// JSON lines
    Json,
}

/// Logging behaviour
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `tonconv=debug`
    pub level: String,
    pub format: LogFormat,
    pub with_ansi: bool,
    /// Let `RUST_LOG` override `level`
    pub use_env_filter: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            with_ansi: true,
            use_env_filter: true,
        }
    }
}

impl LogConfig {
    /// `-v` count on top of a base level: 1 = debug, 2+ = trace
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        match verbosity {
            0 => {}
            1 => {
                self.level = "debug".to_string();
                self.use_env_filter = false;
            }
            _ => {
                self.level = "trace".to_string();
                self.use_env_filter = false;
            }
        }
        self
    }

    /// Override the configured output format when one is given
    pub fn with_format(mut self, format: Option<LogFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    fn filter(&self) -> Result<EnvFilter, LoggingError> {
        if self.use_env_filter {
            if let Ok(filter) = EnvFilter::try_from_default_env() {
                return Ok(filter);
            }
        }
        Ok(EnvFilter::try_new(&self.level)?)
    }
}

/// Install the global subscriber, writing to stderr
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = config.filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(config.with_ansi)
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_ansi(config.with_ansi)
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
    }
    Ok(())
}
