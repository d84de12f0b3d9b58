//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive scoped to the specwright crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "specwright=trace",
            LogLevel::Debug => "specwright=debug",
            LogLevel::Info => "specwright=info",
            LogLevel::Warn => "specwright=warn",
            LogLevel::Error => "specwright=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
