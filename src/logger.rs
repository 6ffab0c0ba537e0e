//! Leveled diagnostics for the request pipeline.
//!
//! The pipeline never logs through a global: each [`HttpClient`](crate::HttpClient)
//! holds the [`Logger`] it was built with.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::PolymarketError;

/// Verbosity threshold. `Silent` suppresses everything.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Silent => "silent",
        }
    }

    /// Whether a line at `level` passes this threshold.
    pub fn allows(self, level: LogLevel) -> bool {
        level != Self::Silent && level >= self
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = PolymarketError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" | "trace" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "silent" | "off" | "none" => Ok(Self::Silent),
            other => Err(PolymarketError::validation(
                Some("log_level"),
                format!("unknown log level '{other}'"),
            )),
        }
    }
}

/// Sink for pipeline diagnostics. Logging never affects control flow.
pub trait Logger: fmt::Debug + Send + Sync {
    fn log(&self, level: LogLevel, component: &str, message: &str);

    fn debug(&self, component: &str, message: &str) {
        self.log(LogLevel::Debug, component, message);
    }

    fn info(&self, component: &str, message: &str) {
        self.log(LogLevel::Info, component, message);
    }

    fn warn(&self, component: &str, message: &str) {
        self.log(LogLevel::Warn, component, message);
    }

    fn error(&self, component: &str, message: &str) {
        self.log(LogLevel::Error, component, message);
    }
}

/// Default logger: forwards lines at or above its threshold to `tracing`.
///
/// Inert when the `tracing` feature is disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger {
    level: LogLevel,
}

impl TracingLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, component: &str, message: &str) {
        if !self.level.allows(level) {
            return;
        }

        #[cfg(feature = "tracing")]
        match level {
            LogLevel::Debug => tracing::debug!(component, "{message}"),
            LogLevel::Info => tracing::info!(component, "{message}"),
            LogLevel::Warn => tracing::warn!(component, "{message}"),
            LogLevel::Error => tracing::error!(component, "{message}"),
            LogLevel::Silent => {}
        }

        #[cfg(not(feature = "tracing"))]
        let _ = (component, message);
    }
}

/// Discards every line.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: LogLevel, _component: &str, _message: &str) {}
}
