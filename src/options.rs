use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::LogLevel;
#[cfg(not(target_arch = "wasm32"))]
use crate::{PolymarketError, Result};

pub const DEFAULT_GAMMA_BASE_URL: &str = "https://gamma-api.polymarket.com";
pub const DEFAULT_DATA_BASE_URL: &str = "https://data-api.polymarket.com";
pub const DEFAULT_PNL_BASE_URL: &str = "https://user-pnl-api.polymarket.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_RETRY_COUNT: u32 = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1_000;
pub const DEFAULT_USER_AGENT: &str = concat!("polymarket-api/", env!("CARGO_PKG_VERSION"));

/// Partial client configuration. Unset fields take the defaults above.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Gamma API (events, markets, tags, search).
    pub gamma_base_url: Option<String>,
    /// Data API (positions, trades, activity).
    pub data_base_url: Option<String>,
    /// User PnL API (portfolio value history).
    pub pnl_base_url: Option<String>,
    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Total attempts per request, including the first.
    pub retry_count: Option<u32>,
    /// Constant pause between attempts in milliseconds.
    pub retry_delay_ms: Option<u64>,
    pub user_agent: Option<String>,
    pub log_level: Option<LogLevel>,
}

impl ClientOptions {
    /// Options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gamma_base_url(mut self, url: impl Into<String>) -> Self {
        self.gamma_base_url = Some(url.into());
        self
    }

    pub fn data_base_url(mut self, url: impl Into<String>) -> Self {
        self.data_base_url = Some(url.into());
        self
    }

    pub fn pnl_base_url(mut self, url: impl Into<String>) -> Self {
        self.pnl_base_url = Some(url.into());
        self
    }

    /// Per-attempt timeout in milliseconds.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Total attempts per request. `0` is treated as `1`.
    pub fn retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = Some(retry_count);
        self
    }

    /// Constant pause between attempts in milliseconds.
    pub fn retry_delay_ms(mut self, retry_delay_ms: u64) -> Self {
        self.retry_delay_ms = Some(retry_delay_ms);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Reads options from `POLYMARKET_*` environment variables.
    ///
    /// Reads:
    /// - `POLYMARKET_GAMMA_URL`, `POLYMARKET_DATA_URL`, `POLYMARKET_PNL_URL`
    /// - `POLYMARKET_TIMEOUT_MS`, `POLYMARKET_RETRY_COUNT`, `POLYMARKET_RETRY_DELAY_MS`
    /// - `POLYMARKET_USER_AGENT`, `POLYMARKET_LOG_LEVEL`
    ///
    /// Missing or blank variables stay unset. A value that does not parse is
    /// reported as a validation error naming the variable.
    ///
    /// **Not available on `wasm32` targets.**
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            gamma_base_url: env_string("POLYMARKET_GAMMA_URL"),
            data_base_url: env_string("POLYMARKET_DATA_URL"),
            pnl_base_url: env_string("POLYMARKET_PNL_URL"),
            timeout_ms: env_parse("POLYMARKET_TIMEOUT_MS")?,
            retry_count: env_parse("POLYMARKET_RETRY_COUNT")?,
            retry_delay_ms: env_parse("POLYMARKET_RETRY_DELAY_MS")?,
            user_agent: env_string("POLYMARKET_USER_AGENT"),
            log_level: env_string("POLYMARKET_LOG_LEVEL")
                .map(|value| {
                    value.parse::<LogLevel>().map_err(|_| {
                        PolymarketError::validation(
                            Some("POLYMARKET_LOG_LEVEL"),
                            format!("unknown log level '{value}'"),
                        )
                    })
                })
                .transpose()?,
        })
    }

    /// Merges these options over the defaults.
    pub fn resolve(&self) -> ResolvedConfig {
        ResolvedConfig {
            gamma_base_url: self
                .gamma_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_GAMMA_BASE_URL.to_owned()),
            data_base_url: self
                .data_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_DATA_BASE_URL.to_owned()),
            pnl_base_url: self
                .pnl_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_PNL_BASE_URL.to_owned()),
            timeout_ms: self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
            retry_count: self.retry_count.unwrap_or(DEFAULT_RETRY_COUNT).max(1),
            retry_delay_ms: self.retry_delay_ms.unwrap_or(DEFAULT_RETRY_DELAY_MS),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
            log_level: self.log_level.unwrap_or_default(),
        }
    }
}

/// Fully-defaulted configuration, fixed for the lifetime of a client.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub gamma_base_url: String,
    pub data_base_url: String,
    pub pnl_base_url: String,
    pub timeout_ms: u64,
    /// Always at least 1.
    pub retry_count: u32,
    pub retry_delay_ms: u64,
    pub user_agent: String,
    pub log_level: LogLevel,
}

impl ResolvedConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        ClientOptions::default().resolve()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_string(key)
        .map(|value| {
            value.parse::<T>().map_err(|err| {
                PolymarketError::validation(Some(key), format!("invalid value '{value}': {err}"))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::{ClientOptions, DEFAULT_USER_AGENT};
    use crate::LogLevel;

    #[test]
    fn defaults_fill_every_field() {
        let config = ClientOptions::default().resolve();
        assert_eq!(config.gamma_base_url, "https://gamma-api.polymarket.com");
        assert_eq!(config.data_base_url, "https://data-api.polymarket.com");
        assert_eq!(config.pnl_base_url, "https://user-pnl-api.polymarket.com");
        assert_eq!(config.timeout_ms, 30_000);
        assert_eq!(config.retry_count, 3);
        assert_eq!(config.retry_delay_ms, 1_000);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn user_values_override_defaults() {
        let config = ClientOptions::new()
            .timeout_ms(60_000)
            .retry_count(5)
            .log_level(LogLevel::Debug)
            .user_agent("my-bot/1.0")
            .resolve();
        assert_eq!(config.timeout_ms, 60_000);
        assert_eq!(config.retry_count, 5);
        assert_eq!(config.retry_delay_ms, 1_000);
        assert_eq!(config.user_agent, "my-bot/1.0");
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn zero_retry_count_still_makes_one_attempt() {
        assert_eq!(ClientOptions::new().retry_count(0).resolve().retry_count, 1);
    }

    #[test]
    fn partial_options_deserialize_from_json() {
        let options: ClientOptions =
            serde_json::from_str(r#"{"timeout_ms": 5000, "log_level": "warn"}"#)
                .expect("partial options must parse");
        assert_eq!(options.timeout_ms, Some(5000));
        assert_eq!(options.log_level, Some(LogLevel::Warn));
        assert_eq!(options.retry_count, None);
    }
}
