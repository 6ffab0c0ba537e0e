//! `polymarket-api` is an async, typed client for Polymarket's public REST APIs.
//!
//! Three services are covered, each behind its own accessor:
//! - [`PolymarketClient::gamma`]: events, markets, tags, series, comments, search
//! - [`PolymarketClient::data`]: positions, trades, activity, leaderboards
//! - [`PolymarketClient::pnl`]: portfolio value history
//!
//! All requests go through one pipeline ([`HttpClient`]) that drops unset
//! query parameters, applies a per-attempt timeout, retries transport failures
//! with a constant delay and maps responses into [`PolymarketError`].
//!
//! ```no_run
//! use polymarket_api::{EventsListParams, PolymarketClient};
//!
//! # async fn run() -> polymarket_api::Result<()> {
//! let client = PolymarketClient::new();
//! let events = client
//!     .gamma()
//!     .events()
//!     .list(&EventsListParams {
//!         active: Some(true),
//!         limit: Some(5),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{} active events", events.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod decode;
mod endpoint;
mod error;
mod http;
mod logger;
mod options;
mod params;
mod response;
mod serde_util;
mod value;

pub mod data;
pub mod gamma;
pub mod pnl;
pub mod types;

pub use client::PolymarketClient;
pub use data::DataApi;
pub use endpoint::build_url;
pub use error::{ErrorKind, PolymarketError};
pub use gamma::GammaApi;
pub use http::{HttpClient, HttpMethod};
pub use logger::{LogLevel, Logger, NoopLogger, TracingLogger};
pub use options::{
    ClientOptions, ResolvedConfig, DEFAULT_DATA_BASE_URL, DEFAULT_GAMMA_BASE_URL,
    DEFAULT_PNL_BASE_URL, DEFAULT_RETRY_COUNT, DEFAULT_RETRY_DELAY_MS, DEFAULT_TIMEOUT_MS,
    DEFAULT_USER_AGENT,
};
pub use params::{QueryParams, RequestOptions, SanitizedParams};
pub use pnl::UserPnlApi;
pub use response::{classify, parse_body};
pub use types::*;
pub use value::ParamValue;

pub type Result<T> = std::result::Result<T, PolymarketError>;

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
