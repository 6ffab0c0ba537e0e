use std::{fmt, sync::Arc};

use crate::{
    data::DataApi,
    gamma::GammaApi,
    logger::{Logger, TracingLogger},
    pnl::UserPnlApi,
    ClientOptions, HttpClient, ResolvedConfig,
};

/// Entry point for the Gamma, Data and User PnL APIs.
///
/// One pipeline per base URL; all three share a connection pool, the
/// resolved configuration and the logger.
#[derive(Clone)]
pub struct PolymarketClient {
    config: Arc<ResolvedConfig>,
    gamma: GammaApi,
    data: DataApi,
    pnl: UserPnlApi,
}

impl fmt::Debug for PolymarketClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolymarketClient")
            .field("gamma_base_url", &self.config.gamma_base_url)
            .field("data_base_url", &self.config.data_base_url)
            .field("pnl_base_url", &self.config.pnl_base_url)
            .field("timeout_ms", &self.config.timeout_ms)
            .field("retry_count", &self.config.retry_count)
            .finish()
    }
}

impl Default for PolymarketClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PolymarketClient {
    /// Creates a client against the public Polymarket endpoints.
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    /// Creates a client from partial options; unset fields take defaults.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use polymarket_api::{ClientOptions, LogLevel, PolymarketClient};
    ///
    /// let client = PolymarketClient::with_options(
    ///     ClientOptions::new()
    ///         .timeout_ms(10_000)
    ///         .retry_count(5)
    ///         .log_level(LogLevel::Debug),
    /// );
    /// ```
    pub fn with_options(options: ClientOptions) -> Self {
        let config = Arc::new(options.resolve());
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new(config.log_level));
        Self::build(config, logger)
    }

    /// Creates a client from `POLYMARKET_*` environment variables.
    ///
    /// **Not available on `wasm32` targets.** See [`ClientOptions::from_env`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> crate::Result<Self> {
        Ok(Self::with_options(ClientOptions::from_env()?))
    }

    /// Routes diagnostics of all three pipelines to `logger`.
    pub fn with_logger(self, logger: Arc<dyn Logger>) -> Self {
        Self::build(self.config, logger)
    }

    fn build(config: Arc<ResolvedConfig>, logger: Arc<dyn Logger>) -> Self {
        let http = reqwest::Client::new();
        let pipeline = |base_url: &str| {
            HttpClient::with_parts(http.clone(), Arc::clone(&config), base_url, Arc::clone(&logger))
        };

        Self {
            gamma: GammaApi::new(pipeline(&config.gamma_base_url)),
            data: DataApi::new(pipeline(&config.data_base_url)),
            pnl: UserPnlApi::new(pipeline(&config.pnl_base_url)),
            config: Arc::clone(&config),
        }
    }

    /// Configuration shared by every pipeline of this client.
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Market discovery: events, markets, tags, series, comments, search.
    pub fn gamma(&self) -> &GammaApi {
        &self.gamma
    }

    /// Positions, trades, activity and leaderboards.
    pub fn data(&self) -> &DataApi {
        &self.data
    }

    /// Portfolio value history.
    pub fn pnl(&self) -> &UserPnlApi {
        &self.pnl
    }
}
