//! Request pipeline: sanitize, build URL, send under a timeout, retry
//! transport failures, classify the response.

use std::{fmt, sync::Arc};

use reqwest::header::{ACCEPT, CONTENT_TYPE, RETRY_AFTER, USER_AGENT};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use url::Url;

// tokio::time::sleep is only available on non-WASM targets.
#[cfg(not(target_arch = "wasm32"))]
use tokio::time::sleep;

use crate::{
    decode::decode_body,
    endpoint::build_url,
    logger::{Logger, TracingLogger},
    response::{classify, parse_body},
    PolymarketError, QueryParams, RequestOptions, ResolvedConfig, Result,
};

const COMPONENT: &str = "http";

/// HTTP verbs the pipeline issues.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Upper-case method token as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Only `POST` and `PUT` carry a request body.
    pub fn allows_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Request pipeline bound to one API base URL.
///
/// Cheap to clone. Holds no mutable state, so one instance can serve any
/// number of concurrent requests.
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    config: Arc<ResolvedConfig>,
    logger: Arc<dyn Logger>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .field("logger", &self.logger)
            .finish()
    }
}

impl HttpClient {
    /// Creates a pipeline with its own connection pool and a
    /// [`TracingLogger`] at the configured level.
    pub fn new(config: Arc<ResolvedConfig>, base_url: impl Into<String>) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new(config.log_level));
        Self::with_parts(reqwest::Client::new(), config, base_url, logger)
    }

    /// Creates a pipeline from explicit collaborators.
    ///
    /// A trailing `/` on `base_url` is removed.
    pub fn with_parts(
        http: reqwest::Client,
        config: Arc<ResolvedConfig>,
        base_url: impl Into<String>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            config,
            logger,
        }
    }

    /// Replaces the logger collaborator.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Base URL without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Timeout, retry and header settings applied to every request.
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub(crate) fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    /// `GET path` with query parameters.
    pub async fn get(&self, path: &str, params: impl Into<QueryParams>) -> Result<JsonValue> {
        self.request(HttpMethod::Get, path, RequestOptions::new().params(params))
            .await
    }

    /// `POST path` with an optional JSON body and query parameters.
    pub async fn post(
        &self,
        path: &str,
        body: Option<JsonValue>,
        params: impl Into<QueryParams>,
    ) -> Result<JsonValue> {
        let options = RequestOptions {
            params: Some(params.into()),
            body,
        };
        self.request(HttpMethod::Post, path, options).await
    }

    /// `GET path`, decoded into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: impl Into<QueryParams>,
    ) -> Result<T> {
        let body = self.get(path, params).await?;
        decode_body(path, body)
    }

    /// Sends a request and returns the parsed body.
    ///
    /// Up to `retry_count` attempts are made, `retry_delay` apart. Only
    /// timeouts and other transport failures are retried; any HTTP error
    /// status, 429 included, is returned after the first attempt.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<JsonValue> {
        let params = options.params.as_ref().and_then(QueryParams::sanitize);
        let url = build_url(&self.base_url, path, params.as_ref())?;
        let body = match options.body {
            Some(body) if method.allows_body() => Some(serde_json::to_string(&body).map_err(
                |err| {
                    PolymarketError::validation(
                        Some("body"),
                        format!("request body could not be encoded: {err}"),
                    )
                },
            )?),
            _ => None,
        };

        let attempts = self.config.retry_count.max(1);
        let mut last_error = None;

        for attempt in 1..=attempts {
            self.logger.debug(
                COMPONENT,
                &format!("Request: {method} {url} (attempt {attempt}/{attempts})"),
            );

            match self.send_once(method, &url, body.as_deref()).await {
                Ok(value) => return Ok(value),
                Err(err) if !err.is_transient() => return Err(err),
                Err(err) => {
                    self.logger.warn(
                        COMPONENT,
                        &format!("{} on attempt {attempt}/{attempts}: {err}", failure_label(&err)),
                    );
                    last_error = Some(err);
                    if attempt < attempts {
                        self.wait_before_retry().await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            PolymarketError::network("Request failed after all retries", None)
        }))
    }

    async fn send_once(
        &self,
        method: HttpMethod,
        url: &Url,
        body: Option<&str>,
    ) -> Result<JsonValue> {
        // The per-request timeout covers connect, headers and the body read.
        // On WASM, reqwest implements it with an AbortController.
        let mut request = self
            .http
            .request(method.into(), url.clone())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, self.config.user_agent.as_str())
            .timeout(self.config.timeout());
        if let Some(body) = body {
            request = request.body(body.to_owned());
        }

        let response = request
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;
        let status = response.status();
        self.logger.debug(COMPONENT, &format!("Response: {status}"));

        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let text = response
            .text()
            .await
            .map_err(|err| self.transport_error(err))?;

        classify(status.as_u16(), retry_after.as_deref(), parse_body(text))
    }

    fn transport_error(&self, err: reqwest::Error) -> PolymarketError {
        if err.is_timeout() {
            return PolymarketError::Timeout {
                timeout_ms: self.config.timeout_ms,
            };
        }
        if err.is_builder() {
            return PolymarketError::validation(None, format!("request could not be built: {err}"));
        }
        if is_connect(&err) {
            PolymarketError::network(format!("Connection failed: {err}"), Some(err))
        } else {
            PolymarketError::network(format!("HTTP error: {err}"), Some(err))
        }
    }

    /// Waits the configured constant delay before the next attempt.
    async fn wait_before_retry(&self) {
        let delay = self.config.retry_delay();

        #[cfg(not(target_arch = "wasm32"))]
        sleep(delay).await;

        #[cfg(target_arch = "wasm32")]
        futures_timer::Delay::new(delay).await;
    }
}

fn is_connect(err: &reqwest::Error) -> bool {
    // is_connect() is not available on wasm32 targets (no TCP)
    #[cfg(not(target_arch = "wasm32"))]
    {
        err.is_connect()
    }
    #[cfg(target_arch = "wasm32")]
    {
        let _ = err;
        false
    }
}

fn failure_label(err: &PolymarketError) -> &'static str {
    match err {
        PolymarketError::Timeout { .. } => "Timeout",
        _ => "Network error",
    }
}
