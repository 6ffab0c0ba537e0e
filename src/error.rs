use serde_json::Value as JsonValue;

/// Structural tag of a [`PolymarketError`].
///
/// Match on this (or on the error variants directly) instead of comparing
/// message strings.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    Api,
    RateLimit,
    Network,
    Timeout,
    Validation,
}

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum PolymarketError {
    /// Non-success HTTP status other than 429. Never retried.
    #[error("[{status}] {message}")]
    Api {
        status: u16,
        /// Body text, or its JSON serialization when the body parsed as JSON.
        message: String,
        /// Parsed JSON body, or the raw text as a JSON string.
        body: JsonValue,
    },
    /// HTTP 429. Never retried by the pipeline; inspect `retry_after` instead.
    #[error("[429] Rate limit exceeded")]
    RateLimit {
        /// `Retry-After` header value in seconds, when present and numeric.
        retry_after: Option<f64>,
        body: JsonValue,
    },
    /// Transport failure: DNS, refused or reset connection, broken body stream.
    #[error("{message}")]
    Network {
        message: String,
        source: Option<reqwest::Error>,
    },
    /// The per-attempt timeout guard fired before the transmission settled.
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
    /// Malformed input detected before transmission, or a response body that
    /// does not fit the declared shape.
    #[error("{}", validation_message(.field, .message))]
    Validation {
        field: Option<String>,
        message: String,
    },
}

fn validation_message(field: &Option<String>, message: &str) -> String {
    match field {
        Some(field) => format!("Field '{field}': {message}"),
        None => message.to_owned(),
    }
}

impl PolymarketError {
    pub(crate) fn validation(field: Option<&str>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.map(str::to_owned),
            message: message.into(),
        }
    }

    pub(crate) fn network(message: impl Into<String>, source: Option<reqwest::Error>) -> Self {
        Self::Network {
            message: message.into(),
            source,
        }
    }

    /// Returns the structural tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Api { .. } => ErrorKind::Api,
            Self::RateLimit { .. } => ErrorKind::RateLimit,
            Self::Network { .. } => ErrorKind::Network,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Validation { .. } => ErrorKind::Validation,
        }
    }

    /// True for every server rejection, rate limiting included.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::RateLimit { .. })
    }

    /// True for every transport failure, timeouts included.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }

    /// Transport failures are the only retryable outcome of an attempt.
    pub(crate) fn is_transient(&self) -> bool {
        self.is_network()
    }

    /// HTTP status of a server rejection.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::RateLimit { .. } => Some(429),
            _ => None,
        }
    }

    /// Server-provided wait hint in seconds for rate-limited requests.
    pub fn retry_after(&self) -> Option<f64> {
        match self {
            Self::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Name of the offending input for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    /// Response body carried by a server rejection.
    pub fn response_body(&self) -> Option<&JsonValue> {
        match self {
            Self::Api { body, .. } | Self::RateLimit { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ErrorKind, PolymarketError};

    #[test]
    fn rate_limit_is_an_api_error_at_429() {
        let err = PolymarketError::RateLimit {
            retry_after: Some(3.0),
            body: json!({"error": "slow down"}),
        };
        assert_eq!(err.kind(), ErrorKind::RateLimit);
        assert!(err.is_api());
        assert!(!err.is_network());
        assert_eq!(err.status_code(), Some(429));
        assert_eq!(err.retry_after(), Some(3.0));
        assert_eq!(err.to_string(), "[429] Rate limit exceeded");
    }

    #[test]
    fn timeout_is_a_network_error() {
        let err = PolymarketError::Timeout { timeout_ms: 250 };
        assert_eq!(err.kind(), ErrorKind::Timeout);
        assert!(err.is_network());
        assert!(err.is_transient());
        assert_eq!(err.status_code(), None);
        assert_eq!(err.to_string(), "Request timed out after 250ms");
    }

    #[test]
    fn api_error_display_carries_status() {
        let err = PolymarketError::Api {
            status: 404,
            message: "not found".to_owned(),
            body: json!("not found"),
        };
        assert_eq!(err.to_string(), "[404] not found");
        assert_eq!(err.response_body(), Some(&json!("not found")));
        assert!(!err.is_transient());
    }

    #[test]
    fn validation_display_prefixes_field() {
        let with_field = PolymarketError::validation(Some("limit"), "must be an integer");
        let without_field = PolymarketError::validation(None, "bad input");
        assert_eq!(with_field.to_string(), "Field 'limit': must be an integer");
        assert_eq!(with_field.field(), Some("limit"));
        assert_eq!(without_field.to_string(), "bad input");
        assert_eq!(without_field.field(), None);
    }
}
