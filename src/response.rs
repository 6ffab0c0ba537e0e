//! Response parsing and status classification.
//!
//! Both functions are pure: they know nothing about attempts or retries.

use serde_json::Value as JsonValue;

use crate::{PolymarketError, Result};

/// Parses a body as JSON, falling back to the raw text as a JSON string.
pub fn parse_body(text: String) -> JsonValue {
    serde_json::from_str(&text).unwrap_or(JsonValue::String(text))
}

/// Maps a settled response to its body or a server-rejection error.
///
/// - `2xx` returns `body` unchanged, even when it is plain text.
/// - `429` becomes [`PolymarketError::RateLimit`] with the `Retry-After` hint.
/// - Anything else becomes [`PolymarketError::Api`].
pub fn classify(status: u16, retry_after: Option<&str>, body: JsonValue) -> Result<JsonValue> {
    match status {
        200..=299 => Ok(body),
        429 => Err(PolymarketError::RateLimit {
            retry_after: retry_after.and_then(parse_retry_after),
            body,
        }),
        _ => Err(PolymarketError::Api {
            status,
            message: body_message(&body),
            body,
        }),
    }
}

/// Numeric `Retry-After` seconds. HTTP-date values yield no hint.
fn parse_retry_after(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
}

fn body_message(body: &JsonValue) -> String {
    match body {
        JsonValue::String(text) => text.clone(),
        other => other.to_string(),
    }
}
