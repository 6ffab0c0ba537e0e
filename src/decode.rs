use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::{PolymarketError, Result};

/// Decodes a parsed body into the shape an accessor declares.
///
/// Mismatches surface as validation errors naming the endpoint path.
pub(crate) fn decode_body<T: DeserializeOwned>(path: &str, body: JsonValue) -> Result<T> {
    serde_json::from_value(body).map_err(|err| {
        PolymarketError::validation(None, format!("unexpected response shape from {path}: {err}"))
    })
}
