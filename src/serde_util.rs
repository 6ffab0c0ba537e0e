//! Lenient field decoders for upstream JSON.
//!
//! The upstream APIs are loosely typed: identifiers arrive as strings or
//! numbers, and required fields are sometimes `null`. These helpers accept
//! both spellings and fall back to the type's default on `null`.

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// String from a JSON string, number or bool; `null` becomes `""`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<JsonValue>::deserialize(deserializer)? {
        None | Some(JsonValue::Null) => Ok(String::new()),
        Some(JsonValue::String(value)) => Ok(value),
        Some(JsonValue::Number(value)) => Ok(value.to_string()),
        Some(JsonValue::Bool(value)) => Ok(value.to_string()),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

/// `f64` from a JSON number or numeric string; `null` becomes `0.0`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<JsonValue>::deserialize(deserializer)? {
        None | Some(JsonValue::Null) => Ok(0.0),
        Some(JsonValue::Number(value)) => value
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom(format!("number out of range: {value}"))),
        Some(JsonValue::String(value)) if value.trim().is_empty() => Ok(0.0),
        Some(JsonValue::String(value)) => value
            .trim()
            .parse::<f64>()
            .map_err(|err| serde::de::Error::custom(format!("invalid number '{value}': {err}"))),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a number, got {other}"
        ))),
    }
}

/// `i64` from a JSON integer or integer string; `null` becomes `0`.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<JsonValue>::deserialize(deserializer)? {
        None | Some(JsonValue::Null) => Ok(0),
        Some(JsonValue::Number(value)) => value
            .as_i64()
            .or_else(|| value.as_f64().map(|float| float as i64))
            .ok_or_else(|| serde::de::Error::custom(format!("integer out of range: {value}"))),
        Some(JsonValue::String(value)) => value
            .trim()
            .parse::<i64>()
            .map_err(|err| serde::de::Error::custom(format!("invalid integer '{value}': {err}"))),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected an integer, got {other}"
        ))),
    }
}

/// Optional `f64` from a JSON number or numeric string.
///
/// `null`, a missing field and a blank string are `None`.
pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<JsonValue>::deserialize(deserializer)? {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(value)) if value.trim().is_empty() => Ok(None),
        Some(value) => lenient_f64(value).map(Some).map_err(serde::de::Error::custom),
    }
}

/// Optional `i64` from a JSON integer or integer string; `null` is `None`.
pub fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<JsonValue>::deserialize(deserializer)? {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(value)) if value.trim().is_empty() => Ok(None),
        Some(value) => lenient_i64(value).map(Some).map_err(serde::de::Error::custom),
    }
}

/// `bool` that treats `null` as `false`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}
