use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::{ParamValue, PolymarketError, Result};

/// Ordered query-parameter mapping of name to scalar.
///
/// May hold `Null` entries; they are removed by [`QueryParams::sanitize`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams(Vec<(String, ParamValue)>);

/// Query parameters after null removal, in wire form.
pub type SanitizedParams = Vec<(String, String)>;

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds parameters from name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Builds parameters from any struct that serializes to a flat JSON object.
    ///
    /// `None` fields become `Null` entries. Nested arrays or objects are
    /// rejected: multi-valued filters must be joined by the caller.
    pub fn from_serialize<T: Serialize + ?Sized>(params: &T) -> Result<Self> {
        let value = serde_json::to_value(params).map_err(|err| {
            PolymarketError::validation(None, format!("query parameters could not be encoded: {err}"))
        })?;

        let object = match value {
            JsonValue::Object(object) => object,
            JsonValue::Null => return Ok(Self::new()),
            other => {
                return Err(PolymarketError::validation(
                    None,
                    format!("query parameters must be an object, got {other}"),
                ))
            }
        };

        object
            .into_iter()
            .map(|(name, value)| {
                let value = scalar_from_json(&name, value)?;
                Ok((name, value))
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Appends a parameter, keeping insertion order.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.push((name.into(), value.into()));
    }

    /// Builder-style [`QueryParams::push`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.push(name, value);
        self
    }

    /// Replaces every entry named `name` with a single one.
    pub fn set(&mut self, name: &str, value: impl Into<ParamValue>) {
        self.0.retain(|(existing, _)| existing != name);
        self.0.push((name.to_owned(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Drops null entries and stringifies the rest.
    ///
    /// Returns `None` when nothing is left, so no query string is emitted.
    pub fn sanitize(&self) -> Option<SanitizedParams> {
        let cleaned: SanitizedParams = self
            .0
            .iter()
            .filter_map(|(name, value)| value.to_query_string().map(|text| (name.clone(), text)))
            .collect();
        (!cleaned.is_empty()).then_some(cleaned)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<K: Into<String>, V: Into<ParamValue>, const N: usize> From<[(K, V); N]> for QueryParams {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_pairs(pairs)
    }
}

impl From<()> for QueryParams {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

fn scalar_from_json(name: &str, value: JsonValue) -> Result<ParamValue> {
    match value {
        JsonValue::Null => Ok(ParamValue::Null),
        JsonValue::Bool(value) => Ok(ParamValue::Bool(value)),
        JsonValue::Number(number) => Ok(if let Some(value) = number.as_i64() {
            ParamValue::Integer(value)
        } else if let Some(value) = number.as_f64().filter(|_| !number.is_u64()) {
            ParamValue::Float(value)
        } else {
            ParamValue::Text(number.to_string())
        }),
        JsonValue::String(value) => Ok(ParamValue::Text(value)),
        JsonValue::Array(_) | JsonValue::Object(_) => Err(PolymarketError::validation(
            Some(name),
            "query parameters must be scalar; join multiple values before sending",
        )),
    }
}

/// Query parameters and JSON body for a single pipeline call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    pub params: Option<QueryParams>,
    /// Sent only with `POST` and `PUT`.
    pub body: Option<JsonValue>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the query parameters.
    pub fn params(mut self, params: impl Into<QueryParams>) -> Self {
        self.params = Some(params.into());
        self
    }

    /// Sets the JSON body. Ignored for `GET` and `DELETE`.
    pub fn body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use crate::{ErrorKind, ParamValue, QueryParams};

    #[test]
    fn sanitize_drops_nulls_and_stringifies() {
        let params = QueryParams::new()
            .with("active", true)
            .with("limit", 10)
            .with("order", None::<String>)
            .with("volume_num_min", 2.5)
            .with("slug", "fed-rates");

        let cleaned = params.sanitize().expect("must keep non-null entries");
        assert_eq!(
            cleaned,
            vec![
                ("active".to_owned(), "true".to_owned()),
                ("limit".to_owned(), "10".to_owned()),
                ("volume_num_min".to_owned(), "2.5".to_owned()),
                ("slug".to_owned(), "fed-rates".to_owned()),
            ]
        );
    }

    #[test]
    fn sanitize_all_null_means_no_parameters() {
        let params = QueryParams::from_pairs([("a", ParamValue::Null), ("b", ParamValue::Null)]);
        assert_eq!(params.sanitize(), None);
        assert_eq!(QueryParams::new().sanitize(), None);
    }

    #[derive(Serialize)]
    struct Filter {
        user: String,
        limit: Option<u32>,
        offset: Option<u32>,
        redeemable: Option<bool>,
    }

    #[test]
    fn from_serialize_keeps_none_as_null() {
        let params = QueryParams::from_serialize(&Filter {
            user: "0xabc".to_owned(),
            limit: Some(5),
            offset: None,
            redeemable: Some(false),
        })
        .expect("flat struct must encode");

        assert_eq!(params.get("user"), Some(&ParamValue::text("0xabc")));
        assert_eq!(params.get("limit"), Some(&ParamValue::Integer(5)));
        assert_eq!(params.get("offset"), Some(&ParamValue::Null));
        assert_eq!(params.sanitize().map(|p| p.len()), Some(3));
    }

    #[test]
    fn from_serialize_rejects_nested_values() {
        let err = QueryParams::from_serialize(&json!({"type": ["TRADE", "MERGE"]}))
            .expect_err("arrays must be joined by the caller");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.field(), Some("type"));
    }

    #[test]
    fn set_replaces_existing_entry() {
        let mut params = QueryParams::from([("type", "TRADE")]);
        params.set("type", "TRADE,MERGE");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("type"), Some(&ParamValue::text("TRADE,MERGE")));
    }
}
