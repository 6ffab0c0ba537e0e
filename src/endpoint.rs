//! URL construction for pipeline requests.

use url::Url;

use crate::{params::SanitizedParams, PolymarketError, Result};

/// Resolves `path` against `base_url` and appends `params` as a query string.
///
/// Resolution follows standard relative-reference rules: a path starting with
/// `/` replaces the base path, and an absolute URL replaces the base entirely.
/// Each parameter is appended once with form-style percent-encoding.
pub fn build_url(base_url: &str, path: &str, params: Option<&SanitizedParams>) -> Result<Url> {
    let base = Url::parse(base_url).map_err(|err| {
        PolymarketError::validation(Some("base_url"), format!("invalid base URL '{base_url}': {err}"))
    })?;
    let mut url = base.join(path).map_err(|err| {
        PolymarketError::validation(Some("path"), format!("invalid request path '{path}': {err}"))
    })?;

    if let Some(params) = params {
        let mut query = url.query_pairs_mut();
        for (name, value) in params {
            query.append_pair(name, value);
        }
    }

    Ok(url)
}

/// Percent-encodes caller input interpolated into a path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value.trim()).into_owned()
}

/// Like [`segment`], but rejects blank input naming `field`.
pub(crate) fn required_segment(field: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(PolymarketError::validation(Some(field), "must not be empty"));
    }
    Ok(segment(value))
}
