use crate::{
    endpoint::required_segment,
    types::{Market, MarketsListParams, Tag},
    HttpClient, QueryParams, Result,
};

/// `/markets` resources.
#[derive(Clone, Copy, Debug)]
pub struct MarketsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> MarketsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists markets matching `params`. Unset filters are not sent.
    pub async fn list(&self, params: &MarketsListParams) -> Result<Vec<Market>> {
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/markets", params).await
    }

    /// `GET /markets/{id}`. A blank `id` fails before sending.
    pub async fn get(&self, id: &str) -> Result<Market> {
        let path = format!("/markets/{}", required_segment("id", id)?);
        self.http.get_json(&path, ()).await
    }

    /// `GET /markets/slug/{slug}`. The slug is percent-encoded.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Market> {
        let path = format!("/markets/slug/{}", required_segment("slug", slug)?);
        self.http.get_json(&path, ()).await
    }

    /// Tags attached to one market.
    pub async fn tags(&self, id: &str) -> Result<Vec<Tag>> {
        let path = format!("/markets/{}/tags", required_segment("id", id)?);
        self.http.get_json(&path, ()).await
    }
}
