use crate::{
    endpoint::required_segment,
    types::{Series, SeriesListParams},
    HttpClient, QueryParams, Result,
};

/// `/series` resources: recurring groups of events.
#[derive(Clone, Copy, Debug)]
pub struct SeriesApi<'a> {
    http: &'a HttpClient,
}

impl<'a> SeriesApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists series, paginated by `limit` and `offset`.
    pub async fn list(&self, params: &SeriesListParams) -> Result<Vec<Series>> {
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/series", params).await
    }

    /// `GET /series/{id}`.
    pub async fn get(&self, id: &str) -> Result<Series> {
        let path = format!("/series/{}", required_segment("id", id)?);
        self.http.get_json(&path, ()).await
    }
}
