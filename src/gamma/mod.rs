//! Gamma API: market discovery and metadata.
//!
//! Every accessor is a thin wrapper over [`HttpClient::get_json`]; grouping
//! mirrors the upstream resource layout.

mod comments;
mod events;
mod markets;
mod profiles;
mod series;
mod sports;
mod tags;

pub use comments::CommentsApi;
pub use events::EventsApi;
pub use markets::MarketsApi;
pub use profiles::ProfilesApi;
pub use series::SeriesApi;
pub use sports::SportsApi;
pub use tags::TagsApi;

use crate::{
    types::{SearchParams, SearchResult, StatusResponse},
    HttpClient, QueryParams, Result,
};

/// Accessors for `gamma-api.polymarket.com`.
#[derive(Clone, Debug)]
pub struct GammaApi {
    http: HttpClient,
}

impl GammaApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// The pipeline bound to the Gamma base URL.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// `GET /status`. A bare `OK` text body decodes as the status value.
    pub async fn health_check(&self) -> Result<StatusResponse> {
        self.http.get_json("/status", ()).await
    }

    /// Teams, sports metadata and sports market types.
    pub fn sports(&self) -> SportsApi<'_> {
        SportsApi::new(&self.http)
    }

    /// `/tags` resources.
    pub fn tags(&self) -> TagsApi<'_> {
        TagsApi::new(&self.http)
    }

    /// `/events` resources.
    pub fn events(&self) -> EventsApi<'_> {
        EventsApi::new(&self.http)
    }

    /// `/markets` resources.
    pub fn markets(&self) -> MarketsApi<'_> {
        MarketsApi::new(&self.http)
    }

    /// `/series` resources.
    pub fn series(&self) -> SeriesApi<'_> {
        SeriesApi::new(&self.http)
    }

    /// `/comments` resources.
    pub fn comments(&self) -> CommentsApi<'_> {
        CommentsApi::new(&self.http)
    }

    /// Public user profiles.
    pub fn profiles(&self) -> ProfilesApi<'_> {
        ProfilesApi::new(&self.http)
    }

    /// Full-text search across events, markets and tags.
    ///
    /// `query` is sent first, followed by the optional `limit`.
    pub async fn search(&self, query: &str, params: &SearchParams) -> Result<SearchResult> {
        let params = QueryParams::new()
            .with("query", query)
            .with("limit", params.limit);
        self.http.get_json("/search", params).await
    }
}
