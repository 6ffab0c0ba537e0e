use crate::{
    types::{SportsMarketType, SportsMetadata, Team},
    HttpClient, Result,
};

/// Sports reference data.
#[derive(Clone, Copy, Debug)]
pub struct SportsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> SportsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `GET /teams`.
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        self.http.get_json("/teams", ()).await
    }

    /// `GET /sports-metadata`: known sports and leagues.
    pub async fn metadata(&self) -> Result<SportsMetadata> {
        self.http.get_json("/sports-metadata", ()).await
    }

    /// `GET /sports-market-types`.
    pub async fn market_types(&self) -> Result<Vec<SportsMarketType>> {
        self.http.get_json("/sports-market-types", ()).await
    }
}
