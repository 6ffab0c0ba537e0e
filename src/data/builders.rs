use super::require;
use crate::{
    types::{BuilderLeaderboardEntry, BuilderLeaderboardParams, BuilderVolume, BuilderVolumeParams},
    HttpClient, QueryParams, Result,
};

/// `/builders` resources.
#[derive(Clone, Copy, Debug)]
pub struct BuildersApi<'a> {
    http: &'a HttpClient,
}

impl<'a> BuildersApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `GET /builders/leaderboard`, ranked by volume.
    pub async fn leaderboard(
        &self,
        params: &BuilderLeaderboardParams,
    ) -> Result<Vec<BuilderLeaderboardEntry>> {
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/builders/leaderboard", params).await
    }

    /// `GET /builders/volume` for one builder address.
    ///
    /// Fails with a validation error when `address` is blank.
    pub async fn volume(&self, params: &BuilderVolumeParams) -> Result<BuilderVolume> {
        require("address", &params.address)?;
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/builders/volume", params).await
    }
}
