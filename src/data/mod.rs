//! Data API: positions, trades, activity and leaderboards.

mod builders;
mod misc;
mod trading;

pub use builders::BuildersApi;

use crate::{types::StatusResponse, HttpClient, PolymarketError, Result};

/// Accessors for `data-api.polymarket.com`.
#[derive(Clone, Debug)]
pub struct DataApi {
    http: HttpClient,
}

impl DataApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// The pipeline bound to the Data base URL.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// `GET /`.
    pub async fn health_check(&self) -> Result<StatusResponse> {
        self.http.get_json("/", ()).await
    }

    /// Builder leaderboard and volume.
    pub fn builders(&self) -> BuildersApi<'_> {
        BuildersApi::new(&self.http)
    }
}

/// Rejects a blank value for a parameter the endpoint requires.
fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PolymarketError::validation(Some(field), "is required"));
    }
    Ok(())
}
