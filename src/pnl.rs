//! User PnL API: portfolio value history.

use crate::{
    decode::decode_body,
    types::{PnlDataPoint, PnlPreset, UserPnlParams},
    HttpClient, QueryParams,
};

const COMPONENT: &str = "pnl";
const USER_PNL_PATH: &str = "/user-pnl";

/// Accessors for `user-pnl-api.polymarket.com`.
#[derive(Clone, Debug)]
pub struct UserPnlApi {
    http: HttpClient,
}

impl UserPnlApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// The pipeline bound to the PnL base URL.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Portfolio value history for one user.
    ///
    /// Never fails: any error, a `null` body or an unexpected shape yields an
    /// empty history. Callers that need to tell "no data" from "request
    /// failed" should use [`HttpClient::get_json`] through [`Self::http`].
    pub async fn user_pnl(&self, params: &UserPnlParams) -> Vec<PnlDataPoint> {
        match self.fetch(params).await {
            Ok(points) => points,
            Err(err) => {
                self.http.logger().debug(
                    COMPONENT,
                    &format!("PnL history unavailable for {}: {err}", params.user_address),
                );
                Vec::new()
            }
        }
    }

    /// Most recent portfolio value, using [`PnlPreset::QUICK_CHECK`].
    pub async fn latest_value(&self, address: &str) -> Option<f64> {
        let points = self
            .user_pnl(&PnlPreset::QUICK_CHECK.for_user(address))
            .await;
        points.last().map(|point| point.p)
    }

    /// Whether the account has any recorded history.
    pub async fn has_history(&self, address: &str) -> bool {
        !self
            .user_pnl(&PnlPreset::QUICK_CHECK.for_user(address))
            .await
            .is_empty()
    }

    async fn fetch(&self, params: &UserPnlParams) -> crate::Result<Vec<PnlDataPoint>> {
        let query = QueryParams::from_serialize(params)?;
        let body = self.http.get(USER_PNL_PATH, query).await?;
        let points: Option<Vec<PnlDataPoint>> = decode_body(USER_PNL_PATH, body)?;
        Ok(points.unwrap_or_default())
    }
}
