use super::{require, DataApi};
use crate::{
    types::{
        Activity, ActivityParams, ClosedPosition, ClosedPositionsParams, HoldersParams,
        LeaderboardEntry, LeaderboardParams, Position, PositionValue, PositionsParams,
        PositionsValueParams, TokenHolders, Trade, TradesParams,
    },
    QueryParams, Result,
};

impl DataApi {
    /// Open positions of one user.
    pub async fn positions(&self, params: &PositionsParams) -> Result<Vec<Position>> {
        require("user", &params.user)?;
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/positions", params).await
    }

    /// `GET /trades`, filtered by user, market or event when set.
    pub async fn trades(&self, params: &TradesParams) -> Result<Vec<Trade>> {
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/trades", params).await
    }

    /// On-chain activity.
    ///
    /// A multi-kind type filter is sent as one comma-joined `type` value,
    /// e.g. `type=TRADE,MERGE`.
    pub async fn activity(&self, params: &ActivityParams) -> Result<Vec<Activity>> {
        let mut query = QueryParams::from_serialize(params)?;
        if let Some(filter) = &params.activity_type {
            query.set("type", filter.to_query_value());
        }
        self.http.get_json("/activity", query).await
    }

    /// Top holders per outcome token of a market.
    pub async fn holders(&self, params: &HoldersParams) -> Result<Vec<TokenHolders>> {
        require("market", &params.market)?;
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/holders", params).await
    }

    /// Total value of a user's positions. Upstream wraps it in a list.
    pub async fn positions_value(&self, params: &PositionsValueParams) -> Result<Vec<PositionValue>> {
        require("user", &params.user)?;
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/value", params).await
    }

    /// `GET /v1/closed-positions` for one user.
    pub async fn closed_positions(
        &self,
        params: &ClosedPositionsParams,
    ) -> Result<Vec<ClosedPosition>> {
        require("user", &params.user)?;
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/v1/closed-positions", params).await
    }

    /// `GET /v1/leaderboard`, trader rankings by volume or PnL.
    pub async fn leaderboard(&self, params: &LeaderboardParams) -> Result<Vec<LeaderboardEntry>> {
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/v1/leaderboard", params).await
    }
}
