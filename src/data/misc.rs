use super::{require, DataApi};
use crate::{
    types::{
        LiveVolume, LiveVolumeParams, OpenInterest, OpenInterestParams, TradedMarket,
        TradedMarketsParams,
    },
    QueryParams, Result,
};

impl DataApi {
    /// Markets a user has traded in.
    pub async fn traded_markets(&self, params: &TradedMarketsParams) -> Result<Vec<TradedMarket>> {
        require("user", &params.user)?;
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/traded-markets", params).await
    }

    /// `GET /oi`, optionally narrowed to one market.
    pub async fn open_interest(&self, params: &OpenInterestParams) -> Result<Vec<OpenInterest>> {
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/oi", params).await
    }

    /// `GET /live-volume` for one event.
    ///
    /// Fails with a validation error when `event_id` is blank.
    pub async fn live_volume(&self, params: &LiveVolumeParams) -> Result<LiveVolume> {
        require("eventId", &params.event_id)?;
        let params = QueryParams::from_serialize(params)?;
        self.http.get_json("/live-volume", params).await
    }
}
