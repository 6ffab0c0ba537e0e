//! Data API shapes: positions, trades, activity, holders, leaderboards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::serde_util::{
    lenient_bool, lenient_f64, lenient_i64, lenient_opt_f64, lenient_opt_i64, lenient_string,
};

// ── Filter enums ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionSortBy {
    Current,
    Initial,
    Tokens,
    CashPnl,
    PercentPnl,
    Title,
    Resolving,
    Price,
    AvgPrice,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeFilterType {
    Cash,
    Tokens,
}

/// On-chain activity kind. Kinds this crate does not know decode as `Unknown`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Trade,
    Split,
    Merge,
    Redeem,
    Reward,
    Conversion,
    MakerRebate,
    #[serde(other)]
    Unknown,
}

impl ActivityType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trade => "TRADE",
            Self::Split => "SPLIT",
            Self::Merge => "MERGE",
            Self::Redeem => "REDEEM",
            Self::Reward => "REWARD",
            Self::Conversion => "CONVERSION",
            Self::MakerRebate => "MAKER_REBATE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity-type filter: one kind, or an ordered list sent comma-joined.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ActivityTypeFilter {
    One(ActivityType),
    Many(Vec<ActivityType>),
}

impl ActivityTypeFilter {
    /// Wire form: `"TRADE"` or `"TRADE,MERGE"`.
    pub fn to_query_value(&self) -> String {
        match self {
            Self::One(kind) => kind.as_str().to_owned(),
            Self::Many(kinds) => kinds
                .iter()
                .map(|kind| kind.as_str())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl From<ActivityType> for ActivityTypeFilter {
    fn from(kind: ActivityType) -> Self {
        Self::One(kind)
    }
}

impl From<Vec<ActivityType>> for ActivityTypeFilter {
    fn from(kinds: Vec<ActivityType>) -> Self {
        Self::Many(kinds)
    }
}

impl<const N: usize> From<[ActivityType; N]> for ActivityTypeFilter {
    fn from(kinds: [ActivityType; N]) -> Self {
        Self::Many(kinds.into())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivitySortBy {
    Timestamp,
    Tokens,
    Cash,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClosedPositionSortBy {
    RealizedPnl,
    Title,
    Price,
    AvgPrice,
    Timestamp,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaderboardCategory {
    Overall,
    Politics,
    Sports,
    Crypto,
    Culture,
    Mentions,
    Weather,
    Economics,
    Tech,
    Finance,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaderboardTimePeriod {
    Day,
    Week,
    Month,
    All,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaderboardOrderBy {
    Pnl,
    Vol,
}

// ── Responses ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Position {
    #[serde(deserialize_with = "lenient_string")]
    pub proxy_wallet: String,
    #[serde(deserialize_with = "lenient_string")]
    pub asset: String,
    #[serde(deserialize_with = "lenient_string")]
    pub condition_id: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub size: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub avg_price: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub initial_value: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub current_value: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub cash_pnl: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub percent_pnl: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_bought: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub realized_pnl: f64,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub percent_realized_pnl: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub cur_price: f64,
    #[serde(deserialize_with = "lenient_bool")]
    pub redeemable: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub mergeable: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub slug: String,
    pub icon: Option<String>,
    pub event_slug: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub outcome: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub outcome_index: i64,
    pub opposite_outcome: Option<String>,
    pub opposite_asset: Option<String>,
    pub end_date: Option<String>,
    pub negative_risk: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trade {
    #[serde(deserialize_with = "lenient_string")]
    pub proxy_wallet: String,
    pub side: Option<TradeSide>,
    #[serde(deserialize_with = "lenient_string")]
    pub asset: String,
    #[serde(deserialize_with = "lenient_string")]
    pub condition_id: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub size: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(deserialize_with = "lenient_i64")]
    pub timestamp: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub slug: String,
    pub icon: Option<String>,
    pub event_slug: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub outcome: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub outcome_index: i64,
    pub name: Option<String>,
    pub pseudonym: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub profile_image_optimized: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub transaction_hash: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    #[serde(deserialize_with = "lenient_string")]
    pub proxy_wallet: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub timestamp: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub condition_id: String,
    #[serde(rename = "type")]
    pub activity_type: Option<ActivityType>,
    #[serde(deserialize_with = "lenient_f64")]
    pub size: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub usdc_size: f64,
    #[serde(deserialize_with = "lenient_string")]
    pub transaction_hash: String,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub price: Option<f64>,
    pub asset: Option<String>,
    pub side: Option<TradeSide>,
    #[serde(deserialize_with = "lenient_opt_i64")]
    pub outcome_index: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub slug: String,
    pub icon: Option<String>,
    pub event_slug: Option<String>,
    pub outcome: Option<String>,
    pub name: Option<String>,
    pub pseudonym: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub profile_image_optimized: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Holder {
    #[serde(deserialize_with = "lenient_string")]
    pub proxy_wallet: String,
    pub bio: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub asset: String,
    pub pseudonym: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,
    pub display_username_public: Option<bool>,
    #[serde(deserialize_with = "lenient_i64")]
    pub outcome_index: i64,
    pub name: Option<String>,
    pub profile_image: Option<String>,
    pub profile_image_optimized: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenHolders {
    #[serde(deserialize_with = "lenient_string")]
    pub token: String,
    pub holders: Vec<Holder>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionValue {
    #[serde(deserialize_with = "lenient_string")]
    pub user: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub value: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClosedPosition {
    #[serde(deserialize_with = "lenient_string")]
    pub proxy_wallet: String,
    #[serde(deserialize_with = "lenient_string")]
    pub asset: String,
    #[serde(deserialize_with = "lenient_string")]
    pub condition_id: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub avg_price: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_bought: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub realized_pnl: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub cur_price: f64,
    #[serde(deserialize_with = "lenient_i64")]
    pub timestamp: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub slug: String,
    pub icon: Option<String>,
    pub event_slug: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub outcome: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub outcome_index: i64,
    pub opposite_outcome: Option<String>,
    pub opposite_asset: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderboardEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub rank: String,
    #[serde(deserialize_with = "lenient_string")]
    pub proxy_wallet: String,
    #[serde(deserialize_with = "lenient_string")]
    pub user_name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub vol: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub pnl: f64,
    pub profile_image: Option<String>,
    pub x_username: Option<String>,
    pub verified_badge: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradedMarket {
    #[serde(deserialize_with = "lenient_string")]
    pub condition_id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub slug: String,
    pub icon: Option<String>,
    pub event_slug: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpenInterest {
    #[serde(deserialize_with = "lenient_string")]
    pub condition_id: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub open_interest: f64,
    #[serde(deserialize_with = "lenient_i64")]
    pub timestamp: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveVolume {
    #[serde(deserialize_with = "lenient_string")]
    pub event_id: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub volume: f64,
    #[serde(deserialize_with = "lenient_i64")]
    pub timestamp: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderLeaderboardEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub rank: String,
    #[serde(deserialize_with = "lenient_string")]
    pub address: String,
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub volume: f64,
    #[serde(deserialize_with = "lenient_i64")]
    pub markets_created: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderVolume {
    #[serde(deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub volume: f64,
    #[serde(deserialize_with = "lenient_string")]
    pub period: String,
}

// ── Query parameters ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionsParams {
    pub user: String,
    pub market: Option<String>,
    pub event_id: Option<String>,
    pub size_threshold: Option<f64>,
    pub redeemable: Option<bool>,
    pub mergeable: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort_by: Option<PositionSortBy>,
    pub sort_direction: Option<SortDirection>,
    pub title: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesParams {
    pub user: Option<String>,
    pub market: Option<String>,
    pub event_id: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub taker_only: Option<bool>,
    pub filter_type: Option<TradeFilterType>,
    pub filter_amount: Option<f64>,
    pub side: Option<TradeSide>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityParams {
    pub user: Option<String>,
    pub market: Option<String>,
    pub event_id: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Sent as `type`, comma-joined when several kinds are given.
    #[serde(skip)]
    pub activity_type: Option<ActivityTypeFilter>,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub sort_by: Option<ActivitySortBy>,
    pub sort_direction: Option<SortDirection>,
    pub side: Option<TradeSide>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldersParams {
    pub market: String,
    pub limit: Option<u32>,
    pub min_balance: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionsValueParams {
    pub user: String,
    pub market: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosedPositionsParams {
    pub user: String,
    pub market: Option<String>,
    pub event_id: Option<String>,
    pub title: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort_by: Option<ClosedPositionSortBy>,
    pub sort_direction: Option<SortDirection>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardParams {
    pub category: Option<LeaderboardCategory>,
    pub time_period: Option<LeaderboardTimePeriod>,
    pub order_by: Option<LeaderboardOrderBy>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub user: Option<String>,
    pub user_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradedMarketsParams {
    pub user: String,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenInterestParams {
    pub market: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveVolumeParams {
    pub event_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderLeaderboardParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub period: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderVolumeParams {
    pub address: String,
    pub period: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{
        Activity, ActivityType, ActivityTypeFilter, ClosedPositionSortBy, Position,
        PositionSortBy, TradeSide,
    };

    #[test]
    fn filter_enums_use_upstream_tokens() {
        let encode = |value: serde_json::Value| value.as_str().map(str::to_owned);
        assert_eq!(
            encode(serde_json::to_value(PositionSortBy::CashPnl).expect("encode")),
            Some("CASHPNL".to_owned())
        );
        assert_eq!(
            encode(serde_json::to_value(ClosedPositionSortBy::RealizedPnl).expect("encode")),
            Some("REALIZEDPNL".to_owned())
        );
        assert_eq!(
            encode(serde_json::to_value(ActivityType::MakerRebate).expect("encode")),
            Some("MAKER_REBATE".to_owned())
        );
    }

    #[test]
    fn activity_filter_joins_in_order() {
        let many = ActivityTypeFilter::from([ActivityType::Trade, ActivityType::Merge]);
        assert_eq!(many.to_query_value(), "TRADE,MERGE");
        assert_eq!(ActivityTypeFilter::from(ActivityType::Redeem).to_query_value(), "REDEEM");
    }

    #[test]
    fn activity_tolerates_unknown_kinds() {
        let activity: Activity = serde_json::from_str(
            r#"{"proxyWallet": "0x1", "type": "YIELD", "side": "SELL", "usdcSize": "12.5"}"#,
        )
        .expect("activity must decode");
        assert_eq!(activity.activity_type, Some(ActivityType::Unknown));
        assert_eq!(activity.side, Some(TradeSide::Sell));
        assert_eq!(activity.usdc_size, 12.5);
    }

    #[test]
    fn optional_numbers_accept_numeric_strings() {
        let activity: Activity =
            serde_json::from_str(r#"{"type": "TRADE", "price": "0.61", "outcomeIndex": "1"}"#)
                .expect("activity must decode");
        assert_eq!(activity.price, Some(0.61));
        assert_eq!(activity.outcome_index, Some(1));

        let position: Position =
            serde_json::from_str(r#"{"asset": "123", "percentRealizedPnl": "-4.5"}"#)
                .expect("position must decode");
        assert_eq!(position.percent_realized_pnl, Some(-4.5));
    }
}
