//! Gamma API shapes: events, markets, tags and related metadata.

use serde::{Deserialize, Serialize};

use crate::serde_util::{lenient_bool, lenient_f64, lenient_opt_f64, lenient_string};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tag {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub label: String,
    #[serde(deserialize_with = "lenient_string")]
    pub slug: String,
    pub force_show_thumb: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub ticker: String,
    #[serde(deserialize_with = "lenient_string")]
    pub slug: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    pub resolution_source: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub start_date: String,
    pub end_date: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub active: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub closed: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub archived: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub featured: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub restricted: bool,
    #[serde(deserialize_with = "lenient_f64")]
    pub liquidity: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub volume: f64,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub open_interest: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub markets: Option<Vec<Market>>,
    pub tags: Option<Vec<Tag>>,
}

/// A single binary market.
///
/// `outcomes`, `outcome_prices` and `clob_token_ids` are JSON-encoded arrays
/// in a string, as the API sends them; see [`Market::outcome_list`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Market {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub question: String,
    #[serde(deserialize_with = "lenient_string")]
    pub condition_id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub slug: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub outcomes: String,
    #[serde(deserialize_with = "lenient_string")]
    pub outcome_prices: String,
    #[serde(deserialize_with = "lenient_string")]
    pub volume: String,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub volume_num: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    pub liquidity: String,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub liquidity_num: Option<f64>,
    #[serde(deserialize_with = "lenient_bool")]
    pub active: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub closed: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub archived: bool,
    pub featured: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub restricted: bool,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub clob_token_ids: Option<String>,
    pub enable_order_book: Option<bool>,
    pub accepting_orders: Option<bool>,
    pub accepting_order_timestamp: Option<String>,
    pub events: Option<Vec<Event>>,
    pub tags: Option<Vec<Tag>>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub neg_risk: Option<bool>,
}

impl Market {
    /// Outcome labels decoded from the stringified array.
    pub fn outcome_list(&self) -> Vec<String> {
        decode_string_array(&self.outcomes)
    }

    /// Outcome prices decoded from the stringified array.
    pub fn outcome_price_list(&self) -> Vec<String> {
        decode_string_array(&self.outcome_prices)
    }

    /// CLOB token ids decoded from the stringified array.
    pub fn clob_token_id_list(&self) -> Vec<String> {
        self.clob_token_ids
            .as_deref()
            .map(decode_string_array)
            .unwrap_or_default()
    }
}

fn decode_string_array(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Series {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub slug: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub active: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub closed: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub archived: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub content: String,
    pub market_slug: Option<String>,
    pub event_slug: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub created_at: String,
    pub updated_at: Option<String>,
    pub author: Option<Profile>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUser {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub creator: bool,
    #[serde(rename = "mod", deserialize_with = "lenient_bool")]
    pub moderator: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub proxy_wallet: String,
    pub profile_image: Option<String>,
    pub profile_image_optimized: Option<String>,
    pub display_username_public: Option<bool>,
    pub bio: Option<String>,
    pub pseudonym: Option<String>,
    pub name: Option<String>,
    pub users: Option<Vec<ProfileUser>>,
    pub verified_badge: Option<bool>,
    pub banner_image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub events: Option<Vec<Event>>,
    pub markets: Option<Vec<Market>>,
    pub tags: Option<Vec<Tag>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    pub slug: Option<String>,
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SportsMetadata {
    pub sports: Vec<String>,
    pub leagues: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SportsMarketType {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    pub description: Option<String>,
}

/// Health-check payload.
///
/// Also decodes from a bare text body such as `"OK"`, which becomes `status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StatusPayload")]
pub struct StatusResponse {
    pub status: String,
    pub message: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatusPayload {
    Text(String),
    Object {
        #[serde(default, deserialize_with = "lenient_string")]
        status: String,
        #[serde(default)]
        message: Option<String>,
    },
}

impl From<StatusPayload> for StatusResponse {
    fn from(payload: StatusPayload) -> Self {
        match payload {
            StatusPayload::Text(status) => Self {
                status: status.trim().to_owned(),
                message: None,
            },
            StatusPayload::Object { status, message } => Self { status, message },
        }
    }
}

// ── Query parameters ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EventsListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub order: Option<String>,
    pub ascending: Option<bool>,
    pub id: Option<String>,
    pub tag_id: Option<String>,
    pub exclude_tag_id: Option<String>,
    pub slug: Option<String>,
    pub tag_slug: Option<String>,
    pub related_tags: Option<bool>,
    pub active: Option<bool>,
    pub archived: Option<bool>,
    pub featured: Option<bool>,
    pub cyom: Option<bool>,
    pub include_chat: Option<bool>,
    pub include_template: Option<bool>,
    pub recurrence: Option<String>,
    pub closed: Option<bool>,
    pub liquidity_min: Option<f64>,
    pub liquidity_max: Option<f64>,
    pub volume_min: Option<f64>,
    pub volume_max: Option<f64>,
    pub start_date_min: Option<String>,
    pub start_date_max: Option<String>,
    pub end_date_min: Option<String>,
    pub end_date_max: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MarketsListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub order: Option<String>,
    pub ascending: Option<bool>,
    pub id: Option<String>,
    pub slug: Option<String>,
    pub clob_token_ids: Option<String>,
    pub condition_ids: Option<String>,
    pub market_maker_address: Option<String>,
    pub liquidity_num_min: Option<f64>,
    pub liquidity_num_max: Option<f64>,
    pub volume_num_min: Option<f64>,
    pub volume_num_max: Option<f64>,
    pub start_date_min: Option<String>,
    pub start_date_max: Option<String>,
    pub end_date_min: Option<String>,
    pub end_date_max: Option<String>,
    pub tag_id: Option<String>,
    pub related_tags: Option<bool>,
    pub cyom: Option<bool>,
    pub uma_resolution_status: Option<String>,
    pub game_id: Option<String>,
    pub sports_market_types: Option<String>,
    pub rewards_min_size: Option<f64>,
    pub question_ids: Option<String>,
    pub include_tag: Option<bool>,
    pub closed: Option<bool>,
    pub active: Option<bool>,
    pub archived: Option<bool>,
    pub featured: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TagsListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub slug: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SeriesListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CommentsListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub market_slug: Option<String>,
    pub event_slug: Option<String>,
}

/// Extra search parameters; the query text is passed separately.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub limit: Option<u32>,
}
