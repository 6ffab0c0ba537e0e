//! User PnL API shapes: portfolio value history.

use serde::{Deserialize, Serialize};

use crate::serde_util::{lenient_f64, lenient_i64};

/// Portfolio value at a point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PnlDataPoint {
    /// Unix timestamp in seconds.
    #[serde(deserialize_with = "lenient_i64")]
    pub t: i64,
    /// Portfolio value in USDC.
    #[serde(deserialize_with = "lenient_f64")]
    pub p: f64,
}

/// How far back the history reaches.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum PnlInterval {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "all")]
    All,
}

/// Spacing between data points.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum PnlFidelity {
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "3h")]
    ThreeHours,
    #[serde(rename = "18h")]
    EighteenHours,
    #[serde(rename = "1d")]
    OneDay,
}

/// Interval/fidelity pair matching the Polymarket frontend's chart views.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PnlPreset {
    pub interval: PnlInterval,
    pub fidelity: PnlFidelity,
}

impl PnlPreset {
    /// One day, hourly points.
    pub const DAY: Self = Self::new(PnlInterval::OneDay, PnlFidelity::OneHour);
    /// One week, 3-hourly points.
    pub const WEEK: Self = Self::new(PnlInterval::OneWeek, PnlFidelity::ThreeHours);
    /// One month, 18-hourly points.
    pub const MONTH: Self = Self::new(PnlInterval::OneMonth, PnlFidelity::EighteenHours);
    /// Full history, daily points.
    pub const ALL: Self = Self::new(PnlInterval::All, PnlFidelity::OneDay);
    /// Cheapest query that still tells whether an account is active.
    pub const QUICK_CHECK: Self = Self::new(PnlInterval::OneMonth, PnlFidelity::OneDay);

    pub const fn new(interval: PnlInterval, fidelity: PnlFidelity) -> Self {
        Self { interval, fidelity }
    }

    /// Parameters for `address` using this preset.
    pub fn for_user(self, address: impl Into<String>) -> UserPnlParams {
        UserPnlParams {
            user_address: address.into(),
            interval: self.interval,
            fidelity: self.fidelity,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserPnlParams {
    /// Wallet address of the user.
    pub user_address: String,
    pub interval: PnlInterval,
    pub fidelity: PnlFidelity,
}
