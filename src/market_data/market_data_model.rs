use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Time window for benchmark comparison, expressed in trailing days.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DayRange {
    Week,
    Month,
    Quarter,
    All,
}

impl DayRange {
    pub fn days(&self) -> Option<i64> {
        match self {
            DayRange::Week => Some(7),
            DayRange::Month => Some(30),
            DayRange::Quarter => Some(90),
            DayRange::All => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayRange::Week => "7d",
            DayRange::Month => "30d",
            DayRange::Quarter => "90d",
            DayRange::All => "all",
        }
    }
}

/// Daily OHLCV series for one benchmark symbol, parallel arrays ascending
/// by unix timestamp, one point per trading day.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CandleSeries {
    pub symbol: String,
    pub timestamps: Vec<i64>,
    pub opens: Vec<Decimal>,
    pub highs: Vec<Decimal>,
    pub lows: Vec<Decimal>,
    pub closes: Vec<Decimal>,
    pub volumes: Vec<Decimal>,
}

impl CandleSeries {
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty() || self.closes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.timestamps.len().min(self.closes.len())
    }

    /// Close at or before `timestamp`, clamped to the series bounds: the
    /// first close when the target predates the series, the last when it
    /// postdates it. `None` only for an empty series.
    pub fn close_at_or_before(&self, timestamp: i64) -> Option<Decimal> {
        if self.is_empty() {
            return None;
        }
        let upper = self.len();
        // partition_point gives the count of samples at or before the target
        let idx = self.timestamps[..upper].partition_point(|&ts| ts <= timestamp);
        if idx == 0 {
            return self.closes.first().copied();
        }
        self.closes.get(idx - 1).copied()
    }
}
