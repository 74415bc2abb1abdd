use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::*;

/// Time-weighted return over a snapshot history, with the companion risk
/// figures computed from the same sub-period return series. Absent
/// entirely (the calculation returns `None`) when fewer than two usable
/// snapshots exist.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimeWeightedReturn {
    #[serde(with = "decimal_serde")]
    pub cumulative_twr: Decimal,
    #[serde(with = "decimal_serde")]
    pub annualized_twr: Decimal,
    /// Annualized standard deviation of sub-period returns.
    #[serde(with = "decimal_serde")]
    pub volatility: Decimal,
    #[serde(with = "decimal_serde")]
    pub max_drawdown: Decimal,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub sub_period_count: usize,
}
