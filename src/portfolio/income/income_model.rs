use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::*;

/// One bucket of the fixed-width monthly income histogram.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyIncome {
    /// Calendar month label, `YYYY-MM`.
    pub month: String,
    #[serde(with = "decimal_serde")]
    pub amount: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HoldingIncome {
    pub holding_id: String,
    pub name: String,
    #[serde(with = "decimal_serde")]
    pub ttm_amount: Decimal,
    /// Trailing income over original cost basis, percent. Present only
    /// when the holding carries a positive cost basis.
    #[serde(with = "decimal_serde_option")]
    pub yield_on_cost: Option<Decimal>,
}

/// Trailing-twelve-month dividend analytics in the portfolio base
/// currency. `monthly` always holds exactly twelve ascending buckets,
/// zero-filled for months without dividends.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DividendAnalytics {
    pub currency: String,
    #[serde(with = "decimal_serde")]
    pub ttm_income: Decimal,
    #[serde(with = "decimal_serde")]
    pub monthly_average: Decimal,
    pub monthly: Vec<MonthlyIncome>,
    /// Per-holding rows, descending by TTM amount.
    pub holdings: Vec<HoldingIncome>,
}
