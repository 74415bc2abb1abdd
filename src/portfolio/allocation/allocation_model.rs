use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::*;

/// Concentration statistics over a valued holdings set. Every field
/// defaults to zero for an empty portfolio; this type never represents an
/// error state.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConcentrationMetrics {
    #[serde(with = "decimal_serde")]
    pub top_holding_percent: Decimal,
    #[serde(with = "decimal_serde")]
    pub top3_combined_percent: Decimal,
    #[serde(with = "decimal_serde")]
    pub largest_country_percent: Decimal,
    #[serde(with = "decimal_serde")]
    pub largest_sector_percent: Decimal,
    /// Herfindahl-Hirschman index over weight fractions, in [0, 1].
    #[serde(with = "decimal_serde")]
    pub hhi: Decimal,
    pub has_country_data: bool,
    pub has_sector_data: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExposureType {
    AssetClass,
    Currency,
    Country,
    Sector,
}

/// One slice of the categorical exposure breakdown. Percentages within a
/// type need not sum to 100: country and sector cover listed equities only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExposureSlice {
    pub label: String,
    #[serde(with = "decimal_serde")]
    pub percent: Decimal,
    #[serde(rename = "type")]
    pub exposure_type: ExposureType,
}
