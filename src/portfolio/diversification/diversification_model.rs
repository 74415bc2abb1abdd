use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CRYPTO_THRESHOLD_PERCENT;
use crate::utils::decimal_serde::*;

/// Thresholds (percent) and penalties (score points) for the rule-based
/// diversification score. A rule fires when its metric strictly exceeds
/// the threshold; penalties stack additively from the 100-point ceiling.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRules {
    #[serde(with = "decimal_serde")]
    pub top_holding_threshold: Decimal,
    #[serde(with = "decimal_serde")]
    pub top_holding_penalty: Decimal,
    #[serde(with = "decimal_serde")]
    pub top3_threshold: Decimal,
    #[serde(with = "decimal_serde")]
    pub top3_penalty: Decimal,
    #[serde(with = "decimal_serde")]
    pub country_threshold: Decimal,
    #[serde(with = "decimal_serde")]
    pub country_penalty: Decimal,
    #[serde(with = "decimal_serde")]
    pub sector_threshold: Decimal,
    #[serde(with = "decimal_serde")]
    pub sector_penalty: Decimal,
    /// Caller-overridable; defaults to the crate-wide constant.
    #[serde(with = "decimal_serde")]
    pub crypto_threshold: Decimal,
    #[serde(with = "decimal_serde")]
    pub crypto_penalty: Decimal,
}

impl Default for ScoringRules {
    fn default() -> Self {
        ScoringRules {
            top_holding_threshold: dec!(30),
            top_holding_penalty: dec!(20),
            top3_threshold: dec!(70),
            top3_penalty: dec!(15),
            country_threshold: dec!(50),
            country_penalty: dec!(10),
            sector_threshold: dec!(40),
            sector_penalty: dec!(10),
            crypto_threshold: DEFAULT_CRYPTO_THRESHOLD_PERCENT,
            crypto_penalty: dec!(20),
        }
    }
}

/// The 0-100 score plus ranked plain-language insights (at most 5, in rule
/// evaluation order, always ending with one score-band closing sentence).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DiversificationAssessment {
    #[serde(with = "decimal_serde")]
    pub score: Decimal,
    pub insights: Vec<String>,
}
