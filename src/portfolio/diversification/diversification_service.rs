use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::diversification_model::{DiversificationAssessment, ScoringRules};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, MAX_INSIGHTS};
use crate::holdings::{AssetClass, ValuedHolding};
use crate::portfolio::allocation::ConcentrationMetrics;

const SCORE_CEILING: Decimal = dec!(100);
const BAND_WELL_DIVERSIFIED: Decimal = dec!(80);
const BAND_MODERATE: Decimal = dec!(50);

/// Applies the fixed penalty rule set to the concentration metrics and the
/// combined crypto weight. The score starts at 100, loses each breached
/// rule's penalty, and is floored at 0; there are no additive bonuses.
pub fn score_diversification(
    holdings: &[ValuedHolding],
    metrics: &ConcentrationMetrics,
    rules: &ScoringRules,
) -> DiversificationAssessment {
    let mut score = SCORE_CEILING;
    let mut insights: Vec<String> = Vec::new();

    if metrics.top_holding_percent > rules.top_holding_threshold {
        score -= rules.top_holding_penalty;
        insights.push(format!(
            "Your largest holding makes up {}% of the portfolio.",
            metrics
                .top_holding_percent
                .round_dp(DISPLAY_DECIMAL_PRECISION)
        ));
    }

    if metrics.top3_combined_percent > rules.top3_threshold {
        score -= rules.top3_penalty;
        insights.push(format!(
            "Your top 3 holdings account for {}% of total value.",
            metrics
                .top3_combined_percent
                .round_dp(DISPLAY_DECIMAL_PRECISION)
        ));
    }

    if metrics.has_country_data && metrics.largest_country_percent > rules.country_threshold {
        score -= rules.country_penalty;
        insights.push(format!(
            "A single country represents {}% of the portfolio.",
            metrics
                .largest_country_percent
                .round_dp(DISPLAY_DECIMAL_PRECISION)
        ));
    }

    if metrics.has_sector_data && metrics.largest_sector_percent > rules.sector_threshold {
        score -= rules.sector_penalty;
        insights.push(format!(
            "A single sector represents {}% of the portfolio.",
            metrics
                .largest_sector_percent
                .round_dp(DISPLAY_DECIMAL_PRECISION)
        ));
    }

    let crypto_weight = combined_crypto_weight(holdings);
    if crypto_weight > rules.crypto_threshold {
        score -= rules.crypto_penalty;
        insights.push(format!(
            "Crypto assets make up {}% of the portfolio.",
            crypto_weight.round_dp(DISPLAY_DECIMAL_PRECISION)
        ));
    }

    let score = score.max(Decimal::ZERO).min(SCORE_CEILING);

    insights.push(closing_sentence(score).to_string());
    insights.truncate(MAX_INSIGHTS);

    DiversificationAssessment { score, insights }
}

fn combined_crypto_weight(holdings: &[ValuedHolding]) -> Decimal {
    holdings
        .iter()
        .filter(|h| h.holding.asset_class == AssetClass::Crypto)
        .map(|h| h.weight_percent)
        .sum()
}

fn closing_sentence(score: Decimal) -> &'static str {
    if score >= BAND_WELL_DIVERSIFIED {
        "Overall, your portfolio is well diversified."
    } else if score >= BAND_MODERATE {
        "Your portfolio is moderately diversified; spreading value further would reduce risk."
    } else {
        "Your portfolio is heavily concentrated; consider rebalancing across more assets."
    }
}
