use rust_decimal::Decimal;
use std::collections::HashMap;

use super::allocation_model::{ConcentrationMetrics, ExposureSlice, ExposureType};
use crate::constants::DECIMAL_PRECISION;
use crate::holdings::ValuedHolding;

/// Reduces a valued holdings list to concentration statistics.
///
/// Callers pass the list sorted descending by `value_base`, as produced by
/// `value_holdings`; the top-holding and top-3 figures read positions 0
/// and 0..3 directly rather than re-sorting.
pub fn calculate_concentration(holdings: &[ValuedHolding]) -> ConcentrationMetrics {
    let total: Decimal = holdings.iter().map(|h| h.value_base).sum();
    if holdings.is_empty() || total <= Decimal::ZERO {
        return ConcentrationMetrics::default();
    }

    let hundred = Decimal::ONE_HUNDRED;

    let top_holding_percent = holdings
        .first()
        .map(|h| h.weight_percent)
        .unwrap_or(Decimal::ZERO);

    let top3_value: Decimal = holdings.iter().take(3).map(|h| h.value_base).sum();
    let top3_combined_percent = (top3_value / total * hundred).round_dp(DECIMAL_PRECISION);

    let hhi: Decimal = holdings
        .iter()
        .map(|h| {
            let fraction = h.weight_percent / hundred;
            fraction * fraction
        })
        .sum();

    let (largest_country_percent, has_country_data) =
        largest_group_share(holdings, total, |h| h.holding.country());
    let (largest_sector_percent, has_sector_data) =
        largest_group_share(holdings, total, |h| h.holding.sector());

    ConcentrationMetrics {
        top_holding_percent,
        top3_combined_percent,
        largest_country_percent,
        largest_sector_percent,
        hhi: hhi.round_dp(DECIMAL_PRECISION),
        has_country_data,
        has_sector_data,
    }
}

/// Share of TOTAL portfolio value held by the single largest group under
/// `field`. Holdings that do not define the field simply do not
/// contribute; zero when nothing carries it.
fn largest_group_share<'a, F>(
    holdings: &'a [ValuedHolding],
    total: Decimal,
    field: F,
) -> (Decimal, bool)
where
    F: Fn(&'a ValuedHolding) -> Option<&'a str>,
{
    let mut groups: HashMap<&str, Decimal> = HashMap::new();
    for holding in holdings {
        if let Some(label) = field(holding) {
            *groups.entry(label).or_insert(Decimal::ZERO) += holding.value_base;
        }
    }
    if groups.is_empty() {
        return (Decimal::ZERO, false);
    }
    let largest = groups.values().copied().max().unwrap_or(Decimal::ZERO);
    (
        (largest / total * Decimal::ONE_HUNDRED).round_dp(DECIMAL_PRECISION),
        true,
    )
}

/// Categorical exposure breakdown: asset class and currency over all
/// holdings, country and sector over listed equities only. Slices are
/// sorted descending by percent within the combined list.
pub fn exposure_breakdown(holdings: &[ValuedHolding]) -> Vec<ExposureSlice> {
    let total: Decimal = holdings.iter().map(|h| h.value_base).sum();
    if holdings.is_empty() || total <= Decimal::ZERO {
        return Vec::new();
    }

    let mut slices = Vec::new();

    group_into(&mut slices, holdings, total, ExposureType::AssetClass, |h| {
        Some(h.holding.asset_class.as_str().to_string())
    });
    group_into(&mut slices, holdings, total, ExposureType::Currency, |h| {
        Some(h.holding.currency.clone())
    });
    group_into(&mut slices, holdings, total, ExposureType::Country, |h| {
        h.holding
            .asset_class
            .is_listed_equity()
            .then(|| h.holding.country().map(|c| c.to_string()))
            .flatten()
    });
    group_into(&mut slices, holdings, total, ExposureType::Sector, |h| {
        h.holding
            .asset_class
            .is_listed_equity()
            .then(|| h.holding.sector().map(|s| s.to_string()))
            .flatten()
    });

    slices.sort_by(|a, b| b.percent.cmp(&a.percent));
    slices
}

fn group_into<F>(
    slices: &mut Vec<ExposureSlice>,
    holdings: &[ValuedHolding],
    total: Decimal,
    exposure_type: ExposureType,
    label: F,
) where
    F: Fn(&ValuedHolding) -> Option<String>,
{
    let mut groups: HashMap<String, Decimal> = HashMap::new();
    for holding in holdings {
        if let Some(key) = label(holding) {
            *groups.entry(key).or_insert(Decimal::ZERO) += holding.value_base;
        }
    }
    for (key, value) in groups {
        slices.push(ExposureSlice {
            label: key,
            percent: (value / total * Decimal::ONE_HUNDRED).round_dp(DECIMAL_PRECISION),
            exposure_type,
        });
    }
}
