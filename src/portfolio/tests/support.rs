// Shared fixtures for the portfolio analytics tests.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::holdings::{AssetClass, FxRateSourceTrait, Holding, ValuationSnapshot, ValuedHolding};

/// FX source that treats every currency as the base currency.
pub struct IdentityFx;

impl FxRateSourceTrait for IdentityFx {
    fn get_rate(&self, _from: &str, _to: &str) -> Result<Decimal> {
        Ok(Decimal::ONE)
    }
}

pub fn dt(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(&format!("{} 12:00:00", s), "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_utc()
}

pub fn snapshot(date: &str, value: Decimal) -> ValuationSnapshot {
    ValuationSnapshot {
        timestamp: dt(date),
        value_base: value,
    }
}

pub fn snapshot_at(timestamp: DateTime<Utc>, value: Decimal) -> ValuationSnapshot {
    ValuationSnapshot {
        timestamp,
        value_base: value,
    }
}

/// A valued holding with an explicit value and weight, pre-sorted inputs
/// being the documented contract of the concentration calculator.
pub fn valued(
    name: &str,
    asset_class: AssetClass,
    value: Decimal,
    weight: Decimal,
) -> ValuedHolding {
    let holding = Holding::new(asset_class, name, Some(name), Decimal::ONE, "USD");
    ValuedHolding {
        holding,
        value_base: value,
        weight_percent: weight,
    }
}

pub fn valued_with_metadata(
    name: &str,
    asset_class: AssetClass,
    value: Decimal,
    weight: Decimal,
    country: Option<&str>,
    sector: Option<&str>,
) -> ValuedHolding {
    let mut entry = valued(name, asset_class, value, weight);
    if let Some(c) = country {
        entry
            .holding
            .metadata
            .insert("country".to_string(), c.to_string());
    }
    if let Some(s) = sector {
        entry
            .holding
            .metadata
            .insert("sector".to_string(), s.to_string());
    }
    entry
}
