use log::{debug, warn};
use rust_decimal::Decimal;

use super::holdings_model::{AssetClass, Holding, ValuedHolding};
use super::holdings_traits::{FxRateSourceTrait, LivePriceSourceTrait};
use crate::constants::DECIMAL_PRECISION;

/// Values a set of holdings in the portfolio base currency and assigns
/// portfolio weights.
///
/// The returned list is sorted descending by `value_base`; downstream
/// concentration calculations rely on that ordering. Holdings with no
/// available quote contribute zero value, archived holdings are skipped
/// entirely, and a failed FX lookup leaves the amount unconverted (logged).
pub fn value_holdings(
    holdings: &[Holding],
    prices: &dyn LivePriceSourceTrait,
    fx: &dyn FxRateSourceTrait,
    base_currency: &str,
) -> Vec<ValuedHolding> {
    let mut valued: Vec<ValuedHolding> = holdings
        .iter()
        .filter(|h| !h.is_archived)
        .map(|holding| {
            let native_value = native_value(holding, prices);
            let value_base = match fx.convert(native_value, &holding.currency, base_currency) {
                Ok(converted) => converted,
                Err(e) => {
                    warn!(
                        "FX conversion {}->{} failed for holding '{}': {}. Using unconverted amount.",
                        holding.currency, base_currency, holding.id, e
                    );
                    native_value
                }
            };
            ValuedHolding {
                holding: holding.clone(),
                value_base,
                weight_percent: Decimal::ZERO,
            }
        })
        .collect();

    let total: Decimal = valued.iter().map(|v| v.value_base).sum();
    if total > Decimal::ZERO {
        let hundred = Decimal::ONE_HUNDRED;
        for entry in valued.iter_mut() {
            entry.weight_percent =
                (entry.value_base / total * hundred).round_dp(DECIMAL_PRECISION);
        }
    }

    valued.sort_by(|a, b| b.value_base.cmp(&a.value_base));
    valued
}

fn native_value(holding: &Holding, prices: &dyn LivePriceSourceTrait) -> Decimal {
    if holding.asset_class == AssetClass::Cash {
        return holding.quantity;
    }
    let Some(symbol) = holding.symbol.as_deref() else {
        debug!(
            "Holding '{}' has no symbol; valuing at zero",
            holding.id
        );
        return Decimal::ZERO;
    };
    match prices.latest_price(symbol) {
        Some(price) => price * holding.quantity,
        None => {
            debug!("No quote for symbol '{}'; holding contributes zero", symbol);
            Decimal::ZERO
        }
    }
}
