use chrono::{DateTime, Datelike, Duration, Utc};
use log::error;
use num_traits::Zero;
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::income_model::{DividendAnalytics, HoldingIncome, MonthlyIncome};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, INCOME_HISTOGRAM_MONTHS, TTM_WINDOW_DAYS};
use crate::holdings::{FxRateSourceTrait, Holding};
use crate::transactions::{Transaction, TransactionType};

/// Derives trailing-twelve-month dividend analytics from the transaction
/// history: total TTM income, a fixed twelve-bucket monthly histogram, and
/// per-holding rows with yield-on-cost where a cost basis exists.
///
/// Amounts are converted to `base_currency` before aggregation; a failed
/// conversion falls back to the raw amount (logged) rather than dropping
/// the dividend. `now` is passed in so callers and tests share one clock.
pub fn calculate_dividend_analytics(
    transactions: &[Transaction],
    holdings: &[Holding],
    fx: &dyn FxRateSourceTrait,
    base_currency: &str,
    now: DateTime<Utc>,
) -> DividendAnalytics {
    let cutoff = now - Duration::days(TTM_WINDOW_DAYS);
    let month_labels = trailing_month_labels(now);

    let mut ttm_income = Decimal::zero();
    let mut by_month: HashMap<String, Decimal> = HashMap::new();
    let mut by_holding: HashMap<&str, Decimal> = HashMap::new();

    for transaction in transactions {
        if transaction.kind != TransactionType::Dividend || transaction.date < cutoff {
            continue;
        }

        let amount = match fx.convert(
            transaction.total_amount,
            &transaction.currency,
            base_currency,
        ) {
            Ok(converted) => converted,
            Err(e) => {
                error!(
                    "Error converting dividend {} {}->{}: {}. Using raw amount.",
                    transaction.id, transaction.currency, base_currency, e
                );
                transaction.total_amount
            }
        };

        ttm_income += amount;
        *by_holding
            .entry(transaction.holding_id.as_str())
            .or_insert_with(Decimal::zero) += amount;

        let label = format!(
            "{:04}-{:02}",
            transaction.date.year(),
            transaction.date.month()
        );
        *by_month.entry(label).or_insert_with(Decimal::zero) += amount;
    }

    let monthly = month_labels
        .into_iter()
        .map(|label| MonthlyIncome {
            amount: by_month
                .get(&label)
                .copied()
                .unwrap_or_else(Decimal::zero)
                .round_dp(DISPLAY_DECIMAL_PRECISION),
            month: label,
        })
        .collect::<Vec<_>>();

    let holding_names: HashMap<&str, &Holding> =
        holdings.iter().map(|h| (h.id.as_str(), h)).collect();

    let mut holding_rows: Vec<HoldingIncome> = by_holding
        .into_iter()
        .map(|(holding_id, ttm_amount)| {
            let holding = holding_names.get(holding_id);
            let yield_on_cost = holding
                .and_then(|h| h.cost_basis)
                .filter(|basis| *basis > Decimal::zero())
                .map(|basis| {
                    (ttm_amount / basis * Decimal::ONE_HUNDRED)
                        .round_dp(DISPLAY_DECIMAL_PRECISION)
                });
            HoldingIncome {
                holding_id: holding_id.to_string(),
                name: holding.map(|h| h.name.clone()).unwrap_or_default(),
                ttm_amount: ttm_amount.round_dp(DISPLAY_DECIMAL_PRECISION),
                yield_on_cost,
            }
        })
        .collect();
    holding_rows.sort_by(|a, b| b.ttm_amount.cmp(&a.ttm_amount));

    let monthly_average = ttm_income / Decimal::from(INCOME_HISTOGRAM_MONTHS);

    DividendAnalytics {
        currency: base_currency.to_string(),
        ttm_income: ttm_income.round_dp(DISPLAY_DECIMAL_PRECISION),
        monthly_average: monthly_average.round_dp(DISPLAY_DECIMAL_PRECISION),
        monthly,
        holdings: holding_rows,
    }
}

/// The last twelve calendar months ending with the current one, ascending.
fn trailing_month_labels(now: DateTime<Utc>) -> Vec<String> {
    let mut year = now.year();
    let mut month = now.month() as i32;
    let mut labels = Vec::with_capacity(INCOME_HISTOGRAM_MONTHS as usize);

    for _ in 0..INCOME_HISTOGRAM_MONTHS {
        labels.push(format!("{:04}-{:02}", year, month));
        month -= 1;
        if month == 0 {
            month = 12;
            year -= 1;
        }
    }

    labels.reverse();
    labels
}
