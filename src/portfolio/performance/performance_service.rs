use chrono::{DateTime, Utc};
use log::warn;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use super::performance_model::TimeWeightedReturn;
use crate::constants::{
    DAYS_PER_YEAR_DECIMAL, DECIMAL_PRECISION, MIN_SHARPE_SAMPLES, SQRT_TRADING_DAYS_APPROX,
    TRADING_DAYS_PER_YEAR,
};
use crate::holdings::ValuationSnapshot;
use crate::transactions::Transaction;

/// Computes the time-weighted rate of return across valuation snapshots,
/// neutralizing external cash flows.
///
/// The snapshot timeline is partitioned at each snapshot boundary; the net
/// external flow attributed to a sub-period is the sum of buy/sell/deposit/
/// withdrawal amounts dated inside it (dividends are performance, not
/// flow). A sub-period with a non-positive starting value is skipped, not
/// treated as a 0% or infinite return. Returns `None` when fewer than two
/// snapshots exist or no sub-period was usable.
pub fn calculate_time_weighted_return(
    snapshots: &[ValuationSnapshot],
    transactions: &[Transaction],
) -> Option<TimeWeightedReturn> {
    if snapshots.len() < 2 {
        return None;
    }

    let one = Decimal::ONE;
    let mut cumulative = one;
    let mut sub_period_returns: Vec<Decimal> = Vec::with_capacity(snapshots.len() - 1);

    for window in snapshots.windows(2) {
        let start = &window[0];
        let end = &window[1];

        if start.value_base <= Decimal::ZERO {
            warn!(
                "Skipping sub-period starting {} with non-positive value {}",
                start.timestamp, start.value_base
            );
            continue;
        }

        let net_flow = net_external_flow(transactions, start.timestamp, end.timestamp);
        let period_return = (end.value_base - start.value_base - net_flow) / start.value_base;

        cumulative *= one + period_return;
        sub_period_returns.push(period_return);
    }

    if sub_period_returns.is_empty() {
        return None;
    }

    let first = snapshots.first()?;
    let last = snapshots.last()?;
    let cumulative_twr = cumulative - one;
    let annualized_twr = annualize_return(first.timestamp, last.timestamp, cumulative_twr);

    Some(TimeWeightedReturn {
        cumulative_twr: cumulative_twr.round_dp(DECIMAL_PRECISION),
        annualized_twr: annualized_twr.round_dp(DECIMAL_PRECISION),
        volatility: sample_volatility_annualized(&sub_period_returns).round_dp(DECIMAL_PRECISION),
        max_drawdown: max_drawdown(&sub_period_returns).round_dp(DECIMAL_PRECISION),
        period_start: first.timestamp,
        period_end: last.timestamp,
        sub_period_count: sub_period_returns.len(),
    })
}

/// Sharpe ratio from per-interval snapshot returns, annualized by the
/// sampling frequency implied by the snapshot cadence. Withheld (`None`)
/// below the minimum sample count or when volatility is zero, rather than
/// reported with low confidence.
pub fn calculate_sharpe_ratio(
    snapshots: &[ValuationSnapshot],
    annual_risk_free_rate: Decimal,
) -> Option<Decimal> {
    let returns = interval_returns(snapshots);
    if returns.len() < MIN_SHARPE_SAMPLES {
        return None;
    }

    let count = Decimal::from(returns.len());
    let mean = returns.iter().sum::<Decimal>() / count;
    let sum_squared_diff: Decimal = returns
        .iter()
        .map(|&r| {
            let diff = r - mean;
            diff * diff
        })
        .sum();
    let variance = sum_squared_diff / (count - Decimal::ONE);
    let std_dev = variance.sqrt().unwrap_or(Decimal::ZERO);
    if std_dev.is_zero() {
        return None;
    }

    let periods_per_year = periods_per_year(snapshots);
    let annualization_factor = periods_per_year.sqrt().unwrap_or(SQRT_TRADING_DAYS_APPROX);

    let annualized_mean = mean * periods_per_year;
    let annualized_vol = std_dev * annualization_factor;

    Some(((annualized_mean - annual_risk_free_rate) / annualized_vol).round_dp(DECIMAL_PRECISION))
}

fn net_external_flow(
    transactions: &[Transaction],
    period_start: DateTime<Utc>,
    period_end: DateTime<Utc>,
) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind.is_external_flow() && t.date > period_start && t.date <= period_end)
        .map(|t| t.external_flow())
        .sum()
}

fn interval_returns(snapshots: &[ValuationSnapshot]) -> Vec<Decimal> {
    snapshots
        .windows(2)
        .filter(|w| w[0].value_base > Decimal::ZERO)
        .map(|w| (w[1].value_base / w[0].value_base) - Decimal::ONE)
        .collect()
}

/// Sampling frequency implied by the median snapshot spacing: daily
/// cadence annualizes over trading days, weekly over 52, anything sparser
/// over 12.
fn periods_per_year(snapshots: &[ValuationSnapshot]) -> Decimal {
    let mut spacings: Vec<i64> = snapshots
        .windows(2)
        .map(|w| (w[1].timestamp - w[0].timestamp).num_days().max(0))
        .collect();
    spacings.sort_unstable();
    let median = spacings.get(spacings.len() / 2).copied().unwrap_or(1);

    if median <= 1 {
        Decimal::from(TRADING_DAYS_PER_YEAR)
    } else if median <= 9 {
        dec!(52)
    } else {
        dec!(12)
    }
}

fn annualize_return(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    total_return: Decimal,
) -> Decimal {
    // A total loss (or worse, from data noise) cannot be compounded.
    if total_return <= dec!(-1.0) {
        return dec!(-1.0);
    }

    let days = (end - start).num_days();
    if days <= 0 {
        return total_return;
    }

    let years = Decimal::from(days) / DAYS_PER_YEAR_DECIMAL;
    if years < Decimal::ONE {
        return total_return;
    }

    let base = Decimal::ONE + total_return;
    if base <= Decimal::ZERO {
        return dec!(-1.0);
    }

    base.powd(Decimal::ONE / years) - Decimal::ONE
}

fn sample_volatility_annualized(period_returns: &[Decimal]) -> Decimal {
    if period_returns.len() < 2 {
        return Decimal::ZERO;
    }

    let count = Decimal::from(period_returns.len());
    let mean = period_returns.iter().sum::<Decimal>() / count;
    let sum_squared_diff: Decimal = period_returns
        .iter()
        .map(|&r| {
            let diff = r - mean;
            diff * diff
        })
        .sum();
    let variance = sum_squared_diff / (count - Decimal::ONE);
    if variance.is_sign_negative() {
        return Decimal::ZERO;
    }

    let volatility = variance.sqrt().unwrap_or(Decimal::ZERO);
    let annualization_factor = Decimal::from(TRADING_DAYS_PER_YEAR)
        .sqrt()
        .unwrap_or(SQRT_TRADING_DAYS_APPROX);

    volatility * annualization_factor
}

fn max_drawdown(period_returns: &[Decimal]) -> Decimal {
    let mut cumulative_value = Decimal::ONE;
    let mut peak_value = Decimal::ONE;
    let mut max_drawdown = Decimal::ZERO;

    for &period_return in period_returns {
        cumulative_value *= Decimal::ONE + period_return;
        peak_value = peak_value.max(cumulative_value);
        if peak_value.is_zero() {
            max_drawdown = max_drawdown.max(Decimal::ONE);
        } else {
            let drawdown = (peak_value - cumulative_value) / peak_value;
            max_drawdown = max_drawdown.max(drawdown);
        }
    }

    max_drawdown.max(Decimal::ZERO)
}
