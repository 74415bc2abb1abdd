use chrono::{DateTime, Duration, Utc};
use log::warn;
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::benchmark_model::BenchmarkComparison;
use crate::constants::DECIMAL_PRECISION;
use crate::holdings::ValuationSnapshot;
use crate::market_data::{CandleSeries, DayRange};

/// Aligns the portfolio valuation history and already-fetched benchmark
/// candle series onto a common day axis of percentage returns.
///
/// Snapshots are window-filtered, deduplicated to the last capture of each
/// calendar day, and normalized against the first day's value. Each
/// benchmark is matched day-by-day with the close at or before the day's
/// timestamp (clamped to the series bounds) and normalized against its own
/// matched close on the first reference day; a day with no usable match is
/// forward-filled with the previous return so series lengths stay equal.
///
/// Returns `None` when fewer than two distinct days survive or the first
/// day's value is non-positive; no partial result is produced. Benchmarks
/// with an unusable normalization base are dropped individually.
pub fn align_benchmarks(
    snapshots: &[ValuationSnapshot],
    candles: &HashMap<String, CandleSeries>,
    range: DayRange,
    now: DateTime<Utc>,
) -> Option<BenchmarkComparison> {
    let windowed = filter_to_window(snapshots, range, now);
    let daily = dedupe_by_day(&windowed);

    if daily.len() < 2 {
        return None;
    }

    let base_value = daily[0].value_base;
    if base_value <= Decimal::ZERO {
        return None;
    }

    let hundred = Decimal::ONE_HUNDRED;
    let labels = daily
        .iter()
        .map(|s| s.timestamp.date_naive())
        .collect::<Vec<_>>();
    let portfolio_returns = daily
        .iter()
        .map(|s| ((s.value_base / base_value - Decimal::ONE) * hundred).round_dp(DECIMAL_PRECISION))
        .collect::<Vec<_>>();

    let mut benchmark_returns: HashMap<String, Vec<Decimal>> = HashMap::new();
    for (symbol, series) in candles {
        match align_one_benchmark(&daily, series) {
            Some(returns) => {
                benchmark_returns.insert(symbol.clone(), returns);
            }
            None => {
                warn!(
                    "Benchmark '{}' has no usable close on the first reference day; dropping it",
                    symbol
                );
            }
        }
    }

    Some(BenchmarkComparison {
        labels,
        portfolio_returns,
        benchmark_returns,
    })
}

fn filter_to_window(
    snapshots: &[ValuationSnapshot],
    range: DayRange,
    now: DateTime<Utc>,
) -> Vec<ValuationSnapshot> {
    match range.days() {
        Some(days) => {
            let cutoff = now - Duration::days(days);
            snapshots
                .iter()
                .filter(|s| s.timestamp >= cutoff)
                .cloned()
                .collect()
        }
        None => snapshots.to_vec(),
    }
}

/// One value per calendar day, keeping the latest capture of each day.
/// Input is ascending by timestamp, so the last entry for a date wins.
fn dedupe_by_day(snapshots: &[ValuationSnapshot]) -> Vec<ValuationSnapshot> {
    let mut daily: Vec<ValuationSnapshot> = Vec::with_capacity(snapshots.len());
    for snapshot in snapshots {
        match daily.last_mut() {
            Some(last) if last.timestamp.date_naive() == snapshot.timestamp.date_naive() => {
                *last = snapshot.clone();
            }
            _ => daily.push(snapshot.clone()),
        }
    }
    daily
}

fn align_one_benchmark(
    daily: &[ValuationSnapshot],
    series: &CandleSeries,
) -> Option<Vec<Decimal>> {
    let base_close = series.close_at_or_before(daily[0].timestamp.timestamp())?;
    if base_close <= Decimal::ZERO {
        return None;
    }

    let hundred = Decimal::ONE_HUNDRED;
    let mut returns = Vec::with_capacity(daily.len());
    let mut previous_return = Decimal::ZERO;

    for snapshot in daily {
        let value = match series.close_at_or_before(snapshot.timestamp.timestamp()) {
            Some(close) => {
                let pct = ((close / base_close - Decimal::ONE) * hundred)
                    .round_dp(DECIMAL_PRECISION);
                previous_return = pct;
                pct
            }
            // Keep the axis intact: carry the last computed return forward.
            None => previous_return,
        };
        returns.push(value);
    }

    Some(returns)
}
