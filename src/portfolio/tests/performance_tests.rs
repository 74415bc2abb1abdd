use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::support::{dt, snapshot, snapshot_at};
use crate::constants::RISK_FREE_RATE_ANNUAL;
use crate::portfolio::performance::{calculate_sharpe_ratio, calculate_time_weighted_return};
use crate::transactions::{Transaction, TransactionType};

fn buy(holding_id: &str, date: &str, amount: Decimal) -> Transaction {
    Transaction::new(holding_id, TransactionType::Buy, dt(date), amount, "USD")
}

fn dividend(holding_id: &str, date: &str, amount: Decimal) -> Transaction {
    Transaction::new(
        holding_id,
        TransactionType::Dividend,
        dt(date),
        amount,
        "USD",
    )
}

#[test]
fn twrr_is_unavailable_below_two_snapshots() {
    assert!(calculate_time_weighted_return(&[], &[]).is_none());
    assert!(calculate_time_weighted_return(&[snapshot("2025-01-01", dec!(1000))], &[]).is_none());
}

#[test]
fn twrr_without_flows_matches_simple_growth() {
    let snapshots = vec![
        snapshot("2025-01-01", dec!(1000)),
        snapshot("2025-02-01", dec!(1100)),
    ];

    let result = calculate_time_weighted_return(&snapshots, &[]).unwrap();

    assert_eq!(result.cumulative_twr, dec!(0.1));
    // Under a year: annualized equals cumulative.
    assert_eq!(result.annualized_twr, dec!(0.1));
    assert_eq!(result.sub_period_count, 1);
}

#[test]
fn twrr_neutralizes_external_cash_flows() {
    // Value doubles from 1000 to 2500, but 1000 of it was new money.
    let snapshots = vec![
        snapshot("2025-01-01", dec!(1000)),
        snapshot("2025-02-01", dec!(2500)),
    ];
    let transactions = vec![buy("h1", "2025-01-15", dec!(1000))];

    let result = calculate_time_weighted_return(&snapshots, &transactions).unwrap();

    // (2500 - 1000 - 1000) / 1000
    assert_eq!(result.cumulative_twr, dec!(0.5));
}

#[test]
fn dividends_are_not_treated_as_external_flow() {
    let snapshots = vec![
        snapshot("2025-01-01", dec!(1000)),
        snapshot("2025-02-01", dec!(1050)),
    ];
    let transactions = vec![dividend("h1", "2025-01-20", dec!(50))];

    let result = calculate_time_weighted_return(&snapshots, &transactions).unwrap();

    assert_eq!(result.cumulative_twr, dec!(0.05));
}

#[test]
fn sub_periods_with_non_positive_start_are_skipped() {
    let snapshots = vec![
        snapshot("2025-01-01", Decimal::ZERO),
        snapshot("2025-02-01", dec!(500)),
        snapshot("2025-03-01", dec!(550)),
    ];

    let result = calculate_time_weighted_return(&snapshots, &[]).unwrap();

    // Only the 500 -> 550 sub-period is usable.
    assert_eq!(result.sub_period_count, 1);
    assert_eq!(result.cumulative_twr, dec!(0.1));
}

#[test]
fn twrr_is_unavailable_when_no_sub_period_is_usable() {
    let snapshots = vec![
        snapshot("2025-01-01", Decimal::ZERO),
        snapshot("2025-02-01", Decimal::ZERO),
    ];

    assert!(calculate_time_weighted_return(&snapshots, &[]).is_none());
}

#[test]
fn twrr_chains_sub_period_returns_multiplicatively() {
    let snapshots = vec![
        snapshot("2025-01-01", dec!(1000)),
        snapshot("2025-02-01", dec!(1100)),
        snapshot("2025-03-01", dec!(990)),
    ];

    let result = calculate_time_weighted_return(&snapshots, &[]).unwrap();

    // 1.1 * 0.9 - 1
    assert_eq!(result.cumulative_twr, dec!(-0.01));
    assert!(result.max_drawdown >= dec!(0.1));
}

#[test]
fn twrr_annualizes_over_multi_year_spans() {
    let snapshots = vec![
        snapshot("2023-01-01", dec!(1000)),
        snapshot("2025-01-01", dec!(1210)),
    ];

    let result = calculate_time_weighted_return(&snapshots, &[]).unwrap();

    assert_eq!(result.cumulative_twr, dec!(0.21));
    // Roughly 10% a year over two years.
    assert!((result.annualized_twr - dec!(0.1)).abs() < dec!(0.005));
}

#[test]
fn sharpe_is_withheld_below_minimum_samples() {
    let start = dt("2025-01-01");
    let snapshots: Vec<_> = (0..10)
        .map(|i| snapshot_at(start + Duration::days(i), dec!(1000) + Decimal::from(i)))
        .collect();

    assert!(calculate_sharpe_ratio(&snapshots, RISK_FREE_RATE_ANNUAL).is_none());
}

#[test]
fn sharpe_is_withheld_for_zero_volatility() {
    let start = dt("2025-01-01");
    let snapshots: Vec<_> = (0..30)
        .map(|i| snapshot_at(start + Duration::days(i), dec!(1000)))
        .collect();

    assert!(calculate_sharpe_ratio(&snapshots, RISK_FREE_RATE_ANNUAL).is_none());
}

#[test]
fn sharpe_is_reported_with_enough_varied_samples() {
    let start = dt("2025-01-01");
    let snapshots: Vec<_> = (0..40)
        .map(|i| {
            // Alternating up/down days with net drift upward.
            let wobble = if i % 2 == 0 { dec!(0) } else { dec!(8) };
            snapshot_at(
                start + Duration::days(i),
                dec!(1000) + Decimal::from(i) * dec!(2) + wobble,
            )
        })
        .collect();

    let sharpe = calculate_sharpe_ratio(&snapshots, RISK_FREE_RATE_ANNUAL);

    assert!(sharpe.is_some());
}
