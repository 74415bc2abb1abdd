use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::support::{dt, IdentityFx};
use crate::holdings::{AssetClass, Holding};
use crate::portfolio::income::calculate_dividend_analytics;
use crate::transactions::{Transaction, TransactionType};

fn dividend(holding_id: &str, date: &str, amount: Decimal) -> Transaction {
    Transaction::new(
        holding_id,
        TransactionType::Dividend,
        dt(date),
        amount,
        "USD",
    )
}

fn holding_with_basis(id: &str, name: &str, cost_basis: Option<Decimal>) -> Holding {
    let mut holding = Holding::new(AssetClass::Stock, name, Some(name), dec!(10), "USD");
    holding.id = id.to_string();
    holding.cost_basis = cost_basis;
    holding
}

#[test]
fn ttm_income_sums_dividends_inside_the_trailing_year() {
    let now = dt("2025-08-01");
    let transactions = vec![
        dividend("h1", "2025-07-15", dec!(25)),
        dividend("h1", "2024-09-01", dec!(30)),
        // Older than 365 days, excluded.
        dividend("h1", "2024-06-01", dec!(100)),
        // Buys never count as income.
        Transaction::new("h1", TransactionType::Buy, dt("2025-07-01"), dec!(500), "USD"),
    ];
    let holdings = vec![holding_with_basis("h1", "Apple", None)];

    let analytics =
        calculate_dividend_analytics(&transactions, &holdings, &IdentityFx, "USD", now);

    assert_eq!(analytics.ttm_income, dec!(55));
}

#[test]
fn histogram_always_has_twelve_buckets() {
    let now = dt("2025-08-01");

    let empty = calculate_dividend_analytics(&[], &[], &IdentityFx, "USD", now);
    assert_eq!(empty.monthly.len(), 12);
    assert!(empty.monthly.iter().all(|m| m.amount == Decimal::ZERO));

    let one = calculate_dividend_analytics(
        &[dividend("h1", "2025-03-10", dec!(40))],
        &[],
        &IdentityFx,
        "USD",
        now,
    );
    assert_eq!(one.monthly.len(), 12);
    let march = one.monthly.iter().find(|m| m.month == "2025-03").unwrap();
    assert_eq!(march.amount, dec!(40));
}

#[test]
fn histogram_buckets_are_ascending_and_end_with_the_current_month() {
    let now = dt("2025-08-01");
    let analytics = calculate_dividend_analytics(&[], &[], &IdentityFx, "USD", now);

    assert_eq!(analytics.monthly.first().unwrap().month, "2024-09");
    assert_eq!(analytics.monthly.last().unwrap().month, "2025-08");
    for pair in analytics.monthly.windows(2) {
        assert!(pair[0].month < pair[1].month);
    }
}

#[test]
fn holding_rows_sort_descending_with_yield_on_cost() {
    let now = dt("2025-08-01");
    let transactions = vec![
        dividend("small", "2025-05-01", dec!(10)),
        dividend("large", "2025-05-01", dec!(50)),
        dividend("large", "2025-06-01", dec!(50)),
    ];
    let holdings = vec![
        holding_with_basis("large", "Big payer", Some(dec!(2000))),
        holding_with_basis("small", "Small payer", None),
    ];

    let analytics =
        calculate_dividend_analytics(&transactions, &holdings, &IdentityFx, "USD", now);

    assert_eq!(analytics.holdings.len(), 2);
    assert_eq!(analytics.holdings[0].holding_id, "large");
    assert_eq!(analytics.holdings[0].ttm_amount, dec!(100));
    // 100 / 2000 * 100
    assert_eq!(analytics.holdings[0].yield_on_cost, Some(dec!(5)));
    // No cost basis, no yield.
    assert_eq!(analytics.holdings[1].yield_on_cost, None);
}

#[test]
fn non_positive_cost_basis_suppresses_yield_on_cost() {
    let now = dt("2025-08-01");
    let transactions = vec![dividend("h1", "2025-05-01", dec!(10))];
    let holdings = vec![holding_with_basis("h1", "Free shares", Some(Decimal::ZERO))];

    let analytics =
        calculate_dividend_analytics(&transactions, &holdings, &IdentityFx, "USD", now);

    assert_eq!(analytics.holdings[0].yield_on_cost, None);
}

#[test]
fn boundary_dividend_exactly_365_days_old_counts() {
    let now = dt("2025-08-01");
    let boundary = now - Duration::days(365);
    let transactions = vec![Transaction::new(
        "h1",
        TransactionType::Dividend,
        boundary,
        dec!(20),
        "USD",
    )];

    let analytics = calculate_dividend_analytics(&transactions, &[], &IdentityFx, "USD", now);

    assert_eq!(analytics.ttm_income, dec!(20));
}
