use rust_decimal_macros::dec;
use serde_json::{json, Value};

use crate::holdings::{AssetClass, Holding, ValuationSnapshot, ValuedHolding};
use crate::portfolio::tests::support::dt;
use crate::transactions::{Transaction, TransactionType};

#[test]
fn holding_serializes_with_camel_case_keys_and_string_decimals() {
    let mut holding = Holding::new(AssetClass::RealEstate, "Flat", None, dec!(1), "EUR");
    holding.cost_basis = Some(dec!(250000));

    let value: Value = serde_json::to_value(&holding).unwrap();

    assert_eq!(value["assetClass"], json!("real_estate"));
    assert_eq!(value["quantity"], json!("1"));
    assert_eq!(value["costBasis"], json!("250000"));
    assert_eq!(value["isArchived"], json!(false));
}

#[test]
fn decimals_round_to_six_places_on_serialization() {
    let snapshot = ValuationSnapshot {
        timestamp: dt("2025-06-01"),
        value_base: dec!(1000.123456789),
    };

    let value: Value = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(value["valueBase"], json!("1000.123457"));
}

#[test]
fn absent_cost_basis_serializes_as_null() {
    let holding = Holding::new(AssetClass::Stock, "Apple", Some("AAPL"), dec!(10), "USD");

    let value: Value = serde_json::to_value(&holding).unwrap();

    assert_eq!(value["costBasis"], Value::Null);
}

#[test]
fn valued_holding_survives_a_round_trip() {
    let valued = ValuedHolding {
        holding: Holding::new(AssetClass::Etf, "World", Some("VWRL"), dec!(42), "USD"),
        value_base: dec!(4350.5),
        weight_percent: dec!(33.333333),
    };

    let encoded = serde_json::to_string(&valued).unwrap();
    let decoded: ValuedHolding = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded.value_base, valued.value_base);
    assert_eq!(decoded.weight_percent, valued.weight_percent);
    assert_eq!(decoded.holding.symbol.as_deref(), Some("VWRL"));
    assert!(decoded.holding.cost_basis.is_none());
}

#[test]
fn transaction_kind_serializes_under_the_type_key() {
    let transaction = Transaction::new(
        "h1",
        TransactionType::Dividend,
        dt("2025-06-01"),
        dec!(12.5),
        "USD",
    );

    let value: Value = serde_json::to_value(&transaction).unwrap();

    assert_eq!(value["type"], json!("dividend"));
    assert_eq!(value["holdingId"], json!("h1"));
    assert_eq!(value["totalAmount"], json!("12.5"));
}
