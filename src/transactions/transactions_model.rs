use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::decimal_serde::*;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Buy,
    Sell,
    Dividend,
    Deposit,
    Withdrawal,
    Fee,
    Other,
}

impl TransactionType {
    /// Buys and sells move cash across the portfolio boundary and must be
    /// neutralized when chaining time-weighted returns. Dividends are
    /// treated as internal performance, not external flow.
    pub fn is_external_flow(&self) -> bool {
        matches!(
            self,
            TransactionType::Buy
                | TransactionType::Sell
                | TransactionType::Deposit
                | TransactionType::Withdrawal
        )
    }
}

/// Immutable ledger entry. `total_amount` is always positive; direction is
/// carried by the transaction type.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub holding_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: DateTime<Utc>,
    #[serde(with = "decimal_serde")]
    pub total_amount: Decimal,
    pub currency: String,
}

impl Transaction {
    pub fn new(
        holding_id: &str,
        kind: TransactionType,
        date: DateTime<Utc>,
        total_amount: Decimal,
        currency: &str,
    ) -> Self {
        Transaction {
            id: Uuid::new_v4().to_string(),
            holding_id: holding_id.to_string(),
            kind,
            date,
            total_amount,
            currency: currency.to_string(),
        }
    }

    /// Signed external cash flow into the portfolio, zero for types that
    /// do not cross the portfolio boundary.
    pub fn external_flow(&self) -> Decimal {
        match self.kind {
            TransactionType::Buy | TransactionType::Deposit => self.total_amount,
            TransactionType::Sell | TransactionType::Withdrawal => -self.total_amount,
            _ => Decimal::ZERO,
        }
    }
}
