use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::holdings_model::{Holding, ValuationSnapshot};
use crate::errors::Result;
use crate::transactions::Transaction;

/// Contract for the row-oriented holdings store. Persistence itself lives
/// outside this crate; the analytics core only consumes these views.
pub trait HoldingsRepositoryTrait: Send + Sync {
    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Holding>>;
}

/// Contract for the transaction store.
pub trait TransactionRepositoryTrait: Send + Sync {
    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Transaction>>;
    fn list_by_holding(&self, holding_id: &str) -> Result<Vec<Transaction>>;
}

/// Contract for the valuation snapshot store. Results are ascending by
/// timestamp.
pub trait SnapshotRepositoryTrait: Send + Sync {
    fn list_since(
        &self,
        portfolio_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<ValuationSnapshot>>;
}

/// Current price lookup in the instrument's native currency. Absent
/// entries are tolerated; how a missing quote affects the valued total is
/// the valuation pass's policy, not the source's.
pub trait LivePriceSourceTrait: Send + Sync {
    fn latest_price(&self, symbol: &str) -> Option<Decimal>;
}

/// Exchange-rate lookup used to convert holding currencies into the
/// portfolio base currency.
pub trait FxRateSourceTrait: Send + Sync {
    fn get_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal>;

    fn convert(&self, amount: Decimal, from_currency: &str, to_currency: &str) -> Result<Decimal> {
        if from_currency == to_currency {
            return Ok(amount);
        }
        Ok(amount * self.get_rate(from_currency, to_currency)?)
    }
}
