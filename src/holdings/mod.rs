pub mod holdings_model;
pub mod holdings_traits;
pub mod valuation;

// Re-export the main public entry points and types
pub use holdings_model::{
    AssetClass, Holding, ValuationSnapshot, ValuedHolding, METADATA_COUNTRY, METADATA_SECTOR,
};
pub use holdings_traits::{
    FxRateSourceTrait, HoldingsRepositoryTrait, LivePriceSourceTrait, SnapshotRepositoryTrait,
    TransactionRepositoryTrait,
};
pub use valuation::value_holdings;

#[cfg(test)]
pub(crate) mod tests;
