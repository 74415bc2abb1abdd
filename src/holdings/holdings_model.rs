use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::utils::decimal_serde::*;

/// Metadata key carrying the holding's country of listing
pub const METADATA_COUNTRY: &str = "country";
/// Metadata key carrying the holding's sector classification
pub const METADATA_SECTOR: &str = "sector";

/// Closed set of asset classes a holding can be tagged with.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    Stock,
    Etf,
    Crypto,
    RealEstate,
    FixedIncome,
    Cash,
    Other,
}

impl AssetClass {
    /// Listed equities are the only classes that carry meaningful
    /// country/sector exposure. Country and sector breakdowns are
    /// restricted to these classes everywhere in the core.
    pub fn is_listed_equity(&self) -> bool {
        matches!(self, AssetClass::Stock | AssetClass::Etf)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Stock => "stock",
            AssetClass::Etf => "etf",
            AssetClass::Crypto => "crypto",
            AssetClass::RealEstate => "real_estate",
            AssetClass::FixedIncome => "fixed_income",
            AssetClass::Cash => "cash",
            AssetClass::Other => "other",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub asset_class: AssetClass,
    pub name: String,
    pub symbol: Option<String>,
    #[serde(with = "decimal_serde")]
    pub quantity: Decimal,
    pub currency: String,
    #[serde(with = "decimal_serde_option")]
    pub cost_basis: Option<Decimal>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    /// Soft-delete marker. Archived holdings are retained for historical
    /// event linkage but excluded from every analytics pass.
    #[serde(default)]
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Holding {
    pub fn new(
        asset_class: AssetClass,
        name: &str,
        symbol: Option<&str>,
        quantity: Decimal,
        currency: &str,
    ) -> Self {
        let now = Utc::now();
        Holding {
            id: Uuid::new_v4().to_string(),
            asset_class,
            name: name.to_string(),
            symbol: symbol.map(|s| s.to_string()),
            quantity,
            currency: currency.to_string(),
            cost_basis: None,
            metadata: HashMap::new(),
            is_archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn country(&self) -> Option<&str> {
        self.metadata.get(METADATA_COUNTRY).map(|s| s.as_str())
    }

    pub fn sector(&self) -> Option<&str> {
        self.metadata.get(METADATA_SECTOR).map(|s| s.as_str())
    }
}

/// A holding paired with its value in the portfolio base currency and its
/// weight within the portfolio. Derived on every analytics pass, never
/// persisted or cached across a price refresh.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ValuedHolding {
    pub holding: Holding,
    #[serde(with = "decimal_serde")]
    pub value_base: Decimal,
    #[serde(with = "decimal_serde")]
    pub weight_percent: Decimal,
}

/// A point-in-time capture of total portfolio value in the base currency.
/// Append-only; one row per refresh while the app is foregrounded, so
/// multiple rows per calendar day are expected.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSnapshot {
    pub timestamp: DateTime<Utc>,
    #[serde(with = "decimal_serde")]
    pub value_base: Decimal,
}
