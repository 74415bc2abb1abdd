use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Portfolio and benchmark percentage-return series on a shared day axis.
/// Every series has exactly `labels.len()` points; charting consumers rely
/// on that.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    pub labels: Vec<NaiveDate>,
    pub portfolio_returns: Vec<Decimal>,
    /// Keyed by benchmark symbol; symbols whose data could not be aligned
    /// are absent, not error-marked.
    pub benchmark_returns: HashMap<String, Vec<Decimal>>,
}
