use async_trait::async_trait;

use super::market_data_errors::MarketDataError;
use super::market_data_model::{CandleSeries, DayRange};

/// Contract every benchmark candle source must satisfy: given a symbol and
/// a day range, return an ascending close-price series or a definitive
/// absence signal (`MarketDataError::NotFound`).
#[async_trait]
pub trait BenchmarkProviderTrait: Send + Sync {
    /// Stable identifier used in logs and fallback diagnostics.
    fn provider_id(&self) -> &str;

    async fn fetch_candles(
        &self,
        symbol: &str,
        range: DayRange,
    ) -> Result<CandleSeries, MarketDataError>;
}
