use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use super::market_data_errors::MarketDataError;
use super::market_data_model::{CandleSeries, DayRange};
use super::market_data_provider::BenchmarkProviderTrait;

/// Tries an ordered list of capability-equivalent providers in sequence,
/// short-circuiting on the first non-empty result. An error or empty
/// series from one provider moves on to the next; only when every
/// provider has been exhausted does the combinator fail.
pub struct FallbackProvider {
    providers: Vec<Arc<dyn BenchmarkProviderTrait>>,
}

impl FallbackProvider {
    pub fn new(providers: Vec<Arc<dyn BenchmarkProviderTrait>>) -> Self {
        FallbackProvider { providers }
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

#[async_trait]
impl BenchmarkProviderTrait for FallbackProvider {
    fn provider_id(&self) -> &str {
        "fallback"
    }

    async fn fetch_candles(
        &self,
        symbol: &str,
        range: DayRange,
    ) -> Result<CandleSeries, MarketDataError> {
        let mut last_error: Option<MarketDataError> = None;

        for provider in &self.providers {
            match provider.fetch_candles(symbol, range).await {
                Ok(series) if !series.is_empty() => {
                    debug!(
                        "Provider '{}' returned {} candles for '{}'",
                        provider.provider_id(),
                        series.len(),
                        symbol
                    );
                    return Ok(series);
                }
                Ok(_) => {
                    warn!(
                        "Provider '{}' returned an empty series for '{}', trying next",
                        provider.provider_id(),
                        symbol
                    );
                    last_error = Some(MarketDataError::NotFound(format!(
                        "Empty candle series for '{}'",
                        symbol
                    )));
                }
                Err(e) => {
                    warn!(
                        "Provider '{}' failed for '{}': {}. Trying next.",
                        provider.provider_id(),
                        symbol,
                        e
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            MarketDataError::ProviderError("No benchmark providers configured".to_string())
        }))
    }
}
