use futures::future::join_all;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use super::candle_cache::CandleCache;
use super::market_data_errors::MarketDataError;
use super::market_data_model::{CandleSeries, DayRange};
use super::market_data_provider::BenchmarkProviderTrait;
use crate::constants::{BENCHMARK_BATCH_DELAY_MS, BENCHMARK_FETCH_BATCH_SIZE};

/// Fetches benchmark candle series for a set of symbols, going through the
/// cache first and the (typically fallback-wrapped) provider second.
/// Symbols are fetched concurrently in small batches with a pause between
/// batches to stay inside third-party rate limits.
pub struct MarketDataService {
    provider: Arc<dyn BenchmarkProviderTrait>,
    cache: Arc<CandleCache>,
    batch_delay: Duration,
}

impl MarketDataService {
    pub fn new(provider: Arc<dyn BenchmarkProviderTrait>, cache: Arc<CandleCache>) -> Self {
        MarketDataService {
            provider,
            cache,
            batch_delay: Duration::from_millis(BENCHMARK_BATCH_DELAY_MS),
        }
    }

    #[cfg(test)]
    pub fn with_batch_delay(mut self, delay: Duration) -> Self {
        self.batch_delay = delay;
        self
    }

    /// Fetches candles for every requested symbol. Symbols for which every
    /// provider fails are dropped from the result with a log-level signal;
    /// only when no symbol yields data does this return
    /// `MarketDataError::AllProvidersFailed`.
    pub async fn get_benchmark_candles(
        &self,
        symbols: &[String],
        range: DayRange,
    ) -> Result<HashMap<String, CandleSeries>, MarketDataError> {
        if symbols.is_empty() {
            return Ok(HashMap::new());
        }

        let mut results: HashMap<String, CandleSeries> = HashMap::new();
        let mut first = true;

        for batch in symbols.chunks(BENCHMARK_FETCH_BATCH_SIZE) {
            if !first {
                tokio::time::sleep(self.batch_delay).await;
            }
            first = false;

            let fetches = batch.iter().map(|symbol| self.fetch_one(symbol, range));
            for outcome in join_all(fetches).await {
                match outcome {
                    Ok(series) => {
                        results.insert(series.symbol.clone(), series);
                    }
                    Err((symbol, e)) => {
                        warn!("Dropping benchmark symbol '{}': {}", symbol, e);
                    }
                }
            }
        }

        if results.is_empty() {
            return Err(MarketDataError::AllProvidersFailed(format!(
                "No candle data for any of {} requested symbols",
                symbols.len()
            )));
        }

        Ok(results)
    }

    async fn fetch_one(
        &self,
        symbol: &str,
        range: DayRange,
    ) -> Result<CandleSeries, (String, MarketDataError)> {
        if let Some(cached) = self.cache.get(symbol, range) {
            debug!("Candle cache hit for '{}' ({})", symbol, range.as_str());
            return Ok(cached);
        }

        match self.provider.fetch_candles(symbol, range).await {
            Ok(mut series) => {
                series.symbol = symbol.to_string();
                self.cache.insert(symbol, range, series.clone());
                Ok(series)
            }
            Err(e) => Err((symbol.to_string(), e)),
        }
    }
}
