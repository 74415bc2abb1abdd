use dashmap::DashMap;
use std::time::{Duration, Instant};

use super::market_data_model::{CandleSeries, DayRange};
use crate::constants::CANDLE_CACHE_TTL_SECS;

struct CachedSeries {
    series: CandleSeries,
    fetched_at: Instant,
}

/// Shared candle cache keyed by symbol and range with a fixed time-to-live.
/// Lives in the fetch layer and is injected into it; the pure analytics
/// components never see it.
pub struct CandleCache {
    entries: DashMap<String, CachedSeries>,
    ttl: Duration,
}

impl CandleCache {
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(CANDLE_CACHE_TTL_SECS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        CandleCache {
            entries: DashMap::new(),
            ttl,
        }
    }

    fn key(symbol: &str, range: DayRange) -> String {
        format!("{}:{}", symbol, range.as_str())
    }

    /// Fresh entry or `None`; stale entries are evicted on access.
    pub fn get(&self, symbol: &str, range: DayRange) -> Option<CandleSeries> {
        let key = Self::key(symbol, range);
        if let Some(entry) = self.entries.get(&key) {
            if entry.fetched_at.elapsed() < self.ttl {
                return Some(entry.series.clone());
            }
        }
        self.entries.remove(&key);
        None
    }

    pub fn insert(&self, symbol: &str, range: DayRange, series: CandleSeries) {
        self.entries.insert(
            Self::key(symbol, range),
            CachedSeries {
                series,
                fetched_at: Instant::now(),
            },
        );
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for CandleCache {
    fn default() -> Self {
        Self::new()
    }
}
