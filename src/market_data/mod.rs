pub(crate) mod candle_cache;
pub(crate) mod fallback_provider;
pub(crate) mod market_data_errors;
pub(crate) mod market_data_model;
pub(crate) mod market_data_provider;
pub(crate) mod market_data_service;

// Re-export the public interface
pub use candle_cache::CandleCache;
pub use fallback_provider::FallbackProvider;
pub use market_data_errors::MarketDataError;
pub use market_data_model::{CandleSeries, DayRange};
pub use market_data_provider::BenchmarkProviderTrait;
pub use market_data_service::MarketDataService;
