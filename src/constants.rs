use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for valuation and return calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display-oriented amounts (income, gains)
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Trading days per year, used to annualize daily volatility
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Calendar days per year for annualizing returns over date spans
pub const DAYS_PER_YEAR_DECIMAL: Decimal = dec!(365.25);

/// sqrt(252), fallback when Decimal::sqrt is unavailable
pub const SQRT_TRADING_DAYS_APPROX: Decimal = dec!(15.874507866);

/// Annual risk-free rate used by the Sharpe ratio
pub const RISK_FREE_RATE_ANNUAL: Decimal = dec!(0.03);

/// Minimum per-interval return samples before a Sharpe ratio is reported
pub const MIN_SHARPE_SAMPLES: usize = 20;

/// Trailing window for dividend income analytics, in days
pub const TTM_WINDOW_DAYS: i64 = 365;

/// Number of buckets in the monthly income histogram
pub const INCOME_HISTOGRAM_MONTHS: u32 = 12;

/// Maximum number of diversification insights returned
pub const MAX_INSIGHTS: usize = 5;

/// Default combined-crypto-weight threshold, in percent
pub const DEFAULT_CRYPTO_THRESHOLD_PERCENT: Decimal = dec!(30);

/// Time-to-live for cached benchmark candle series
pub const CANDLE_CACHE_TTL_SECS: u64 = 4 * 60 * 60;

/// Symbols fetched concurrently per batch against benchmark providers
pub const BENCHMARK_FETCH_BATCH_SIZE: usize = 4;

/// Pause between symbol batches to respect provider rate limits
pub const BENCHMARK_BATCH_DELAY_MS: u64 = 250;
