use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Every provider failed for every requested symbol. Distinct from a
    /// symbol simply having too little data.
    #[error("All market data providers failed: {0}")]
    AllProvidersFailed(String),
}
