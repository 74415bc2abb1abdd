pub mod constants;
pub mod errors;
pub mod holdings;
pub mod market_data;
pub mod portfolio;
pub mod transactions;
pub mod utils;

pub use errors::{Error, Result};
pub use portfolio::*;
pub use transactions::*;
