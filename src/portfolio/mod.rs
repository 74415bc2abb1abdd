pub mod allocation;
pub mod analytics_service;
pub mod benchmark;
pub mod diversification;
pub mod income;
pub mod performance;

#[cfg(test)]
pub(crate) mod tests;

pub use allocation::*;
pub use analytics_service::{AnalyticsService, PortfolioOverview, ReturnsSummary};
pub use benchmark::*;
pub use diversification::*;
pub use income::*;
pub use performance::*;
