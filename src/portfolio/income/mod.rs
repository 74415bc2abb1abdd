pub mod income_model;
pub mod income_service;

pub use income_model::{DividendAnalytics, HoldingIncome, MonthlyIncome};
pub use income_service::calculate_dividend_analytics;
