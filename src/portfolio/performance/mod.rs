pub mod performance_model;
pub mod performance_service;

pub use performance_model::TimeWeightedReturn;
pub use performance_service::{calculate_sharpe_ratio, calculate_time_weighted_return};
