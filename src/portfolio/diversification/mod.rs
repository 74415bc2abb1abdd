pub mod diversification_model;
pub mod diversification_service;

pub use diversification_model::{DiversificationAssessment, ScoringRules};
pub use diversification_service::score_diversification;
