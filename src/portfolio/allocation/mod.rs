pub mod allocation_model;
pub mod allocation_service;

pub use allocation_model::{ConcentrationMetrics, ExposureSlice, ExposureType};
pub use allocation_service::{calculate_concentration, exposure_breakdown};
