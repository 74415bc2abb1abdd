pub mod benchmark_model;
pub mod benchmark_service;

pub use benchmark_model::BenchmarkComparison;
pub use benchmark_service::align_benchmarks;
