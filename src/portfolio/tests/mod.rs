pub(crate) mod support;

pub(crate) mod income_tests;
pub(crate) mod performance_tests;
