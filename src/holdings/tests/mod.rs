pub(crate) mod model_serde_tests;
