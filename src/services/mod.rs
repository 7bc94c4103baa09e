pub mod chart;
pub mod dataset_cache;
pub mod loader;
pub mod sentiment_pipeline;
