pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod sentiment;
