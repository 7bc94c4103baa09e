pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod sentiment;

#[allow(unused_imports)]
pub use chart::Figure;
#[allow(unused_imports)]
pub use dashboard::DashboardQuery;
#[allow(unused_imports)]
pub use dataset::{CacheClearResponse, DatasetStatusResponse};
#[allow(unused_imports)]
pub use sentiment::{CompaniesResponse, SentimentQuery, SentimentResponse, SentimentRowResponse};
