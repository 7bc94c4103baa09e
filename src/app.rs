use std::sync::Arc;

use axum::Router;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::routes;
use crate::services::dataset_cache::DatasetCache;
use crate::utils::config::DashboardConfig;
use crate::utils::middleware;

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<DatasetCache>,
}

pub fn build_app(cfg: &DashboardConfig) -> Router {
    let cache = Arc::new(DatasetCache::new(cfg.dataset_path.clone()));
    build_app_with_cache(cache)
}

pub fn build_app_with_cache(cache: Arc<DatasetCache>) -> Router {
    let state = AppState { cache };

    routes::build_routes()
        .with_state(state)
        .layer(middleware::cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
