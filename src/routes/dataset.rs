use axum::{routing::{get, post}, Router};

use crate::app::AppState;
use crate::handler::dataset::{clear_cache, dataset_status};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dataset_status))
        .route("/cache/clear", post(clear_cache))
}
