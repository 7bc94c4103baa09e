use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::dashboard::dashboard;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard))
        .route("/healthz", get(healthz))
}

async fn healthz() -> &'static str {
    "ok"
}
