use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::sentiment::{get_sentiment, get_sentiment_chart, list_companies};

pub fn companies_router() -> Router<AppState> {
    Router::new().route("/companies", get(list_companies))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_sentiment))
        .route("/chart", get(get_sentiment_chart))
}
