use axum::Router;

use crate::app::AppState;

mod dataset;
mod root;
mod sentiment;

pub fn build_routes() -> Router<AppState> {
    Router::new()
        // 页面与健康检查
        .merge(root::router())
        // JSON 接口统一挂在 /api 前缀下
        .nest(
            "/api",
            sentiment::companies_router()
                .nest("/sentiment", sentiment::router())
                .nest("/dataset", dataset::router()),
        )
}
