use std::sync::Arc;

use axum::{extract::State, Json};

use crate::api_models::{CacheClearResponse, DatasetStatusResponse};
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::services::dataset_cache::DatasetStatus;
use crate::services::loader::CommentFrame;

impl From<DatasetStatus> for DatasetStatusResponse {
    fn from(status: DatasetStatus) -> Self {
        Self {
            path: status.path.display().to_string(),
            loaded: status.loaded,
            rows: status.rows,
        }
    }
}

/// 首次加载是阻塞的 CSV 读取，放到 blocking 线程池执行
pub async fn load_frame(state: &AppState) -> Result<Arc<CommentFrame>, AppError> {
    let cache = Arc::clone(&state.cache);
    let loaded = tokio::task::spawn_blocking(move || cache.get_or_load())
        .await
        .map_err(|e| {
            tracing::error!("dataset load task failed: {}", e);
            AppError::InternalServerError
        })?;
    Ok(loaded?)
}

pub async fn dataset_status(State(state): State<AppState>) -> Json<DatasetStatusResponse> {
    Json(state.cache.status().into())
}

/// 清空数据集缓存，下次请求重新读取 CSV
pub async fn clear_cache(State(state): State<AppState>) -> Json<CacheClearResponse> {
    let cleared = state.cache.clear();
    Json(CacheClearResponse { cleared })
}
