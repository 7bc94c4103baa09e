use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::loader::DataFormatError;
use crate::services::sentiment_pipeline::PipelineError;

pub const NO_DATA_MESSAGE: &str = "No data available for this company.";

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    /// 所选公司没有任何评论
    EmptySelection(String),
    /// 数据集无法加载或格式不对
    DataFormat(String),
    InternalServerError,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "bad request", "message": msg})),
            )
                .into_response(),
            AppError::EmptySelection(company) => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "no data", "message": NO_DATA_MESSAGE, "company": company})),
            )
                .into_response(),
            AppError::DataFormat(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "data format error", "message": msg})),
            )
                .into_response(),
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "internal server error"})),
            )
                .into_response(),
        }
    }
}

impl From<DataFormatError> for AppError {
    fn from(err: DataFormatError) -> Self {
        AppError::DataFormat(err.to_string())
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::DataFormat(e) => e.into(),
            PipelineError::EmptySelection(e) => AppError::EmptySelection(e.company),
            PipelineError::Polars(e) => {
                tracing::error!("pipeline failed: {}", e);
                AppError::InternalServerError
            }
        }
    }
}
