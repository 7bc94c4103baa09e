use axum::{
    extract::{Query, State},
    Json,
};

use crate::api_models::sentiment::requested_company;
use crate::api_models::{CompaniesResponse, Figure, SentimentQuery, SentimentResponse};
use crate::app::AppState;
use crate::handler::dataset::load_frame;
use crate::handler::error::AppError;
use crate::models::SentimentReport;
use crate::services::{chart, sentiment_pipeline};

/// 公司列表（下拉框数据源）
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<CompaniesResponse>, AppError> {
    let frame = load_frame(&state).await?;
    let companies = frame.companies().map_err(|e| {
        tracing::error!("Failed to list companies: {}", e);
        AppError::InternalServerError
    })?;
    Ok(Json(CompaniesResponse {
        count: companies.len(),
        companies,
    }))
}

/// 按日期聚合后的情感比例
pub async fn get_sentiment(
    State(state): State<AppState>,
    Query(query): Query<SentimentQuery>,
) -> Result<Json<SentimentResponse>, AppError> {
    let report = load_report(&state, query).await?;
    let rows: Vec<_> = report.rows.into_iter().map(Into::into).collect();
    Ok(Json(SentimentResponse {
        company: report.company,
        count: rows.len(),
        rows,
    }))
}

/// Plotly 图表 JSON
pub async fn get_sentiment_chart(
    State(state): State<AppState>,
    Query(query): Query<SentimentQuery>,
) -> Result<Json<Figure>, AppError> {
    let report = load_report(&state, query).await?;
    Ok(Json(chart::build_figure(&report)))
}

async fn load_report(
    state: &AppState,
    query: SentimentQuery,
) -> Result<SentimentReport, AppError> {
    let company = requested_company(query.company)
        .ok_or_else(|| AppError::BadRequest("company is required".to_string()))?;
    let frame = load_frame(state).await?;
    Ok(sentiment_pipeline::run(&frame, &company)?)
}
