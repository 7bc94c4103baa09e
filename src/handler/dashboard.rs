use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};

use crate::api_models::sentiment::requested_company;
use crate::api_models::DashboardQuery;
use crate::app::AppState;
use crate::handler::dataset::load_frame;
use crate::handler::error::AppError;
use crate::services::sentiment_pipeline::{self, PipelineError};
use crate::services::chart;
use crate::views::dashboard::{render, DashboardPage, PageContent};

/// 仪表盘页面：每次切换公司或原始数据开关都会完整重算
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> (StatusCode, Html<String>) {
    let show_raw = query.raw.unwrap_or(false);

    let frame = match load_frame(&state).await {
        Ok(frame) => frame,
        Err(AppError::DataFormat(msg)) => return load_error(show_raw, msg),
        Err(_) => return load_error(show_raw, "internal server error".to_string()),
    };
    let companies = match frame.companies() {
        Ok(companies) => companies,
        Err(e) => {
            tracing::error!("Failed to list companies: {}", e);
            return load_error(show_raw, e.to_string());
        }
    };

    // 默认选中第一个公司
    let selected =
        requested_company(query.company).or_else(|| companies.first().cloned());

    let content = match selected.as_deref() {
        None => PageContent::NoData,
        Some(company) => match sentiment_pipeline::run(&frame, company) {
            Ok(report) => {
                let figure = chart::build_figure(&report);
                match serde_json::to_string(&figure) {
                    Ok(figure_json) => PageContent::Chart {
                        figure_json,
                        rows: report.rows,
                    },
                    Err(e) => {
                        tracing::error!("Failed to serialize figure: {}", e);
                        return load_error(show_raw, e.to_string());
                    }
                }
            }
            Err(PipelineError::EmptySelection(_)) => PageContent::NoData,
            Err(e) => {
                tracing::error!("Sentiment pipeline failed for {}: {}", company, e);
                return load_error(show_raw, e.to_string());
            }
        },
    };

    let page = DashboardPage {
        companies: &companies,
        selected: selected.as_deref(),
        show_raw,
        content,
    };
    (StatusCode::OK, Html(render(&page)))
}

fn load_error(show_raw: bool, message: String) -> (StatusCode, Html<String>) {
    let page = DashboardPage {
        companies: &[],
        selected: None,
        show_raw,
        content: PageContent::LoadError(message),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Html(render(&page)))
}
