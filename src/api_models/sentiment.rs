use serde::{Deserialize, Serialize};

use crate::models::DailySentiment;
use crate::utils::timestamp::format_display;

#[derive(Debug, Deserialize)]
pub struct SentimentQuery {
    pub company: Option<String>,
}

/// 页面与接口共用：空白公司名视为未传
pub fn requested_company(raw: Option<String>) -> Option<String> {
    raw.filter(|c| !c.trim().is_empty())
}

#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
    pub count: usize,
    /// 按数据集中首次出现的顺序
    pub companies: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SentimentRowResponse {
    /// 格式：YYYY-MM-DD HH:MM:SS
    pub time: String,
    pub positive_weight: f64,
    pub negative_weight: f64,
    pub total_weight: f64,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    pub color: String,
}

impl From<DailySentiment> for SentimentRowResponse {
    fn from(row: DailySentiment) -> Self {
        Self {
            time: format_display(&row.time),
            positive_weight: row.positive_weight,
            negative_weight: row.negative_weight,
            total_weight: row.total_weight,
            positive_ratio: row.positive_ratio,
            negative_ratio: row.negative_ratio,
            color: row.color,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub company: String,
    pub count: usize,
    pub rows: Vec<SentimentRowResponse>,
}
