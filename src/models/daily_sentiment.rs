use chrono::NaiveDateTime;
use serde::Serialize;

/// 某一时间点按点赞数加权后的正负情感权重
#[derive(Debug, Clone, PartialEq)]
pub struct DailyWeights {
    pub time: NaiveDateTime,
    pub positive_weight: f64,
    pub negative_weight: f64,
    /// positive + negative，恰好为 0 时替换为 1
    pub total_weight: f64,
}

/// 编码后的展示行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySentiment {
    pub time: NaiveDateTime,
    pub positive_weight: f64,
    pub negative_weight: f64,
    pub total_weight: f64,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    /// 主导情感颜色，仅用于原始数据表
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    pub company: String,
    pub rows: Vec<DailySentiment>,
}
