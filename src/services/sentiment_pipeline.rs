use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use polars::prelude::*;
use thiserror::Error;

use crate::models::{DailySentiment, DailyWeights, SentimentLabel, SentimentReport};
use crate::services::loader::{CommentFrame, DataFormatError, LABEL, TIME, UPVOTES};
use crate::utils::color::{clamp_channel, green, red};
use crate::utils::timestamp::from_millis;

#[derive(Debug, Error)]
#[error("no data available for company {company:?}")]
pub struct EmptySelectionError {
    pub company: String,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    DataFormat(#[from] DataFormatError),
    #[error(transparent)]
    EmptySelection(#[from] EmptySelectionError),
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// 单个时间点各标签的点赞和，未出现的标签保持 `None`
#[derive(Debug, Default)]
struct LabelSums {
    positive: Option<f64>,
    negative: Option<f64>,
}

pub fn filter_company(frame: &CommentFrame, company: &str) -> Result<CommentFrame, PipelineError> {
    let subset = frame.filter_company(company)?;
    if subset.is_empty() {
        tracing::warn!("no comments for company {:?}", company);
        return Err(EmptySelectionError {
            company: company.to_string(),
        }
        .into());
    }
    Ok(subset)
}

/// 按 (Time, BERT_Label) 分组求和，再转成每个 Time 一行
pub fn aggregate(frame: &CommentFrame) -> Result<Vec<DailyWeights>, PipelineError> {
    let grouped = frame
        .dataframe()
        .clone()
        .lazy()
        .group_by([col(TIME), col(LABEL)])
        .agg([col(UPVOTES).sum()])
        .collect()?;

    let times = grouped.column(TIME)?.cast(&DataType::Int64)?;
    let labels = grouped.column(LABEL)?;
    let sums = grouped.column(UPVOTES)?;

    let mut by_time: BTreeMap<i64, LabelSums> = BTreeMap::new();
    for ((ms, label), sum) in times
        .i64()?
        .into_iter()
        .zip(labels.str()?.into_iter())
        .zip(sums.f64()?.into_iter())
    {
        let Some(ms) = ms else { continue };
        // 缺失标签的分组整体丢弃，不产生时间行
        let Some(label) = label else { continue };
        // 其他标签仍然产生时间行，只是不计入权重
        let entry = by_time.entry(ms).or_default();
        match SentimentLabel::parse(label) {
            SentimentLabel::Positive => entry.positive = Some(sum.unwrap_or(0.0)),
            SentimentLabel::Negative => entry.negative = Some(sum.unwrap_or(0.0)),
            SentimentLabel::Other(other) => {
                tracing::trace!("label {:?} excluded from weights", other)
            }
        }
    }

    let rows: Vec<DailyWeights> = by_time
        .into_iter()
        .filter_map(|(ms, sums)| from_millis(ms).map(|time| weigh(time, &sums)))
        .collect();
    tracing::debug!(
        "aggregated {} comments into {} time buckets",
        frame.height(),
        rows.len()
    );
    Ok(rows)
}

fn weigh(time: NaiveDateTime, sums: &LabelSums) -> DailyWeights {
    let positive_weight = sums.positive.unwrap_or(0.0).abs();
    let negative_weight = sums.negative.unwrap_or(0.0).abs();
    let mut total_weight = positive_weight + negative_weight;
    if total_weight == 0.0 {
        total_weight = 1.0;
    }
    DailyWeights {
        time,
        positive_weight,
        negative_weight,
        total_weight,
    }
}

pub fn encode(weights: Vec<DailyWeights>) -> Vec<DailySentiment> {
    weights.into_iter().map(encode_row).collect()
}

pub fn encode_row(w: DailyWeights) -> DailySentiment {
    let positive_ratio = w.positive_weight / w.total_weight;
    let negative_ratio = w.negative_weight / w.total_weight;
    DailySentiment {
        time: w.time,
        positive_weight: w.positive_weight,
        negative_weight: w.negative_weight,
        total_weight: w.total_weight,
        positive_ratio,
        negative_ratio,
        color: dominant_color(positive_ratio, negative_ratio),
    }
}

/// 负面严格占优时为红色，否则为绿色；强度截断到 [0, 255]
pub fn dominant_color(positive_ratio: f64, negative_ratio: f64) -> String {
    if negative_ratio > positive_ratio {
        red(clamp_channel(negative_ratio * 255.0))
    } else {
        green(clamp_channel(positive_ratio * 255.0))
    }
}

pub fn run(frame: &CommentFrame, company: &str) -> Result<SentimentReport, PipelineError> {
    let subset = filter_company(frame, company)?;
    let rows = encode(aggregate(&subset)?);
    Ok(SentimentReport {
        company: company.to_string(),
        rows,
    })
}
