use crate::api_models::chart::{Axis, Figure, Layout, Marker, ScatterTrace, Title};
use crate::models::{DailySentiment, SentimentReport};
use crate::utils::color::{green, red};
use crate::utils::timestamp::format_display;

pub const POSITIVE_TRACE: &str = "Positive Sentiment";
pub const NEGATIVE_TRACE: &str = "Negative Sentiment";

pub fn chart_title(company: &str) -> String {
    format!("Sentiment Intensity Over Time for {} (Upvote-Weighted)", company)
}

/// 正负两条散点序列，点大小为 total_weight。
/// 这里的逐点颜色不做截断，与 `DailySentiment::color` 不同。
pub fn build_figure(report: &SentimentReport) -> Figure {
    let positive = trace(POSITIVE_TRACE, &report.rows, |r| r.positive_ratio, |v| {
        green(v * 255.0)
    });
    let negative = trace(NEGATIVE_TRACE, &report.rows, |r| r.negative_ratio, |v| {
        red(v * 255.0)
    });

    Figure {
        data: vec![positive, negative],
        layout: Layout {
            title: Title::new(chart_title(&report.company)),
            xaxis: Axis {
                title: Title::new("Time"),
            },
            yaxis: Axis {
                title: Title::new("Sentiment Proportion"),
            },
        },
    }
}

fn trace(
    name: &'static str,
    rows: &[DailySentiment],
    ratio: impl Fn(&DailySentiment) -> f64,
    paint: impl Fn(f64) -> String,
) -> ScatterTrace {
    ScatterTrace {
        kind: "scatter",
        mode: "markers",
        name,
        x: rows.iter().map(|r| format_display(&r.time)).collect(),
        y: rows.iter().map(&ratio).collect(),
        marker: Marker {
            size: rows.iter().map(|r| r.total_weight).collect(),
            color: rows.iter().map(|r| paint(ratio(r))).collect(),
        },
    }
}
