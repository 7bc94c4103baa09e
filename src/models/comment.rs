use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const POSITIVE: &str = "POSITIVE";
pub const NEGATIVE: &str = "NEGATIVE";

/// 情感分类标签，非 POSITIVE/NEGATIVE 的原样保留在 `Other` 中
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Other(String),
}

impl SentimentLabel {
    pub fn parse(raw: &str) -> Self {
        match raw {
            POSITIVE => SentimentLabel::Positive,
            NEGATIVE => SentimentLabel::Negative,
            other => SentimentLabel::Other(other.to_string()),
        }
    }
}

/// 一条已打标签的评论（CSV 中的一行）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub time: NaiveDateTime,
    pub company: String,
    /// 缺失标签为 None，不参与聚合
    pub label: Option<String>,
    pub upvotes: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_parsing_is_case_sensitive() {
        assert_eq!(SentimentLabel::parse("POSITIVE"), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::parse("NEGATIVE"), SentimentLabel::Negative);
        assert_eq!(
            SentimentLabel::parse("positive"),
            SentimentLabel::Other("positive".to_string())
        );
        assert_eq!(
            SentimentLabel::parse(""),
            SentimentLabel::Other(String::new())
        );
    }
}
