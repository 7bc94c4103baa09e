pub mod comment;
pub mod daily_sentiment;

pub use comment::{Comment, SentimentLabel};
pub use daily_sentiment::{DailySentiment, DailyWeights, SentimentReport};
