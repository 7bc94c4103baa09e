use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_DATASET: &str = "nifty50_reddit_comments_sentiment.csv";

pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8501);
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("invalid HOST/PORT: {}:{}", host, port))?;
        Ok(Self { addr })
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        let dataset_path = std::env::var("DATASET_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATASET.to_string());
        Self {
            dataset_path: PathBuf::from(dataset_path),
        }
    }
}
