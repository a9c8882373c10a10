use crate::domain::models::{AnalyzeRequest, AnalyzeResponse, CacheResponse};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The remote video analysis service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    // `GET /health`, any 2xx counts as alive
    async fn health(&self) -> Result<(), ApiError>;

    // `POST /analyze`
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, ApiError>;

    // `POST /cache`
    async fn cache(&self, url: &str) -> Result<CacheResponse, ApiError>;

    fn base_url(&self) -> String;
}
