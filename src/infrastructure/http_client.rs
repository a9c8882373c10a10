use crate::domain::{
    analysis::{AnalysisApi, ApiError},
    models::{AnalyzeRequest, AnalyzeResponse, CacheRequest, CacheResponse},
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    base_url: String,
}

impl HttpAnalysisClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!("youchat/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = check_status(response)?.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl AnalysisApi for HttpAnalysisClient {
    async fn health(&self) -> Result<(), ApiError> {
        let url = self.endpoint("health");
        debug!(%url, "probing backend");
        let response = self.client.get(&url).send().await?;
        check_status(response).map(|_| ())
    }

    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, ApiError> {
        let url = self.endpoint("analyze");
        debug!(%url, video = %request.url, "submitting analyze request");
        let response = self.client.post(&url).json(request).send().await?;
        decode(response).await
    }

    async fn cache(&self, url: &str) -> Result<CacheResponse, ApiError> {
        let endpoint = self.endpoint("cache");
        debug!(url = %endpoint, video = %url, "requesting video cache");
        let body = CacheRequest {
            url: url.to_string(),
        };
        let response = self.client.post(&endpoint).json(&body).send().await?;
        decode(response).await
    }

    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}
