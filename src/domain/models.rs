use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiHealth {
    #[default]
    Checking,
    Online,
    Offline,
}

impl ApiHealth {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ApiHealth::Checking => "Checking...",
            ApiHealth::Online => "Online",
            ApiHealth::Offline => "Offline",
        }
    }

    #[must_use]
    pub fn is_online(self) -> bool {
        self == ApiHealth::Online
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SubmissionId(pub u64);

impl SubmissionId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Body of `POST /analyze`. `url` is the raw text from the URL field, not the parsed id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest {
    pub url: String,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalyzeResponse {
    pub text: String,
    #[serde(default)]
    pub metadata: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheRequest {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CacheResponse {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
    pub metadata: Option<String>,
    pub received_at: DateTime<Local>,
}

impl From<AnalyzeResponse> for Answer {
    fn from(response: AnalyzeResponse) -> Self {
        Self {
            text: response.text,
            metadata: response.metadata,
            received_at: Local::now(),
        }
    }
}
