use crate::domain::models::{AnalyzeRequest, SubmissionId};

/// Side effects requested by the reducer, run by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CheckHealth,
    Analyze(SubmissionId, AnalyzeRequest),
    CacheVideo(String),
}
