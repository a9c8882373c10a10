use crate::app::{action::Action, command::Command, features::home::CACHE_FAILED_MESSAGE};
use crate::app::state::ANALYZE_FAILED_MESSAGE;
use crate::domain::analysis::AnalysisApi;
use crate::domain::models::{Answer, ApiHealth};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Runs a command on its own task and reports the outcome back as an action.
/// Nothing here is cancelled: a request outlives the palette that started it.
pub fn handle_command(
    command: Command,
    api: Arc<dyn AnalysisApi>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::CheckHealth => {
            tokio::spawn(async move {
                let health = match api.health().await {
                    Ok(()) => ApiHealth::Online,
                    Err(e) => {
                        warn!(error = %e, base_url = %api.base_url(), "liveness probe failed");
                        ApiHealth::Offline
                    }
                };
                let _ = tx.send(Action::HealthChecked(health)).await;
            });
        }
        Command::Analyze(id, request) => {
            tokio::spawn(async move {
                let outcome = match api.analyze(&request).await {
                    Ok(response) => Ok(Answer::from(response)),
                    Err(e) => {
                        error!(submission = %id, error = %e, "analyze request failed");
                        Err(ANALYZE_FAILED_MESSAGE.to_string())
                    }
                };
                let _ = tx.send(Action::AnalyzeCompleted(id, outcome)).await;
            });
        }
        Command::CacheVideo(url) => {
            tokio::spawn(async move {
                let outcome = match api.cache(&url).await {
                    Ok(response) => {
                        info!(video = %url, status = %response.status, "cache requested");
                        Ok(response.status)
                    }
                    Err(e) => {
                        error!(video = %url, error = %e, "cache request failed");
                        Err(CACHE_FAILED_MESSAGE.to_string())
                    }
                };
                let _ = tx.send(Action::VideoCached(outcome)).await;
            });
        }
    }
    Ok(())
}
