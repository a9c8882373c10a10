use super::input::AppTextArea;
use crate::domain::models::{Answer, SubmissionId};
use ratatui::layout::Rect;

pub const QUERY_PLACEHOLDER: &str = "Ask anything about this video...";
pub const ANALYZE_FAILED_MESSAGE: &str = "Failed to analyze video. Please try again.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CommandResult {
    #[default]
    Idle,
    Loading,
    Success(Answer),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandPaletteState<'a> {
    pub query: AppTextArea<'a>,
    pub result: CommandResult,
    pub in_flight: Option<SubmissionId>,
    pub last_submission: SubmissionId,
    pub selected_suggestion: Option<usize>,
    pub result_scroll: u16,
    /// Where the answer text was last drawn; scrolling is clamped to it.
    pub result_viewport: Rect,
}

impl CommandPaletteState<'_> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn query_text(&self) -> String {
        self.query.value()
    }

    /// A submission needs a question, a video URL, and nothing already in flight.
    #[must_use]
    pub fn can_submit(&self, video_url: &str) -> bool {
        !self.is_loading() && !self.query_text().trim().is_empty() && !video_url.trim().is_empty()
    }

    /// Moves to `Loading` and clears the previous answer or error.
    pub fn begin_submission(&mut self) -> SubmissionId {
        let id = self.last_submission.next();
        self.last_submission = id;
        self.in_flight = Some(id);
        self.result = CommandResult::Loading;
        self.result_scroll = 0;
        id
    }

    /// Applies a finished request. Completions for any other submission are dropped.
    pub fn complete(&mut self, id: SubmissionId, outcome: Result<Answer, String>) -> bool {
        if self.in_flight != Some(id) {
            return false;
        }
        self.in_flight = None;
        self.result = match outcome {
            Ok(answer) => CommandResult::Success(answer),
            Err(message) => CommandResult::Error(message),
        };
        true
    }

    /// Suggestions are only offered while the result area has nothing else to show.
    #[must_use]
    pub fn shows_suggestions(&self) -> bool {
        self.result == CommandResult::Idle
    }
}

impl Default for CommandPaletteState<'_> {
    fn default() -> Self {
        let mut query = AppTextArea::default();
        query.set_placeholder_text(QUERY_PLACEHOLDER);
        Self {
            query,
            result: CommandResult::Idle,
            in_flight: None,
            last_submission: SubmissionId::default(),
            selected_suggestion: None,
            result_scroll: 0,
            result_viewport: Rect::default(),
        }
    }
}
