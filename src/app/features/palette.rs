use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, CommandResult},
    suggestions,
};
use crate::components::modals::command_palette::max_answer_scroll;
use crate::domain::models::AnalyzeRequest;
use tracing::{debug, info};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TogglePalette => {
            state.mode = if state.is_palette_open() {
                AppMode::Home
            } else {
                AppMode::CommandPalette
            };
            UpdateResult::Handled(None)
        }
        Action::OpenPalette => {
            if state.home.controls().open_command {
                state.mode = AppMode::CommandPalette;
            }
            UpdateResult::Handled(None)
        }
        Action::ClosePalette => {
            state.mode = AppMode::Home;
            UpdateResult::Handled(None)
        }
        Action::TextAreaInput(key) if state.is_palette_open() => {
            if state.palette.query.input_single_line(*key) {
                state.palette.selected_suggestion = None;
            }
            UpdateResult::Handled(None)
        }
        Action::Paste(text) if state.is_palette_open() => {
            if state.palette.query.paste(text) {
                state.palette.selected_suggestion = None;
            }
            UpdateResult::Handled(None)
        }
        Action::SubmitQuery => UpdateResult::Handled(submit(state)),
        Action::ApplySuggestion(index) => {
            apply_suggestion(state, *index);
            UpdateResult::Handled(None)
        }
        Action::NextSuggestion => {
            apply_suggestion(state, suggestions::next_index(state.palette.selected_suggestion));
            UpdateResult::Handled(None)
        }
        Action::PrevSuggestion => {
            apply_suggestion(state, suggestions::prev_index(state.palette.selected_suggestion));
            UpdateResult::Handled(None)
        }
        Action::ScrollResultUp(amount) => {
            state.palette.result_scroll = state.palette.result_scroll.saturating_sub(*amount);
            UpdateResult::Handled(None)
        }
        Action::ScrollResultDown(amount) => {
            let max_scroll = match &state.palette.result {
                CommandResult::Success(answer) => {
                    max_answer_scroll(&answer.text, state.palette.result_viewport)
                }
                _ => 0,
            };
            state.palette.result_scroll = state
                .palette
                .result_scroll
                .saturating_add(*amount)
                .min(max_scroll);
            UpdateResult::Handled(None)
        }
        Action::AnalyzeCompleted(id, outcome) => {
            if state.palette.complete(*id, outcome.clone()) {
                info!(submission = %id, ok = outcome.is_ok(), "analysis finished");
            } else {
                debug!(submission = %id, "dropping completion for a submission that is not in flight");
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn submit(state: &mut AppState) -> Option<Command> {
    let url = state.home.video.url().to_string();
    if !state.palette.can_submit(&url) {
        return None;
    }
    let command = state.palette.query_text();
    let id = state.palette.begin_submission();
    info!(submission = %id, "submitting question");
    Some(Command::Analyze(id, AnalyzeRequest { url, command }))
}

fn apply_suggestion(state: &mut AppState, index: usize) {
    if !state.palette.shows_suggestions() {
        return;
    }
    if let Some(text) = suggestions::get(index) {
        state.palette.query.set_text(text);
        state.palette.selected_suggestion = Some(index);
    }
}
