use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, StatusSeverity},
};

pub const CACHE_FAILED_MESSAGE: &str = "Failed to cache video.";

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TextAreaInput(key) if state.mode == AppMode::Home => {
            if state.home.controls().url_input && state.home.url_input.input_single_line(*key) {
                state.home.sync_video();
            }
            UpdateResult::Handled(None)
        }
        Action::Paste(text) if state.mode == AppMode::Home => {
            if state.home.controls().url_input && state.home.url_input.paste(text) {
                state.home.sync_video();
            }
            UpdateResult::Handled(None)
        }
        Action::SubmitUrl => {
            if state.home.controls().analyze {
                state.mode = AppMode::CommandPalette;
            }
            UpdateResult::Handled(None)
        }
        Action::CacheVideo => {
            if !state.home.controls().cache {
                return UpdateResult::Handled(None);
            }
            let url = state.home.video.url().to_string();
            state.set_status("Caching video...", StatusSeverity::Info);
            UpdateResult::Handled(Some(Command::CacheVideo(url)))
        }
        Action::VideoCached(outcome) => {
            match outcome {
                Ok(status) => state.set_status(status.clone(), StatusSeverity::Info),
                Err(message) => state.set_status(message.clone(), StatusSeverity::Error),
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
