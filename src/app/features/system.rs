use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::AppState,
};
use crate::domain::models::ApiHealth;
use std::time::Instant;
use tracing::info;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state
                .status
                .as_ref()
                .is_some_and(|s| s.is_expired(Instant::now()))
            {
                state.status = None;
            }
            UpdateResult::Handled(None)
        }
        Action::Resize(_, _) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::CheckHealth => {
            state.home.api_health = ApiHealth::Checking;
            UpdateResult::Handled(Some(Command::CheckHealth))
        }
        Action::HealthChecked(health) => {
            info!(health = health.label(), "backend liveness updated");
            state.home.api_health = *health;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
