use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::components::modals::{helpers::contains, palette_layout, suggestion_rects};
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            if let Some(action) = app_state.keymap.get_action(key, app_state.mode) {
                return Some(action);
            }
            Some(Action::TextAreaInput(key))
        }
        Event::Paste(text) => Some(Action::Paste(text)),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Mouse(mouse) => {
            let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
            match app_state.mode {
                AppMode::Home => map_home_mouse(mouse, app_state, area),
                AppMode::CommandPalette => map_palette_mouse(mouse, app_state, area),
            }
        }
        _ => None,
    }
}

fn map_home_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return None;
    };
    let layout = ui::get_layout(area, app_state.home.video.video_id().is_some());

    if contains(layout.command_button, mouse.column, mouse.row) {
        Some(Action::OpenPalette)
    } else if contains(layout.analyze_button, mouse.column, mouse.row) {
        Some(Action::SubmitUrl)
    } else {
        None
    }
}

fn map_palette_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    let layout = palette_layout(area);
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollUp if contains(layout.results, column, row) => {
            Some(Action::ScrollResultUp(1))
        }
        MouseEventKind::ScrollDown if contains(layout.results, column, row) => {
            Some(Action::ScrollResultDown(1))
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if contains(layout.close_button, column, row) {
                return Some(Action::ClosePalette);
            }
            if contains(layout.ask_button, column, row) {
                return Some(Action::SubmitQuery);
            }
            if app_state.palette.shows_suggestions() {
                return suggestion_rects(layout.results)
                    .into_iter()
                    .find(|(_, rect)| contains(*rect, column, row))
                    .map(|(i, _)| Action::ApplySuggestion(i));
            }
            None
        }
        _ => None,
    }
}
