use youchat::app::state::{AppMode, AppState, CommandResult, StatusSeverity};
use youchat::domain::models::{Answer, ApiHealth};
use youchat::theme::PaletteType;
use ratatui::{backend::TestBackend, Terminal};

fn draw_all_sizes(app_state: &mut AppState) {
    for width in (0..100).step_by(3) {
        for height in 0..50 {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            let _ = terminal.draw(|f| {
                youchat::app::ui::draw(f, app_state);
            });
        }
    }
}

fn main() {
    let results = [
        CommandResult::Idle,
        CommandResult::Loading,
        CommandResult::Error("Failed to analyze video. Please try again.".to_string()),
        CommandResult::Success(Answer {
            text: "A long answer that wraps across several lines of the palette.\n".repeat(20),
            metadata: Some("prompt_tokens=812 completion_tokens=240".to_string()),
            received_at: chrono::Local::now(),
        }),
    ];

    for palette_type in [PaletteType::YouTube, PaletteType::Nord] {
        for health in [ApiHealth::Checking, ApiHealth::Online, ApiHealth::Offline] {
            for url in ["", "https://www.youtube.com/watch?v=dQw4w9WgXcQ", "not a video"] {
                let mut app_state = AppState::new("http://localhost:8000", palette_type);
                app_state.home.api_health = health;
                app_state.home.url_input.set_text(url);
                app_state.home.sync_video();

                app_state.mode = AppMode::Home;
                draw_all_sizes(&mut app_state);

                app_state.mode = AppMode::CommandPalette;
                for result in &results {
                    app_state.palette.result = result.clone();
                    app_state.palette.result_scroll = 3;
                    draw_all_sizes(&mut app_state);
                }
            }
        }
    }

    // Also test with a status message that will not fit the footer
    let mut app_state = AppState::default();
    app_state.set_status(
        "Test error message that might be long and cause issues if not handled correctly by the layout engine.",
        StatusSeverity::Error,
    );
    draw_all_sizes(&mut app_state);

    println!("Layout verification passed for all sizes!");
}
