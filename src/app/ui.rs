use crate::app::state::{AppState, AppTextArea, CommandResult};
use crate::components::footer::Footer;
use crate::components::header::{command_button_rect, Header};
use crate::components::home::{
    url_panel_layout, Instructions, UrlPanel, VideoPreview, PREVIEW_HEIGHT, URL_PANEL_HEIGHT,
};
use crate::components::modals::{answer_area, max_answer_scroll, palette_layout, CommandPaletteModal};
use crate::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    Frame,
};

const MAX_BODY_WIDTH: u16 = 90;

/// Screen geometry of the home page, shared by `draw` and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub command_button: Rect,
    pub url_panel: Rect,
    pub url_input: Rect,
    pub analyze_button: Rect,
    pub preview: Option<Rect>,
    pub instructions: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect, has_preview: bool) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = main[1];
    let width = body.width.min(MAX_BODY_WIDTH);
    let column = Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y.saturating_add(1).min(body.bottom()),
        width,
        height: body.height.saturating_sub(1),
    };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(URL_PANEL_HEIGHT),
            Constraint::Length(if has_preview { PREVIEW_HEIGHT } else { 0 }),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(column);

    let url_panel = sections[0];
    let panel = url_panel_layout(url_panel);

    AppLayout {
        header: main[0],
        command_button: command_button_rect(main[0]),
        url_panel,
        url_input: panel.input,
        analyze_button: panel.analyze_button,
        preview: has_preview.then_some(sections[1]),
        instructions: sections[3],
        footer: main[2],
    }
}

fn visible(area: Rect) -> bool {
    area.width > 0 && area.height > 0
}

/// Styles a single-line text area for the current frame. Only the focused,
/// enabled field shows a cursor.
fn style_text_area(text_area: &mut AppTextArea, theme: &Theme, enabled: bool, focused: bool) {
    let base = if enabled { theme.input } else { theme.input_disabled };
    text_area.set_style(base);
    text_area.set_cursor_line_style(Style::default());
    text_area.set_placeholder_style(theme.placeholder);
    text_area.set_cursor_style(if enabled && focused {
        theme.cursor
    } else {
        base
    });
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if !visible(area) {
        return;
    }

    let theme = app_state.theme.clone();
    let controls = app_state.home.controls();
    let palette_open = app_state.is_palette_open();
    let video_id = app_state.home.video.video_id().cloned();
    let layout = get_layout(area, video_id.is_some());

    // --- Header ---
    if visible(layout.header) {
        f.render_widget(
            Header {
                health: app_state.home.api_health,
                command_enabled: controls.open_command,
                spinner: app_state.spinner(),
                theme: &theme,
            },
            layout.header,
        );
    }

    // --- URL panel ---
    if visible(layout.url_panel) {
        f.render_widget(
            UrlPanel {
                theme: &theme,
                input_enabled: controls.url_input,
                analyze_enabled: controls.analyze,
            },
            layout.url_panel,
        );
        if visible(layout.url_input) {
            style_text_area(
                &mut app_state.home.url_input,
                &theme,
                controls.url_input,
                !palette_open,
            );
            f.render_widget(&app_state.home.url_input, layout.url_input);
        }
    }

    // --- Preview ---
    if let (Some(preview), Some(id)) = (layout.preview, video_id.as_ref()) {
        if visible(preview) {
            f.render_widget(
                VideoPreview {
                    theme: &theme,
                    video_id: id,
                },
                preview,
            );
        }
    }

    if visible(layout.instructions) {
        f.render_widget(Instructions { theme: &theme }, layout.instructions);
    }

    // --- Footer ---
    if visible(layout.footer) {
        f.render_widget(
            Footer {
                state: &*app_state,
                theme: &theme,
            },
            layout.footer,
        );
    }

    // --- Command palette ---
    if palette_open {
        let palette = palette_layout(area);
        // Scrolling is clamped against the rows actually drawn, so a resize
        // can shrink the limit under the current offset.
        app_state.palette.result_viewport = answer_area(palette.results);
        if let CommandResult::Success(answer) = &app_state.palette.result {
            let max = max_answer_scroll(&answer.text, app_state.palette.result_viewport);
            app_state.palette.result_scroll = app_state.palette.result_scroll.min(max);
        }

        let can_ask = app_state.palette.can_submit(app_state.home.video.url());
        f.render_widget(
            CommandPaletteModal {
                theme: &theme,
                state: &app_state.palette,
                spinner: app_state.spinner(),
                can_ask,
            },
            area,
        );

        if visible(palette.input) {
            let loading = app_state.palette.is_loading();
            style_text_area(&mut app_state.palette.query, &theme, !loading, true);
            f.render_widget(&app_state.palette.query, palette.input);
        }
    }
}
