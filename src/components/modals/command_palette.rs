use crate::app::state::{CommandPaletteState, CommandResult};
use crate::app::suggestions::SUGGESTIONS;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_columns, dim_area, draw_drop_shadow};

pub const PROMPT: &str = " > ";
pub const ASK_BUTTON_WIDTH: u16 = 15;
pub const CLOSE_BUTTON: &str = "[x]";
const EMPTY_HINT: &str = "Ask me to summarize the video, find key points, or answer specific questions about the content.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub modal: Rect,
    pub input: Rect,
    pub ask_button: Rect,
    pub close_button: Rect,
    pub results: Rect,
}

/// Geometry of the palette, shared by rendering and mouse hit-testing.
pub fn palette_layout(area: Rect) -> PaletteLayout {
    let top = area.y + area.height / 5;
    let height = (area.height * 7 / 10)
        .max(8)
        .min(area.bottom().saturating_sub(top));
    let modal = centered_columns(70, Rect::new(area.x, top, area.width, height));

    let inner = Rect {
        x: modal.x.saturating_add(1),
        y: modal.y.saturating_add(1),
        width: modal.width.saturating_sub(2),
        height: modal.height.saturating_sub(2),
    };
    let row_height = inner.height.min(1);

    let close_width = (CLOSE_BUTTON.len() as u16).min(inner.width);
    let close_button = Rect::new(inner.right() - close_width, inner.y, close_width, row_height);
    let ask_width = ASK_BUTTON_WIDTH.min(inner.width.saturating_sub(close_width + 1));
    let ask_button = Rect::new(
        close_button.x.saturating_sub(ask_width + 1).max(inner.x),
        inner.y,
        ask_width,
        row_height,
    );
    let input_x = (inner.x + PROMPT.len() as u16).min(ask_button.x);
    let input = Rect::new(
        input_x,
        inner.y,
        ask_button.x.saturating_sub(input_x + 1),
        row_height,
    );
    let results = Rect {
        x: inner.x,
        y: inner.y.saturating_add(2).min(inner.bottom()),
        width: inner.width,
        height: inner.height.saturating_sub(2),
    };

    PaletteLayout {
        modal,
        input,
        ask_button,
        close_button,
        results,
    }
}

/// Region of the results area that holds the answer text. The last row is
/// kept for the timestamp line when there is room for it.
pub fn answer_area(results: Rect) -> Rect {
    let footer_height = u16::from(results.height > 2);
    Rect {
        height: results.height - footer_height,
        ..pad(results)
    }
}

fn answer_paragraph(text: &str) -> Paragraph<'_> {
    Paragraph::new(text).wrap(Wrap { trim: false })
}

/// Furthest the answer can scroll while still filling `viewport`, counted in
/// wrapped rows.
pub fn max_answer_scroll(text: &str, viewport: Rect) -> u16 {
    let rows = answer_paragraph(text).line_count(viewport.width);
    u16::try_from(rows.saturating_sub(viewport.height as usize)).unwrap_or(u16::MAX)
}

/// Clickable suggestion chips inside the results area, one per row.
pub fn suggestion_rects(results: Rect) -> Vec<(usize, Rect)> {
    SUGGESTIONS
        .iter()
        .enumerate()
        .filter_map(|(i, label)| {
            let y = results.y + 4 + 2 * i as u16;
            if y >= results.bottom() {
                return None;
            }
            let width = (label.chars().count() as u16 + 4).min(results.width);
            let x = results.x + results.width.saturating_sub(width) / 2;
            Some((i, Rect::new(x, y, width, 1)))
        })
        .collect()
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a CommandPaletteState<'a>,
    pub spinner: &'a str,
    pub can_ask: bool,
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = palette_layout(area);
        let modal_area = layout.modal;
        if modal_area.width < 3 || modal_area.height < 3 {
            return;
        }

        dim_area(buf, area);
        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" ASK YOUCHAT ", self.theme.header_logo),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.height == 0 {
            return;
        }

        // Input row chrome; the text field itself is drawn by the caller.
        buf.set_string(inner.x, inner.y, PROMPT, self.theme.footer_segment_key);

        let (ask_label, ask_style) = if self.state.is_loading() {
            ("Processing...", self.theme.button_disabled)
        } else if self.can_ask {
            ("Ask", self.theme.button)
        } else {
            ("Ask", self.theme.button_disabled)
        };
        Paragraph::new(Span::styled(ask_label, ask_style))
            .style(ask_style)
            .alignment(Alignment::Center)
            .render(layout.ask_button, buf);
        buf.set_string(
            layout.close_button.x,
            layout.close_button.y,
            CLOSE_BUTTON,
            self.theme.text_secondary,
        );

        if inner.height > 1 {
            let separator = "─".repeat(inner.width as usize);
            buf.set_string(inner.x, inner.y + 1, separator, self.theme.border);
        }

        let results = layout.results;
        if results.width == 0 || results.height == 0 {
            return;
        }

        match &self.state.result {
            CommandResult::Loading => {
                let lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(self.spinner, self.theme.spinner)),
                    Line::from(""),
                    Line::from(Span::styled("Analyzing video...", self.theme.text_secondary)),
                ];
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .render(results, buf);
            }
            CommandResult::Error(message) => {
                Paragraph::new(Line::from(Span::styled(message.as_str(), self.theme.error_text)))
                    .wrap(Wrap { trim: false })
                    .render(pad(results), buf);
            }
            CommandResult::Success(answer) => {
                let text_area = answer_area(results);
                answer_paragraph(&answer.text)
                    .style(self.theme.text)
                    .scroll((self.state.result_scroll, 0))
                    .render(text_area, buf);

                if text_area.height < results.height {
                    let mut info = format!("Answered at {}", answer.received_at.format("%H:%M:%S"));
                    if let Some(metadata) = &answer.metadata {
                        info.push_str(" · ");
                        info.push_str(metadata);
                    }
                    let line = Line::from(Span::styled(info, self.theme.dimmed));
                    buf.set_line(results.x + 1, results.bottom() - 1, &line, results.width.saturating_sub(2));
                }
            }
            CommandResult::Idle => {
                let hint_area = Rect {
                    y: results.y + 1,
                    height: 2.min(results.height.saturating_sub(1)),
                    ..pad(results)
                };
                Paragraph::new(Span::styled(EMPTY_HINT, self.theme.text_secondary))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .render(hint_area, buf);

                for (i, rect) in suggestion_rects(results) {
                    let style = if self.state.selected_suggestion == Some(i) {
                        self.theme.suggestion_selected
                    } else {
                        self.theme.suggestion
                    };
                    Paragraph::new(Span::styled(SUGGESTIONS[i], style))
                        .style(style)
                        .alignment(Alignment::Center)
                        .render(rect, buf);
                }

                let tip = Line::from(vec![
                    Span::styled("Tab", self.theme.footer_segment_key),
                    Span::styled(" cycles suggestions", self.theme.dimmed.add_modifier(Modifier::ITALIC)),
                ]);
                if results.height > 1 {
                    let width = tip.width() as u16;
                    let x = results.x + results.width.saturating_sub(width) / 2;
                    buf.set_line(x, results.bottom() - 1, &tip, results.width);
                }
            }
        }
    }
}

fn pad(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        ..area
    }
}
