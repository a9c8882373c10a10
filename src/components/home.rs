use crate::domain::video::VideoId;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

pub const ANALYZE_BUTTON: &str = " Analyze ";
pub const URL_PANEL_HEIGHT: u16 = 5;
pub const PREVIEW_HEIGHT: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlPanelLayout {
    pub input: Rect,
    pub analyze_button: Rect,
}

/// Splits the URL panel into the text field and the Analyze button beside it.
pub fn url_panel_layout(panel: Rect) -> UrlPanelLayout {
    let inner = Rect {
        x: panel.x.saturating_add(2),
        y: panel.y.saturating_add(2),
        width: panel.width.saturating_sub(4),
        height: panel.height.saturating_sub(3).min(1),
    };
    let button_width = (ANALYZE_BUTTON.len() as u16).min(inner.width);
    let analyze_button = Rect::new(
        inner.right() - button_width,
        inner.y,
        button_width,
        inner.height,
    );
    let input = Rect {
        width: inner.width.saturating_sub(button_width + 1),
        ..inner
    };
    UrlPanelLayout {
        input,
        analyze_button,
    }
}

/// Frame around the URL field. The field itself is a text area drawn on top.
pub struct UrlPanel<'a> {
    pub theme: &'a Theme,
    pub input_enabled: bool,
    pub analyze_enabled: bool,
}

impl Widget for UrlPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.input_enabled {
            self.theme.border_focus
        } else {
            self.theme.border_disabled
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("Analyze a YouTube Video", self.theme.title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        block.render(area, buf);

        let layout = url_panel_layout(area);
        if layout.input.height == 0 {
            return;
        }

        // Underline the field so it reads as an input even when empty.
        let field_style = if self.input_enabled {
            self.theme.input
        } else {
            self.theme.input_disabled
        };
        buf.set_style(layout.input, field_style);
        if layout.input.bottom() < area.bottom().saturating_sub(1) {
            let rule = "▔".repeat(layout.input.width as usize);
            buf.set_string(layout.input.x, layout.input.bottom(), rule, self.theme.border);
        }

        let button_style = if self.analyze_enabled {
            self.theme.button
        } else {
            self.theme.button_disabled
        };
        buf.set_stringn(
            layout.analyze_button.x,
            layout.analyze_button.y,
            ANALYZE_BUTTON,
            layout.analyze_button.width as usize,
            button_style,
        );
    }
}

pub struct VideoPreview<'a> {
    pub theme: &'a Theme,
    pub video_id: &'a VideoId,
}

impl Widget for VideoPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("Video Preview", self.theme.title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        let lines = vec![
            Line::from(vec![
                Span::styled("  ▶  ", self.theme.header_logo),
                Span::raw("  "),
                Span::styled(self.video_id.as_str(), self.theme.title),
            ]),
            Line::from(vec![
                Span::styled("Embed  ", self.theme.text_secondary),
                Span::styled(self.video_id.embed_url(), self.theme.link),
            ]),
            Line::from(vec![
                Span::styled("Watch  ", self.theme.text_secondary),
                Span::styled(self.video_id.watch_url(), self.theme.link),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

const INSTRUCTIONS: [&str; 4] = [
    "Paste a YouTube video URL in the input field above.",
    "Press Enter or the \"Analyze\" button, or use Ctrl+K / ⌘+K.",
    "Ask questions about the video content, request summaries, or timestamps for key moments.",
    "Get AI-powered insights instantly!",
];

pub struct Instructions<'a> {
    pub theme: &'a Theme,
}

impl Widget for Instructions<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("How to use YouChat", self.theme.title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        let mut lines = vec![Line::from("")];
        for (i, step) in INSTRUCTIONS.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!(" {}. ", i + 1), self.theme.keycap),
                Span::raw(" "),
                Span::styled(*step, self.theme.text_secondary),
            ]));
        }

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_url_panel_layout_puts_button_right_of_input() {
        let layout = url_panel_layout(Rect::new(0, 0, 80, URL_PANEL_HEIGHT));
        assert_eq!(layout.input.y, 2);
        assert_eq!(layout.analyze_button.y, 2);
        assert_eq!(layout.analyze_button.right(), 78);
        assert!(layout.input.right() < layout.analyze_button.x);
    }

    #[test]
    fn test_url_panel_layout_degenerate() {
        let layout = url_panel_layout(Rect::new(0, 0, 3, 2));
        assert_eq!(layout.input.width, 0);
        assert_eq!(layout.analyze_button.height, 0);
    }

    #[test]
    fn test_preview_shows_embed_url() {
        let theme = Theme::default();
        let id = VideoId::extract("https://youtu.be/dQw4w9WgXcQ").unwrap();
        let area = Rect::new(0, 0, 80, PREVIEW_HEIGHT);
        let mut buf = Buffer::empty(area);
        VideoPreview {
            theme: &theme,
            video_id: &id,
        }
        .render(area, &mut buf);
        assert!(buffer_text(&buf).contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_instructions_render() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 120, 8);
        let mut buf = Buffer::empty(area);
        Instructions { theme: &theme }.render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("How to use YouChat"));
        assert!(text.contains("Get AI-powered insights instantly!"));
    }
}
