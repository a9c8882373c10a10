use crate::domain::models::ApiHealth;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const LOGO: &str = " ▶ YOUCHAT ";
pub const COMMAND_BUTTON: &str = " ^K Open Command ";

/// Right-aligned hit box of the Open Command button on the header row.
pub fn command_button_rect(area: Rect) -> Rect {
    let width = (COMMAND_BUTTON.len() as u16).min(area.width);
    Rect::new(area.right() - width, area.y, width, area.height.min(1))
}

pub struct Header<'a> {
    pub health: ApiHealth,
    pub command_enabled: bool,
    pub spinner: &'a str,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let health_style = match self.health {
            ApiHealth::Checking => self.theme.health_checking,
            ApiHealth::Online => self.theme.health_online,
            ApiHealth::Offline => self.theme.health_offline,
        };
        let marker = match self.health {
            ApiHealth::Checking => self.spinner,
            ApiHealth::Online => "●",
            ApiHealth::Offline => "○",
        };

        let spans = vec![
            Span::styled(LOGO, self.theme.header_logo),
            Span::styled("  API Status: ", self.theme.header),
            Span::styled(format!("{marker} {}", self.health.label()), health_style),
        ];
        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);

        let button = command_button_rect(area);
        // Only draw the button when it does not cover the status text.
        if button.x as usize > LOGO.chars().count() + 30 {
            let style = if self.command_enabled {
                self.theme.button
            } else {
                self.theme.button_disabled
            };
            buf.set_stringn(
                button.x,
                button.y,
                COMMAND_BUTTON,
                button.width as usize,
                style,
            );
        }
    }
}
