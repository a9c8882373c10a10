use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod nord;
pub mod palette;
pub mod youtube;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,
    pub border_disabled: Style,

    pub header: Style,
    pub header_logo: Style,
    pub health_checking: Style,
    pub health_online: Style,
    pub health_offline: Style,

    pub button: Style,
    pub button_disabled: Style,
    pub keycap: Style,

    pub input: Style,
    pub input_disabled: Style,
    pub placeholder: Style,
    pub cursor: Style,

    pub title: Style,
    pub text: Style,
    pub text_secondary: Style,
    pub link: Style,
    pub dimmed: Style,
    pub error_text: Style,
    pub spinner: Style,

    pub suggestion: Style,
    pub suggestion_selected: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_error: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    #[value(name = "youtube")]
    YouTube,
    Nord,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::YouTube => "YouTube (Dark)",
            PaletteType::Nord => "Nord",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::YouTube => Self::from_palette(&youtube::YOUTUBE_DARK),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.overlay),
            border_focus: Style::default().fg(p.primary),
            border_disabled: Style::default().fg(p.overlay).add_modifier(Modifier::DIM),

            header: Style::default().bg(p.background).fg(p.text),
            header_logo: Style::default()
                .bg(p.primary)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            health_checking: Style::default().fg(p.yellow).add_modifier(Modifier::BOLD),
            health_online: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            health_offline: Style::default().fg(p.red).add_modifier(Modifier::BOLD),

            button: Style::default()
                .bg(p.primary_dark)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::default()
                .bg(dim_color(p.primary_dark, 0.4))
                .fg(p.text_secondary)
                .add_modifier(Modifier::DIM),
            keycap: Style::default().bg(p.surface).fg(p.primary_light),

            input: Style::default().bg(p.background).fg(p.text),
            input_disabled: Style::default()
                .bg(p.background)
                .fg(p.text_secondary)
                .add_modifier(Modifier::DIM),
            placeholder: Style::default().fg(p.text_secondary).add_modifier(Modifier::DIM),
            cursor: Style::default().add_modifier(Modifier::REVERSED),

            title: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            text: Style::default().fg(p.text),
            text_secondary: Style::default().fg(p.text_secondary),
            link: Style::default()
                .fg(p.primary_light)
                .add_modifier(Modifier::UNDERLINED),
            dimmed: Style::default().fg(p.text_secondary).add_modifier(Modifier::DIM),
            error_text: Style::default().fg(p.red),
            spinner: Style::default().fg(p.primary).add_modifier(Modifier::BOLD),

            suggestion: Style::default().bg(p.surface).fg(p.text),
            suggestion_selected: Style::default()
                .bg(p.primary_dark)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.background)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.primary_light)
                .fg(p.background)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.background)
                .add_modifier(Modifier::BOLD),

            footer_segment_key: Style::default()
                .bg(p.surface)
                .fg(p.primary_light)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.background).fg(p.text),
            footer: Style::default().bg(p.background).fg(p.text_secondary),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::YouTube)
    }
}
