use super::palette::Palette;
use ratatui::style::Color;

pub const YOUTUBE_DARK: Palette = Palette {
    background: Color::Rgb(15, 15, 15),
    surface: Color::Rgb(31, 31, 31),
    overlay: Color::Rgb(64, 64, 64),
    text: Color::Rgb(255, 255, 255),
    text_secondary: Color::Rgb(170, 170, 170),
    primary: Color::Rgb(255, 0, 0),
    primary_dark: Color::Rgb(204, 0, 0),
    primary_light: Color::Rgb(255, 51, 51),
    green: Color::Rgb(34, 197, 94),
    yellow: Color::Rgb(234, 179, 8),
    red: Color::Rgb(248, 113, 113),
};
