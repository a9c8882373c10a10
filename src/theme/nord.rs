use super::palette::Palette;
use ratatui::style::Color;

pub const NORD: Palette = Palette {
    background: Color::Rgb(46, 52, 64),
    surface: Color::Rgb(59, 66, 82),
    overlay: Color::Rgb(76, 86, 106),
    text: Color::Rgb(236, 239, 244),
    text_secondary: Color::Rgb(216, 222, 233),
    primary: Color::Rgb(136, 192, 208),
    primary_dark: Color::Rgb(94, 129, 172),
    primary_light: Color::Rgb(143, 188, 187),
    green: Color::Rgb(163, 190, 140),
    yellow: Color::Rgb(235, 203, 139),
    red: Color::Rgb(191, 97, 106),
};
