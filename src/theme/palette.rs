use ratatui::style::Color;

/// Design tokens a [`super::Theme`] is derived from.
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub overlay: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub primary: Color,
    pub primary_dark: Color,
    pub primary_light: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
}

/// Scale an `Rgb` color's channels by `factor` (0.0 = black, 1.0 = unchanged).
/// Non-Rgb `Color` variants are returned as-is.
pub fn dim_color(c: Color, factor: f32) -> Color {
    if let Color::Rgb(r, g, b) = c {
        Color::Rgb(
            (f32::from(r) * factor) as u8,
            (f32::from(g) * factor) as u8,
            (f32::from(b) * factor) as u8,
        )
    } else {
        c
    }
}
