use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

/// Single-line text field. Wraps `TextArea` so state can stay `Clone + PartialEq`.
#[derive(Default)]
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl AppTextArea<'_> {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut area = TextArea::new(vec![flatten(text)]);
        area.move_cursor(CursorMove::End);
        Self(area)
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.0.lines().concat()
    }

    pub fn set_text(&mut self, text: &str) {
        let placeholder = self.0.placeholder_text().to_string();
        *self = Self::from_text(text);
        if !placeholder.is_empty() {
            self.0.set_placeholder_text(placeholder);
        }
    }

    /// Feeds a key to the field, refusing anything that would open a second line.
    /// Returns whether the text changed.
    pub fn input_single_line(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => false,
            KeyCode::Char('m' | 'j') if ctrl => false,
            _ => self.0.input(key),
        }
    }

    /// Inserts pasted text at the cursor with line breaks folded to spaces.
    pub fn paste(&mut self, text: &str) -> bool {
        let text = flatten(text);
        if text.is_empty() {
            return false;
        }
        self.0.insert_str(text)
    }
}

fn flatten(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        area.set_placeholder_text(self.0.placeholder_text());
        Self(area)
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_value() {
        let mut area = AppTextArea::default();
        for c in "abc".chars() {
            assert!(area.input_single_line(key(KeyCode::Char(c))));
        }
        assert!(area.input_single_line(key(KeyCode::Backspace)));
        assert_eq!(area.value(), "ab");
    }

    #[test]
    fn test_newlines_are_refused() {
        let mut area = AppTextArea::from_text("hello");
        assert!(!area.input_single_line(key(KeyCode::Enter)));
        assert!(!area.input_single_line(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
        assert_eq!(area.lines().len(), 1);
        assert_eq!(area.value(), "hello");
    }

    #[test]
    fn test_paste_flattens_lines() {
        let mut area = AppTextArea::default();
        assert!(area.paste("https://youtu.be/\r\nabc\n"));
        assert_eq!(area.value(), "https://youtu.be/ abc ");
        assert_eq!(area.lines().len(), 1);
        assert!(!area.paste(""));
    }

    #[test]
    fn test_set_text_keeps_placeholder_and_moves_cursor_to_end() {
        let mut area = AppTextArea::default();
        area.set_placeholder_text("Ask anything");
        area.set_text("Summarize this video");
        assert_eq!(area.value(), "Summarize this video");
        assert_eq!(area.cursor(), (0, "Summarize this video".len()));
        assert_eq!(area.placeholder_text(), "Ask anything");
    }
}
