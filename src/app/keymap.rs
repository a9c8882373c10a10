use super::action::Action;
use super::state::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Key bindings split by scope. The palette layer is only consulted while the
/// palette is open, so its bindings (Esc in particular) cannot outlive it.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
    pub home: HashMap<KeyEvent, Action>,
    pub palette: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut global = HashMap::new();
        let mut home = HashMap::new();
        let mut palette = HashMap::new();

        // --- Global ---
        global.insert(ctrl('k'), Action::TogglePalette);
        global.insert(super_key('k'), Action::TogglePalette);
        global.insert(ctrl('c'), Action::Quit);
        global.insert(ctrl('q'), Action::Quit);
        global.insert(ctrl('r'), Action::CheckHealth);

        // --- Home ---
        home.insert(key(KeyCode::Enter), Action::SubmitUrl);
        home.insert(ctrl('s'), Action::CacheVideo);

        // --- Command Palette ---
        palette.insert(key(KeyCode::Esc), Action::ClosePalette);
        palette.insert(key(KeyCode::Enter), Action::SubmitQuery);
        palette.insert(key(KeyCode::Tab), Action::NextSuggestion);
        palette.insert(key(KeyCode::BackTab), Action::PrevSuggestion);
        palette.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::PrevSuggestion,
        );
        palette.insert(key(KeyCode::PageUp), Action::ScrollResultUp(5));
        palette.insert(key(KeyCode::PageDown), Action::ScrollResultDown(5));

        Self {
            global,
            home,
            palette,
        }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        // Drop kind/state so lookups match whatever the terminal reports.
        let event = KeyEvent::new(event.code, event.modifiers);
        if let Some(action) = self.global.get(&event) {
            return Some(action.clone());
        }
        let scoped = match mode {
            AppMode::Home => &self.home,
            AppMode::CommandPalette => &self.palette,
        };
        scoped.get(&event).cloned()
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn super_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SUPER)
}
