use super::keymap::KeyMap;
use crate::theme::{PaletteType, Theme};
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub mod home;
pub mod input;
pub mod palette;

// Re-exports
pub use home::{Controls, HomeState};
pub use input::AppTextArea;
pub use palette::{CommandPaletteState, CommandResult, ANALYZE_FAILED_MESSAGE};

pub const STATUS_TTL: Duration = Duration::from_secs(6);

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Home,           // URL input and preview
    CommandPalette, // Modal question/answer overlay
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusSeverity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: StatusSeverity,
    pub timestamp: DateTime<Local>,
    pub shown_at: Instant,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, severity: StatusSeverity) -> Self {
        Self {
            text: text.into(),
            severity,
            timestamp: Local::now(),
            shown_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= STATUS_TTL
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    pub should_quit: bool,
    pub mode: AppMode,
    pub api_url: String,

    // --- Components ---
    pub home: HomeState<'a>,
    pub palette: CommandPaletteState<'a>,

    // --- Feedback ---
    pub status: Option<StatusMessage>,
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: PaletteType,
    pub theme: Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(api_url: impl Into<String>, palette_type: PaletteType) -> Self {
        Self {
            api_url: api_url.into(),
            palette_type,
            theme: Theme::from_palette_type(palette_type),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn is_palette_open(&self) -> bool {
        self.mode == AppMode::CommandPalette
    }

    #[must_use]
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[(self.frame_count % SPINNER_FRAMES.len() as u64) as usize]
    }

    pub fn set_status(&mut self, text: impl Into<String>, severity: StatusSeverity) {
        self.status = Some(StatusMessage::new(text, severity));
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Home,
            api_url: crate::config::DEFAULT_API_URL.to_string(),
            home: HomeState::default(),
            palette: CommandPaletteState::default(),
            status: None,
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
            palette_type: PaletteType::default(),
            theme: Theme::default(),
        }
    }
}
