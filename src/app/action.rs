use crate::app::command::Command;
use crate::domain::models::{Answer, ApiHealth, SubmissionId};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Text Entry ---
    TextAreaInput(crossterm::event::KeyEvent), // Routed to the focused field
    Paste(String),                             // Bracketed paste

    // --- Home Page ---
    CheckHealth, // Re-probe `GET /health`
    SubmitUrl,   // Enter / Analyze button
    CacheVideo,  // `POST /cache` for the current URL

    // --- Command Palette ---
    TogglePalette,             // Ctrl+K / Cmd+K
    OpenPalette,               // Open Command button
    ClosePalette,              // Esc / close button
    SubmitQuery,               // Enter / Ask button
    ApplySuggestion(usize),    // Overwrite the query with a canned prompt
    NextSuggestion,            // Tab
    PrevSuggestion,            // Shift+Tab
    ScrollResultUp(u16),       // PageUp / wheel
    ScrollResultDown(u16),     // PageDown / wheel

    // --- Async Results ---
    HealthChecked(ApiHealth),
    AnalyzeCompleted(SubmissionId, Result<Answer, String>),
    VideoCached(Result<String, String>),
}
