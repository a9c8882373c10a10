/// Canned prompts offered while the palette has nothing else to show.
pub const SUGGESTIONS: [&str; 3] = [
    "Summarize this video",
    "What are the key points?",
    "Find timestamps for important moments",
];

#[must_use]
pub fn get(index: usize) -> Option<&'static str> {
    SUGGESTIONS.get(index).copied()
}

#[must_use]
pub fn next_index(current: Option<usize>) -> usize {
    match current {
        Some(i) => (i + 1) % SUGGESTIONS.len(),
        None => 0,
    }
}

#[must_use]
pub fn prev_index(current: Option<usize>) -> usize {
    match current {
        Some(0) | None => SUGGESTIONS.len() - 1,
        Some(i) => i - 1,
    }
}
