use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub const VIDEO_ID_LEN: usize = 11;

// Greedy prefix means the last recognised marker in the URL wins.
static VIDEO_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*((youtu.be/)|(v/)|(/u/[A-Za-z0-9_]/)|(embed/)|(watch\?))\??v?=?([^#&?]*).*")
        .expect("video id pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Pulls the 11-character id out of any of the supported YouTube URL shapes:
    /// `watch?v=`, `youtu.be/`, `embed/`, `/v/` and `/u/<x>/`.
    #[must_use]
    pub fn extract(url: &str) -> Option<Self> {
        let captures = VIDEO_ID_PATTERN.captures(url)?;
        let id = captures.get(7)?.as_str();
        (id.chars().count() == VIDEO_ID_LEN).then(|| Self(id.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.0)
    }

    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The URL exactly as the user typed it, plus the id derived from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VideoReference {
    url: String,
    video_id: Option<VideoId>,
}

impl VideoReference {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let video_id = VideoId::extract(&url);
        Self { url, video_id }
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        *self = Self::new(url);
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn video_id(&self) -> Option<&VideoId> {
        self.video_id.as_ref()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.url.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn test_extracts_id_from_supported_shapes() {
        let urls = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://www.youtube.com/u/1/dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ&list=PL123&index=2",
            "https://youtu.be/dQw4w9WgXcQ?t=42",
            "https://www.youtube.com/embed/dQw4w9WgXcQ#start",
        ];
        for url in urls {
            let id = VideoId::extract(url);
            assert_eq!(id.as_ref().map(VideoId::as_str), Some(ID), "url: {url}");
        }
    }

    #[test]
    fn test_rejects_other_strings() {
        let inputs = [
            "",
            "not a url",
            "dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=short",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQx",
            "https://youtu.be/",
            "https://example.com/",
        ];
        for input in inputs {
            assert_eq!(VideoId::extract(input), None, "input: {input}");
        }
    }

    #[test]
    fn test_embed_url() {
        let id = VideoId::extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(id.embed_url(), "https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(id.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }

    #[test]
    fn test_reference_keeps_raw_url() {
        let mut video = VideoReference::new("  https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(video.url(), "  https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(video.video_id().map(VideoId::as_str), Some(ID));
        assert!(!video.is_blank());

        video.set_url("   ");
        assert!(video.is_blank());
        assert_eq!(video.video_id(), None);
    }
}
