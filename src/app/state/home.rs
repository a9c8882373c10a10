use super::input::AppTextArea;
use crate::domain::models::ApiHealth;
use crate::domain::video::VideoReference;

pub const URL_PLACEHOLDER: &str = "Paste YouTube URL here...";

/// Which home page controls currently accept input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub url_input: bool,
    pub analyze: bool,
    pub open_command: bool,
    pub cache: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeState<'a> {
    pub url_input: AppTextArea<'a>,
    pub video: VideoReference,
    pub api_health: ApiHealth,
}

impl HomeState<'_> {
    /// Re-derives the video reference from whatever is in the URL field.
    pub fn sync_video(&mut self) {
        self.video.set_url(self.url_input.value());
    }

    #[must_use]
    pub fn controls(&self) -> Controls {
        let online = self.api_health.is_online();
        let has_url = !self.video.is_blank();
        Controls {
            url_input: online,
            analyze: online && has_url,
            open_command: online,
            cache: online && has_url,
        }
    }
}

impl Default for HomeState<'_> {
    fn default() -> Self {
        let mut url_input = AppTextArea::default();
        url_input.set_placeholder_text(URL_PLACEHOLDER);
        Self {
            url_input,
            video: VideoReference::default(),
            api_health: ApiHealth::default(),
        }
    }
}
