// Media module
// Attachments from the media library, as handed to the scheduler

use serde::{Deserialize, Serialize};

/// File type of a media attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Png,
    Jpeg,
    Jpg,
    Webp,
    Mp4,
    #[serde(other)]
    Other,
}

impl MediaType {
    pub fn is_video(&self) -> bool {
        matches!(self, MediaType::Mp4)
    }

    pub fn is_image(&self) -> bool {
        matches!(
            self,
            MediaType::Png | MediaType::Jpeg | MediaType::Jpg | MediaType::Webp
        )
    }
}

/// A schedulable media item. `duration` is in minutes and may be fractional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl MediaItem {
    pub fn new(id: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            id: id.into(),
            title: None,
            media_type,
            file: None,
            thumbnail: None,
            duration: None,
            created_at: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_duration(mut self, minutes: f64) -> Self {
        self.duration = Some(minutes);
        self
    }

    /// Title if present and not blank
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Duration rounded up to whole minutes, if the item reports a positive one
    pub fn duration_minutes(&self) -> Option<u32> {
        self.duration
            .filter(|d| d.is_finite() && *d > 0.0)
            .map(|d| d.ceil() as u32)
    }
}
