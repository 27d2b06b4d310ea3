// Task module
// One schedulable media reference with an optional grid placement

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;

use crate::models::grid::GridCell;
use crate::models::media::{MediaItem, MediaType};
use crate::models::settings::ContentSettings;

/// Per-language title and description captured by the translation dialog
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct TaskTranslation {
    pub language_code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl TaskTranslation {
    pub fn new(
        language_code: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            language_code: language_code.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn empty(language_code: impl Into<String>) -> Self {
        Self::new(language_code, "", "")
    }
}

/// One blank entry per language, in the given order.
pub fn default_translations(languages: &[String]) -> Vec<TaskTranslation> {
    languages.iter().map(TaskTranslation::empty).collect()
}

/// One entry per language, all carrying the same title.
pub fn titled_translations(languages: &[String], title: &str) -> Vec<TaskTranslation> {
    languages
        .iter()
        .map(|lang| TaskTranslation::new(lang.clone(), title, ""))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Equal to the source media item's id
    pub id: String,
    /// Display title
    pub content: String,
    placement: Option<GridCell>,
    /// Minutes; determines the column span
    pub duration: u32,
    pub media_type: MediaType,
    pub media_url: Option<String>,
    pub thumbnail: Option<String>,
    /// Empty until the task is first placed
    pub translations: Vec<TaskTranslation>,
}

impl Task {
    /// Build an unplaced task for a media item.
    ///
    /// The duration is the media's own length rounded up to whole minutes.
    /// Missing lengths, and lengths shorter than one slot, fall back to the
    /// configured default.
    pub fn from_media(item: &MediaItem, content: &ContentSettings, interval_minutes: u32) -> Self {
        let duration = item
            .duration_minutes()
            .filter(|minutes| *minutes >= interval_minutes)
            .unwrap_or(content.default_duration_minutes)
            .max(interval_minutes);

        Self {
            id: item.id.clone(),
            content: item
                .display_title()
                .map(str::to_string)
                .unwrap_or_else(|| content.default_title.clone()),
            placement: None,
            duration,
            media_type: item.media_type,
            media_url: item.file.clone(),
            thumbnail: item.thumbnail.clone(),
            translations: Vec::new(),
        }
    }

    pub fn placement(&self) -> Option<&GridCell> {
        self.placement.as_ref()
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Day label, or `""` when unplaced
    pub fn day(&self) -> &str {
        self.placement.as_ref().map(GridCell::day).unwrap_or("")
    }

    /// Start slot as `HH:mm`, or `""` when unplaced
    pub fn time(&self) -> String {
        self.placement
            .as_ref()
            .map(|cell| cell.time().to_string())
            .unwrap_or_default()
    }

    pub(crate) fn set_placement(&mut self, placement: Option<GridCell>) {
        self.placement = placement;
    }

    pub fn translation(&self, language_code: &str) -> Option<&TaskTranslation> {
        self.translations
            .iter()
            .find(|t| t.language_code == language_code)
    }

    /// Non-blank title in the given language
    pub fn title_in(&self, language_code: &str) -> Option<&str> {
        self.translation(language_code)
            .map(|t| t.title.as_str())
            .filter(|title| !title.trim().is_empty())
    }
}

impl Serialize for Task {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Task", 9)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("content", &self.content)?;
        state.serialize_field("day", self.day())?;
        state.serialize_field("time", &self.time())?;
        state.serialize_field("duration", &self.duration)?;
        state.serialize_field("mediaType", &self.media_type)?;
        state.serialize_field("mediaUrl", &self.media_url)?;
        state.serialize_field("thumbnail", &self.thumbnail)?;
        state.serialize_field("translations", &self.translations)?;
        state.end()
    }
}
