// Settings module
// Grid shape and content defaults for a scheduling session

use serde::{Deserialize, Serialize};

pub const DEFAULT_INTERVAL_MINUTES: u32 = 30;
pub const DEFAULT_COLUMN_WIDTH: u32 = 120;
pub const DEFAULT_TASK_DURATION_MINUTES: u32 = 60;
pub const DEFAULT_TASK_TITLE: &str = "پخش رسانه";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SchedulerSettings {
    pub grid: GridSettings,
    pub content: ContentSettings,
}

/// Shape of the weekly grid. `column_width` is purely presentational and is
/// only carried through for hosts that lay the grid out in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub start: String,
    pub end: String,
    pub interval_minutes: u32,
    pub column_width: u32,
    /// Weekday the grid starts on (`"Saturday"`, `"Mon"`, ...)
    pub week_start: String,
    /// Optional localized labels, one per day starting at `week_start`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_labels: Option<Vec<String>>,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            start: "00:00".to_string(),
            end: "23:59".to_string(),
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            column_width: DEFAULT_COLUMN_WIDTH,
            week_start: "Saturday".to_string(),
            day_labels: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    /// Languages captured by the translation dialog, in tab order
    pub languages: Vec<String>,
    /// Language whose title mirrors into the task's display content
    pub primary_language: String,
    /// Display title for media items without one
    pub default_title: String,
    pub default_duration_minutes: u32,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            languages: vec!["fa".to_string(), "en".to_string()],
            primary_language: "fa".to_string(),
            default_title: DEFAULT_TASK_TITLE.to_string(),
            default_duration_minutes: DEFAULT_TASK_DURATION_MINUTES,
        }
    }
}
