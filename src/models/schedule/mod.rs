// Schedule module
// Flat persisted records exchanged with the playlist backend

use serde::{Deserialize, Serialize};

use crate::models::task::TaskTranslation;
use crate::utils::time::same_time;

/// One placed media item in a playlist's week.
///
/// `day` indexes the grid's day axis (0 = first day of the week). Times are
/// `HH:mm` when produced here; the backend may return `HH:mm:ss`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist: Option<String>,
    pub attachment: String,
    pub day: u8,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub translations: Vec<TaskTranslation>,
}

impl ScheduleRecord {
    /// Same placement and content, ignoring backend ids and the
    /// `HH:mm` / `HH:mm:ss` spelling of times.
    pub fn is_equivalent(&self, other: &ScheduleRecord) -> bool {
        self.attachment == other.attachment
            && self.day == other.day
            && same_time(&self.start_time, &other.start_time)
            && same_time(&self.end_time, &other.end_time)
            && self.translations == other.translations
    }
}

/// Element-wise `is_equivalent` over two record lists.
pub fn records_equivalent(a: &[ScheduleRecord], b: &[ScheduleRecord]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.is_equivalent(y))
}

/// A stored playlist as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub is_active: bool,
    #[serde(default)]
    pub schedules: Vec<ScheduleRecord>,
}

/// Body submitted when creating or updating a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistPayload {
    pub title: String,
    pub is_active: bool,
    pub schedules: Vec<ScheduleRecord>,
}
