//! Projection between in-memory placements and persisted schedule records.
//!
//! Outbound, every placed task becomes one `ScheduleRecord`; unplaced tasks
//! are left out. Inbound hydration lives in `PlacementStore::initialize`.

use crate::models::schedule::ScheduleRecord;
use crate::models::settings::ContentSettings;
use crate::models::task::{titled_translations, Task};
use crate::services::placement::PlacementStore;
use crate::utils::time::ClockTime;

/// End of a placement, wrapping past midnight like a wall clock.
pub fn end_time(start: ClockTime, duration_minutes: u32) -> ClockTime {
    start.add_minutes_wrapping(i64::from(duration_minutes))
}

/// Record for a single task, `None` when it is unplaced.
///
/// A placed task that never went through the translation dialog is saved
/// with its display content as the title in every language.
pub fn task_record(task: &Task, content: &ContentSettings) -> Option<ScheduleRecord> {
    let cell = task.placement()?;
    let translations = if task.translations.is_empty() {
        titled_translations(&content.languages, &task.content)
    } else {
        task.translations.clone()
    };

    Some(ScheduleRecord {
        id: None,
        playlist: None,
        attachment: task.id.clone(),
        day: cell.day_index() as u8,
        start_time: cell.time().to_string(),
        end_time: end_time(cell.time(), task.duration).to_string(),
        translations,
    })
}

/// Persisted records for every placed task, in task order.
pub fn to_persisted(store: &PlacementStore) -> Vec<ScheduleRecord> {
    let content = store.content_settings();
    let records: Vec<ScheduleRecord> = store
        .tasks()
        .filter_map(|task| task_record(task, content))
        .collect();
    log::debug!("Projected {} schedule records", records.len());
    records
}
