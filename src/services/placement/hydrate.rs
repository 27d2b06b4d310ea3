use std::collections::HashSet;
use std::fmt;

use crate::models::grid::TimeGrid;
use crate::models::media::MediaItem;
use crate::models::schedule::ScheduleRecord;
use crate::models::settings::ContentSettings;
use crate::models::task::Task;
use crate::utils::time::ClockTime;

use super::PlacementStore;

/// Why a persisted entry was not applied to any task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No media item with the entry's attachment id
    UnknownAttachment,
    /// Day index outside the grid's seven days
    DayOutOfRange,
    /// Start time that is not one of the grid's slots
    OffGrid,
    /// End time that does not parse
    InvalidEndTime,
    /// An earlier entry already placed this attachment
    Duplicate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::UnknownAttachment => "unknown attachment",
            SkipReason::DayOutOfRange => "day index out of range",
            SkipReason::OffGrid => "start time is not on the grid",
            SkipReason::InvalidEndTime => "invalid end time",
            SkipReason::Duplicate => "attachment already scheduled",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub attachment: String,
    pub day: u8,
    pub start_time: String,
    pub reason: SkipReason,
}

impl PlacementStore {
    /// Build one task per media item and apply an existing schedule.
    ///
    /// The first entry referencing a media item places it at
    /// `(days[entry.day], entry.start_time)` with `end - start` as its
    /// duration and the entry's translations. Entries that cannot be applied
    /// are recorded in `skipped_entries()`.
    pub fn initialize(
        grid: TimeGrid,
        content: ContentSettings,
        media: &[MediaItem],
        schedule: &[ScheduleRecord],
    ) -> Self {
        let interval = grid.interval_minutes();
        let tasks: Vec<Task> = media
            .iter()
            .map(|item| Task::from_media(item, &content, interval))
            .collect();

        let mut store = PlacementStore::new(grid, content);
        for task in tasks {
            store.insert(task);
        }

        let mut applied = HashSet::new();
        for entry in schedule {
            match store.apply_entry(entry, &applied) {
                Ok(()) => {
                    applied.insert(entry.attachment.clone());
                }
                Err(reason) => {
                    log::warn!(
                        "Skipping schedule entry for {} (day {}, {}): {}",
                        entry.attachment,
                        entry.day,
                        entry.start_time,
                        reason
                    );
                    store.skipped.push(SkippedEntry {
                        attachment: entry.attachment.clone(),
                        day: entry.day,
                        start_time: entry.start_time.clone(),
                        reason,
                    });
                }
            }
        }

        log::info!(
            "Initialized scheduler with {} tasks ({} placed, {} entries skipped)",
            store.len(),
            store.scheduled_count(),
            store.skipped.len()
        );
        store.mark_clean();
        store
    }

    fn apply_entry(
        &mut self,
        entry: &ScheduleRecord,
        applied: &HashSet<String>,
    ) -> std::result::Result<(), SkipReason> {
        if !self.contains(&entry.attachment) {
            return Err(SkipReason::UnknownAttachment);
        }
        if applied.contains(&entry.attachment) {
            return Err(SkipReason::Duplicate);
        }

        let day = self
            .grid
            .day_label(usize::from(entry.day))
            .ok_or(SkipReason::DayOutOfRange)?
            .to_string();
        let cell = self
            .grid
            .cell(&day, &entry.start_time)
            .map_err(|_| SkipReason::OffGrid)?;
        let end = ClockTime::parse(&entry.end_time).map_err(|_| SkipReason::InvalidEndTime)?;
        let duration = cell.time().minutes_until(end);

        let interval = self.grid.interval_minutes();
        if duration < interval {
            log::warn!(
                "Schedule entry for {} lasts {} min, shorter than one {} min slot",
                entry.attachment,
                duration,
                interval
            );
        }

        let task = self
            .tasks
            .get_mut(&entry.attachment)
            .ok_or(SkipReason::UnknownAttachment)?;
        task.set_placement(Some(cell));
        task.duration = duration;
        task.translations = entry.translations.clone();
        self.touch();
        Ok(())
    }
}
