// Test fixtures - reusable test data
// Provides consistent media libraries, schedules and settings across test files

#![allow(dead_code)]

use playlist_scheduler::models::media::{MediaItem, MediaType};
use playlist_scheduler::models::schedule::ScheduleRecord;
use playlist_scheduler::models::settings::SchedulerSettings;
use playlist_scheduler::models::task::TaskTranslation;
use playlist_scheduler::SchedulerSession;

/// Sample grid settings
pub mod settings {
    use super::*;

    /// Saturday-first week, 00:00 - 23:59 every 30 minutes
    pub fn default_week() -> SchedulerSettings {
        SchedulerSettings::default()
    }

    /// Office hours grid: 08:00 - 18:00 every 30 minutes
    pub fn office_hours() -> SchedulerSettings {
        let mut settings = SchedulerSettings::default();
        settings.grid.start = "08:00".to_string();
        settings.grid.end = "18:00".to_string();
        settings
    }

    /// Hourly grid covering the full day, as the playlist edit screen uses
    pub fn hourly_full_day() -> SchedulerSettings {
        let mut settings = SchedulerSettings::default();
        settings.grid.end = "24:00".to_string();
        settings.grid.interval_minutes = 60;
        settings
    }
}

/// Sample media libraries
pub mod media {
    use super::*;

    /// One short clip that falls back to the default duration
    pub fn short_clip() -> MediaItem {
        MediaItem::new("m1", MediaType::Mp4).with_duration(2.0)
    }

    pub fn library() -> Vec<MediaItem> {
        vec![
            short_clip(),
            MediaItem::new("m2", MediaType::Png).with_title("Opening hours"),
            MediaItem::new("m3", MediaType::Mp4)
                .with_title("Promo")
                .with_duration(90.0),
            MediaItem::new("m4", MediaType::Webp),
        ]
    }
}

/// Sample persisted schedules
pub mod schedules {
    use super::*;

    pub fn record(attachment: &str, day: u8, start: &str, end: &str) -> ScheduleRecord {
        ScheduleRecord {
            id: None,
            playlist: None,
            attachment: attachment.to_string(),
            day,
            start_time: start.to_string(),
            end_time: end.to_string(),
            translations: vec![
                TaskTranslation::new("fa", "تبلیغ", "ویژه"),
                TaskTranslation::new("en", "Promo", "Special"),
            ],
        }
    }

    /// What the backend returns for an existing playlist (seconds included),
    /// listed in media library order
    pub fn saved_week() -> Vec<ScheduleRecord> {
        vec![
            record("m2", 3, "17:30:00", "18:30:00"),
            record("m3", 0, "09:00:00", "10:30:00"),
        ]
    }
}

pub fn session(settings: &SchedulerSettings, schedule: &[ScheduleRecord]) -> SchedulerSession {
    SchedulerSession::from_settings(settings, &media::library(), schedule)
        .expect("fixture settings build a valid grid")
}
