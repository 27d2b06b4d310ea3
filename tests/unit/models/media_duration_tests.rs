// Unit tests for deriving task durations from media lengths

use playlist_scheduler::models::media::{MediaItem, MediaType};
use playlist_scheduler::models::settings::ContentSettings;
use playlist_scheduler::models::task::Task;
use test_case::test_case;

#[test_case(None, 30, 60 ; "missing length uses default")]
#[test_case(Some(2.0), 30, 60 ; "shorter than a slot uses default")]
#[test_case(Some(45.0), 30, 45 ; "whole minutes kept")]
#[test_case(Some(45.2), 30, 46 ; "fraction rounds up")]
#[test_case(Some(0.0), 30, 60 ; "zero length uses default")]
#[test_case(Some(-5.0), 30, 60 ; "negative length uses default")]
#[test_case(None, 90, 90 ; "default raised to one slot")]
fn test_task_duration(length: Option<f64>, interval: u32, expected: u32) {
    let mut item = MediaItem::new("m", MediaType::Mp4);
    item.duration = length;
    let task = Task::from_media(&item, &ContentSettings::default(), interval);
    assert_eq!(task.duration, expected);
}

#[test_case(Some("Poster"), "Poster" ; "own title")]
#[test_case(Some("   "), "پخش رسانه" ; "blank title")]
#[test_case(None, "پخش رسانه" ; "no title")]
fn test_task_content(title: Option<&str>, expected: &str) {
    let mut item = MediaItem::new("m", MediaType::Png);
    item.title = title.map(str::to_string);
    let task = Task::from_media(&item, &ContentSettings::default(), 30);
    assert_eq!(task.content, expected);
    assert!(!task.is_placed());
    assert!(task.translations.is_empty());
}
