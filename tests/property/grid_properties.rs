// Property tests for the time axis and span arithmetic

use playlist_scheduler::models::grid::{generate_time_slots, week_days, TimeGrid, TimeRange};
use playlist_scheduler::utils::time::ClockTime;
use proptest::prelude::*;

fn grid(start: u32, end: u32, interval: u32) -> TimeGrid {
    let range = TimeRange::new(
        ClockTime::from_minutes(start).unwrap(),
        ClockTime::from_minutes(end).unwrap(),
    )
    .unwrap();
    TimeGrid::new(range, interval, week_days(chrono::Weekday::Sat)).unwrap()
}

proptest! {
    /// Property: slots start at `start`, step by `interval` and never pass `end`
    #[test]
    fn prop_slots_are_evenly_spaced(
        start in 0u32..1440,
        length in 0u32..1440,
        interval in 1u32..=240,
    ) {
        let end = (start + length).min(ClockTime::END_OF_DAY.minutes());
        let range = TimeRange::new(
            ClockTime::from_minutes(start).unwrap(),
            ClockTime::from_minutes(end).unwrap(),
        ).unwrap();
        let slots = generate_time_slots(range, interval).unwrap();

        prop_assert_eq!(slots[0].minutes(), start);
        prop_assert!(slots.iter().all(|s| s.minutes() <= end));
        for pair in slots.windows(2) {
            prop_assert_eq!(pair[1].minutes() - pair[0].minutes(), interval);
        }
        prop_assert_eq!(slots.len() as u32, (end - start) / interval + 1);
    }

    /// Property: a span covers the duration with whole slots and never more
    /// than one extra slot
    #[test]
    fn prop_span_is_ceiling_of_duration(
        duration in 1u32..3000,
        interval in 1u32..=120,
    ) {
        let grid = grid(0, 60, interval);
        let span = grid.column_span(duration) as u32;
        prop_assert!(span >= 1);
        prop_assert!(span * interval >= duration);
        prop_assert!((span - 1) * interval < duration);
    }

    /// Property: every generated slot is a valid drop target on every day
    #[test]
    fn prop_every_slot_accepts_placement(
        start in 0u32..720,
        interval in prop::sample::select(vec![5u32, 10, 15, 20, 30, 60]),
        day in 0usize..7,
    ) {
        let grid = grid(start, start + 240, interval);
        let label = grid.day_label(day).unwrap().to_string();
        for slot in grid.slot_labels() {
            let cell = grid.cell(&label, &slot).unwrap();
            prop_assert_eq!(cell.day_index(), day);
            prop_assert_eq!(cell.time().to_string(), slot);
        }
    }
}
