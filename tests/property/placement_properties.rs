// Property tests for placement consistency
// Random gesture sequences must leave every task fully placed or fully unplaced

use playlist_scheduler::models::media::{MediaItem, MediaType};
use playlist_scheduler::models::settings::SchedulerSettings;
use playlist_scheduler::scheduler::resize::ResizeHandle;
use playlist_scheduler::SchedulerSession;
use proptest::prelude::*;

const TASKS: [&str; 4] = ["a", "b", "c", "d"];
const ZONES: [&str; 6] = [
    "task-list",
    "Saturday-08:00",
    "Monday-09:30",
    "Friday-17:30",
    "Friday-18:30",
    "Funday-08:00",
];

#[derive(Debug, Clone)]
enum Gesture {
    Drag { task: usize, from: usize, to: Option<usize> },
    Resize { task: usize, grow: bool },
    Unplace { task: usize },
    Submit,
    Cancel,
}

fn gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        (0..TASKS.len(), 0..ZONES.len(), prop::option::of(0..ZONES.len()))
            .prop_map(|(task, from, to)| Gesture::Drag { task, from, to }),
        (0..TASKS.len(), any::<bool>()).prop_map(|(task, grow)| Gesture::Resize { task, grow }),
        (0..TASKS.len()).prop_map(|task| Gesture::Unplace { task }),
        Just(Gesture::Submit),
        Just(Gesture::Cancel),
    ]
}

fn session() -> SchedulerSession {
    let mut settings = SchedulerSettings::default();
    settings.grid.start = "08:00".to_string();
    settings.grid.end = "18:00".to_string();
    let media: Vec<MediaItem> = TASKS
        .iter()
        .map(|id| MediaItem::new(*id, MediaType::Mp4))
        .collect();
    SchedulerSession::from_settings(&settings, &media, &[]).unwrap()
}

/// Errors are expected for gestures that make no sense in the current state;
/// they must simply leave the session consistent.
fn apply(session: &mut SchedulerSession, gesture: &Gesture) {
    let _ = match gesture {
        Gesture::Drag { task, from, to } => session
            .begin_drag(TASKS[*task], ZONES[*from])
            .and_then(|_| session.drop(to.map(|z| ZONES[z])).map(|_| ())),
        Gesture::Resize { task, grow } => {
            let handle = if *grow { ResizeHandle::Grow } else { ResizeHandle::Shrink };
            session.resize(TASKS[*task], handle).map(|_| ())
        }
        Gesture::Unplace { task } => session.unplace(TASKS[*task]).map(|_| ()),
        Gesture::Submit => session.submit_translations().map(|_| ()),
        Gesture::Cancel => session.cancel_translations(),
    };
}

proptest! {
    /// Property: day and time are either both set or both empty
    #[test]
    fn prop_day_and_time_set_together(gestures in prop::collection::vec(gesture(), 0..40)) {
        let mut session = session();
        for gesture in &gestures {
            apply(&mut session, gesture);
            for task in session.snapshot() {
                prop_assert_eq!(task.day().is_empty(), task.time().is_empty());
            }
        }
    }

    /// Property: durations never drop below one slot
    #[test]
    fn prop_duration_never_below_interval(gestures in prop::collection::vec(gesture(), 0..40)) {
        let mut session = session();
        for gesture in &gestures {
            apply(&mut session, gesture);
        }
        let interval = session.grid().interval_minutes();
        prop_assert!(session.snapshot().iter().all(|t| t.duration >= interval));
    }

    /// Property: projection lists exactly the placed tasks, each on the grid
    #[test]
    fn prop_projection_matches_placed_tasks(gestures in prop::collection::vec(gesture(), 0..40)) {
        let mut session = session();
        for gesture in &gestures {
            apply(&mut session, gesture);
        }
        let records = session.to_persisted();
        prop_assert_eq!(records.len(), session.scheduled_count());
        for record in &records {
            let day = session.grid().day_label(record.day as usize).unwrap().to_string();
            prop_assert!(session.grid().cell(&day, &record.start_time).is_ok());
        }

        let columns: usize = session.store().columns().iter().map(|c| c.task_ids.len()).sum();
        prop_assert_eq!(columns, session.scheduled_count());
    }
}
