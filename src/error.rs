// Scheduler error types
// Shared by the grid model, the placement store and the session layer

use thiserror::Error;

/// Result type alias using `SchedulerError`
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Error type for scheduler operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// Time string that is neither `HH:mm` nor `HH:mm:ss`
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// Time range whose start is after its end
    #[error("Invalid time range: {start} - {end}")]
    InvalidTimeRange { start: String, end: String },

    /// Slot interval that cannot step the time axis
    #[error("Invalid slot interval: {0} minutes")]
    InvalidInterval(u32),

    /// Day labels that are not exactly seven distinct entries
    #[error("Invalid day labels: {0}")]
    InvalidDayLabels(String),

    /// Unrecognised week start day
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    /// Day/time pair that is not a cell of the grid
    #[error("Placement rejected: {day} {time} is not on the grid")]
    PlacementRejected { day: String, time: String },

    /// Task id not present in the store
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    /// Operation that needs a placed task was given an unplaced one
    #[error("Task is not placed: {0}")]
    TaskNotPlaced(String),

    /// Drag source that is neither the pool nor a grid cell
    #[error("Unknown drop zone: {0}")]
    UnknownDroppable(String),

    /// Drag started from a zone the task does not occupy
    #[error("Task {task_id} is not at {source_id}")]
    DragSourceMismatch { task_id: String, source_id: String },

    /// Language not offered by the translation dialog
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Drop or hover without a drag in progress
    #[error("No drag in progress")]
    NoActiveDrag,

    /// Dialog operation without an open translation dialog
    #[error("No translation dialog is open")]
    NoDialogOpen,

    /// Save-time validation failure
    #[error("Validation error: {0}")]
    Validation(String),
}

impl SchedulerError {
    pub fn placement_rejected(day: impl Into<String>, time: impl Into<String>) -> Self {
        Self::PlacementRejected {
            day: day.into(),
            time: time.into(),
        }
    }
}
