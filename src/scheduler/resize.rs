// Duration resizing
//
// Each placed card carries two edge handles. Clicking one grows or shrinks
// the task by exactly one slot interval; the store clamps at one interval.

use serde::{Deserialize, Serialize};

/// Which edge of the card was clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeHandle {
    /// Leading edge - one interval shorter
    Shrink,
    /// Trailing edge - one interval longer
    Grow,
}

impl ResizeHandle {
    /// Signed duration change for one click
    pub fn delta_minutes(&self, interval_minutes: u32) -> i64 {
        let step = i64::from(interval_minutes);
        match self {
            ResizeHandle::Shrink => -step,
            ResizeHandle::Grow => step,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResizeHandle::Shrink => "Decrease duration",
            ResizeHandle::Grow => "Increase duration",
        }
    }
}
