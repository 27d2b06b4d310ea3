//! Weekly time grid.
//!
//! Defines the coordinate system tasks are placed on: seven ordered day rows
//! and an ordered axis of time slots generated from a range and an interval.
//! A placed task starts at its slot and spans `ceil(duration / interval)`
//! slot columns. The grid never reflows or rejects overlaps; tasks that start
//! in the same cell simply stack.

use std::collections::HashSet;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::models::settings::GridSettings;
use crate::models::task::Task;
use crate::utils::time::ClockTime;

pub const DAYS_PER_WEEK: usize = 7;

/// Inclusive range of the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeRange {
    pub fn new(start: ClockTime, end: ClockTime) -> Result<Self> {
        if start > end {
            return Err(SchedulerError::InvalidTimeRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(ClockTime::parse(start)?, ClockTime::parse(end)?)
    }
}

/// Generate the slot axis: `start`, `start + interval`, ... up to and
/// including `end` when it lands on a step.
pub fn generate_time_slots(range: TimeRange, interval_minutes: u32) -> Result<Vec<ClockTime>> {
    if interval_minutes == 0 {
        return Err(SchedulerError::InvalidInterval(interval_minutes));
    }

    let mut slots = Vec::new();
    let mut current = Some(range.start);
    while let Some(time) = current.filter(|t| *t <= range.end) {
        slots.push(time);
        current = time.checked_add_minutes(interval_minutes);
    }
    Ok(slots)
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn parse_weekday(value: &str) -> Result<Weekday> {
    value
        .trim()
        .parse::<Weekday>()
        .map_err(|_| SchedulerError::InvalidWeekday(value.to_string()))
}

/// English day labels for a week starting on `first`.
pub fn week_days(first: Weekday) -> Vec<String> {
    let mut days = Vec::with_capacity(DAYS_PER_WEEK);
    let mut day = first;
    for _ in 0..DAYS_PER_WEEK {
        days.push(weekday_name(day).to_string());
        day = day.succ();
    }
    days
}

fn validate_days(days: &[String]) -> Result<()> {
    if days.len() != DAYS_PER_WEEK {
        return Err(SchedulerError::InvalidDayLabels(format!(
            "expected {} labels, got {}",
            DAYS_PER_WEEK,
            days.len()
        )));
    }

    let mut seen = HashSet::new();
    for day in days {
        if day.trim().is_empty() {
            return Err(SchedulerError::InvalidDayLabels(
                "labels cannot be empty".to_string(),
            ));
        }
        if !seen.insert(day.as_str()) {
            return Err(SchedulerError::InvalidDayLabels(format!(
                "duplicate label '{}'",
                day
            )));
        }
    }
    Ok(())
}

/// A validated `(day, time)` coordinate. Only a `TimeGrid` can build one,
/// so a task can never hold an off-grid or half-filled placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridCell {
    day: String,
    time: ClockTime,
    day_index: usize,
    slot_index: usize,
}

impl GridCell {
    pub fn day(&self) -> &str {
        &self.day
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    pub fn day_index(&self) -> usize {
        self.day_index
    }

    pub fn slot_index(&self) -> usize {
        self.slot_index
    }

    /// Identifier of the drop zone for this cell (`"Saturday-09:00"`).
    pub fn droppable_id(&self) -> String {
        format!("{}-{}", self.day, self.time)
    }
}

/// Horizontal extent of a placed task on its day row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpan {
    pub day_index: usize,
    pub start_column: usize,
    pub span: usize,
}

impl GridSpan {
    pub fn end_column(&self) -> usize {
        self.start_column + self.span
    }

    /// True when the task runs past the last slot. The grid does not clip.
    pub fn overflows(&self, slot_count: usize) -> bool {
        self.end_column() > slot_count
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    range: TimeRange,
    interval_minutes: u32,
    slots: Vec<ClockTime>,
    days: Vec<String>,
    column_width: u32,
}

impl TimeGrid {
    pub fn new(range: TimeRange, interval_minutes: u32, days: Vec<String>) -> Result<Self> {
        validate_days(&days)?;
        let slots = generate_time_slots(range, interval_minutes)?;
        Ok(Self {
            range,
            interval_minutes,
            slots,
            days,
            column_width: crate::models::settings::DEFAULT_COLUMN_WIDTH,
        })
    }

    pub fn from_settings(settings: &GridSettings) -> Result<Self> {
        let range = TimeRange::parse(&settings.start, &settings.end)?;
        let days = match &settings.day_labels {
            Some(labels) => labels.clone(),
            None => week_days(parse_weekday(&settings.week_start)?),
        };
        let grid = Self::new(range, settings.interval_minutes, days)?
            .with_column_width(settings.column_width);
        log::debug!(
            "Built time grid {}-{} every {} min ({} slots)",
            grid.range.start,
            grid.range.end,
            grid.interval_minutes,
            grid.slots.len()
        );
        Ok(grid)
    }

    pub fn with_column_width(mut self, column_width: u32) -> Self {
        self.column_width = column_width;
        self
    }

    pub fn time_range(&self) -> TimeRange {
        self.range
    }

    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    pub fn column_width(&self) -> u32 {
        self.column_width
    }

    pub fn time_slots(&self) -> &[ClockTime] {
        &self.slots
    }

    pub fn slot_labels(&self) -> Vec<String> {
        self.slots.iter().map(ToString::to_string).collect()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn slot_index(&self, time: ClockTime) -> Option<usize> {
        self.slots.binary_search(&time).ok()
    }

    pub fn day_index(&self, day: &str) -> Option<usize> {
        self.days.iter().position(|d| d == day)
    }

    pub fn day_label(&self, index: usize) -> Option<&str> {
        self.days.get(index).map(String::as_str)
    }

    /// Build a validated cell, rejecting any day or time off the axes.
    pub fn cell(&self, day: &str, time: &str) -> Result<GridCell> {
        let rejected = || SchedulerError::placement_rejected(day, time);
        let day_index = self.day_index(day).ok_or_else(rejected)?;
        let time = ClockTime::parse(time).map_err(|_| rejected())?;
        let slot_index = self.slot_index(time).ok_or_else(rejected)?;
        Ok(GridCell {
            day: self.days[day_index].clone(),
            time,
            day_index,
            slot_index,
        })
    }

    pub fn cell_at(&self, day_index: usize, slot_index: usize) -> Option<GridCell> {
        let day = self.days.get(day_index)?;
        let time = *self.slots.get(slot_index)?;
        Some(GridCell {
            day: day.clone(),
            time,
            day_index,
            slot_index,
        })
    }

    /// Number of slot columns a duration occupies (at least one).
    pub fn column_span(&self, duration_minutes: u32) -> usize {
        (duration_minutes.div_ceil(self.interval_minutes) as usize).max(1)
    }

    /// Pixel width of a span, for hosts that render fixed-width columns.
    pub fn span_width(&self, span: usize) -> u32 {
        span as u32 * self.column_width
    }

    /// Start column and span of a placed task; `None` when unplaced or when
    /// its cell does not belong to this grid.
    pub fn span_for(&self, task: &Task) -> Option<GridSpan> {
        let cell = task.placement()?;
        let day_index = self.day_index(cell.day())?;
        let start_column = self.slot_index(cell.time())?;
        Some(GridSpan {
            day_index,
            start_column,
            span: self.column_span(task.duration),
        })
    }

    /// Tasks rendered in a cell, stacked in task order.
    pub fn tasks_starting_at<'a>(&self, tasks: &'a [Task], cell: &GridCell) -> Vec<&'a Task> {
        tasks
            .iter()
            .filter(|task| {
                task.placement()
                    .is_some_and(|p| p.day() == cell.day() && p.time() == cell.time())
            })
            .collect()
    }
}
