// Clock time utilities
// Wall-clock times on the weekly grid, stored as minutes since midnight

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute resolution.
///
/// Unlike `NaiveTime` this can hold `24:00`, which is a legal end for a
/// grid range (`00:00 - 24:00` produces a final `24:00` slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u32);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);
    pub const END_OF_DAY: ClockTime = ClockTime(MINUTES_PER_DAY);

    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if minute >= 60 {
            return None;
        }
        Self::from_minutes(hour * 60 + minute)
    }

    /// Parse `HH:mm` or `HH:mm:ss`. Seconds must be zero.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if matches!(trimmed, "24:00" | "24:00:00") {
            return Ok(Self::END_OF_DAY);
        }

        let time = NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .map_err(|_| SchedulerError::InvalidTime(value.to_string()))?;

        if time.second() != 0 {
            return Err(SchedulerError::InvalidTime(value.to_string()));
        }

        Ok(Self(time.hour() * 60 + time.minute()))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / 60
    }

    pub fn minute(self) -> u32 {
        self.0 % 60
    }

    /// Add (or subtract) minutes, wrapping around midnight the way a
    /// wall clock does. `23:30 + 60` is `00:30`.
    pub fn add_minutes_wrapping(self, minutes: i64) -> Self {
        let total = (i64::from(self.0) + minutes).rem_euclid(i64::from(MINUTES_PER_DAY));
        Self(total as u32)
    }

    /// Add minutes without wrapping; `None` past `24:00`.
    pub fn checked_add_minutes(self, minutes: u32) -> Option<Self> {
        self.0.checked_add(minutes).and_then(Self::from_minutes)
    }

    /// Minutes from `self` forward to `end`, wrapping past midnight.
    /// Equal times are a full day apart.
    pub fn minutes_until(self, end: ClockTime) -> u32 {
        let start = self.0 % MINUTES_PER_DAY;
        let end = end.0 % MINUTES_PER_DAY;
        if end > start {
            end - start
        } else {
            end + MINUTES_PER_DAY - start
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = SchedulerError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// Normalize a stored time string to `HH:mm`.
pub fn normalize_time(value: &str) -> Result<String> {
    ClockTime::parse(value).map(|t| t.to_string())
}

/// Compare two time strings, treating `HH:mm` and `HH:mm:00` as equal.
pub fn same_time(a: &str, b: &str) -> bool {
    match (ClockTime::parse(a), ClockTime::parse(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
