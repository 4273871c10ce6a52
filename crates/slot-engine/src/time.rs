//! Wall-clock time of day, stored as minutes since midnight.
//!
//! All slot arithmetic goes through [`TimeOfDay`] so that formatting is always
//! zero-padded `"HH:MM"` and comparisons are plain integer comparisons.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::SlotError;

/// Minutes in one day. Valid times are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute precision (`00:00` through `23:59`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Const constructor for known-good literals.
    pub(crate) const fn at(hour: u16, minute: u16) -> Self {
        TimeOfDay(hour * 60 + minute)
    }

    /// Build a time from hour and minute components.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTime` if `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, SlotError> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTime(format!("{}:{:02}", hour, minute)));
        }
        Ok(TimeOfDay((hour * 60 + minute) as u16))
    }

    /// Build a time from minutes since midnight. Returns `None` at or past 24:00.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(TimeOfDay(minutes as u16))
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0) / 60
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0) % 60
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    /// Add minutes, returning `None` if the result would cross midnight.
    pub fn checked_add_minutes(self, minutes: u32) -> Option<Self> {
        self.minutes()
            .checked_add(minutes)
            .and_then(TimeOfDay::from_minutes)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parses `"HH:MM"` or `"H:MM"`. Minutes must be exactly two digits.
impl FromStr for TimeOfDay {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SlotError::InvalidTime(s.to_string());

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }
        if !all_digits(hour) || !all_digits(minute) {
            return Err(invalid());
        }

        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        TimeOfDay::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// Seconds and sub-second precision are truncated.
impl From<NaiveTime> for TimeOfDay {
    fn from(value: NaiveTime) -> Self {
        TimeOfDay((value.hour() * 60 + value.minute()) as u16)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(value: TimeOfDay) -> Self {
        // hour/minute are range-checked on construction
        NaiveTime::from_hms_opt(value.hour(), value.minute(), 0).unwrap_or(NaiveTime::MIN)
    }
}
