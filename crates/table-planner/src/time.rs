//! Wall-clock time-of-day arithmetic at minute granularity.
//!
//! Times are exchanged as zero-padded `HH:mm` strings and stored as minutes
//! since midnight. There is no timezone handling: every comparison is local
//! wall-clock time scoped to a single calendar date.
//!
//! `24:00` is accepted as the end-of-day bound so that a booking starting at
//! 23:00 can end at midnight; no time ever goes past it.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day, `00:00` through `24:00` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY);

    /// Compile-time constructor for constants; panics during const
    /// evaluation on an out-of-range value.
    pub(crate) const fn at(hour: u16, minute: u16) -> Self {
        assert!(minute < 60 && hour * 60 + minute <= MINUTES_PER_DAY);
        TimeOfDay(hour * 60 + minute)
    }

    /// Build from minutes since midnight. `None` past `24:00`.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(TimeOfDay(minutes))
    }

    /// Build from an hour and minute pair. `None` for anything that would not
    /// render as a valid `HH:mm` (including `24:xx` other than `24:00`).
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if minute >= 60 {
            return None;
        }
        Self::from_minutes(hour.checked_mul(60)?.checked_add(minute)?)
    }

    /// Truncate a chrono time to the minute.
    pub fn from_naive(time: NaiveTime) -> Self {
        TimeOfDay((time.hour() * 60 + time.minute()) as u16)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Add a duration, returning `None` if the result would pass `24:00`.
    pub fn checked_add_minutes(self, minutes: u32) -> Option<Self> {
        let total = u32::from(self.0).checked_add(minutes)?;
        u16::try_from(total).ok().and_then(Self::from_minutes)
    }

    /// Signed distance in minutes from `self` to `later`.
    pub fn minutes_until(self, later: TimeOfDay) -> i64 {
        i64::from(later.0) - i64::from(self.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::MalformedTime(s.to_string());

        let (hours, minutes) = s.split_once(':').ok_or_else(malformed)?;
        if hours.len() != 2 || minutes.len() != 2 {
            return Err(malformed());
        }
        if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        // Both halves are exactly two ASCII digits, so parsing cannot fail.
        let hour: u16 = hours.parse().map_err(|_| malformed())?;
        let minute: u16 = minutes.parse().map_err(|_| malformed())?;

        Self::from_hm(hour, minute).ok_or_else(malformed)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// Parse an `HH:mm` string into minutes since midnight.
pub fn time_to_minutes(time: &str) -> Result<u16, ValidationError> {
    time.parse::<TimeOfDay>().map(TimeOfDay::minutes)
}

/// Render minutes since midnight as zero-padded `HH:mm`.
///
/// `None` for anything past `24:00`.
pub fn minutes_to_time(minutes: u16) -> Option<String> {
    TimeOfDay::from_minutes(minutes).map(|t| t.to_string())
}
