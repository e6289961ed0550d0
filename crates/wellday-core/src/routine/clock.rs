//! Minute-of-day arithmetic and clock formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// A wall-clock time of day with minute precision.
///
/// Parsed from and displayed as 24-hour `HH:MM`, which is the format the
/// planner inputs use. Internally a minute-of-day in `0..1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build from hour and minute. Returns `None` outside 00:00..=23:59.
    pub fn new(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Build from a minute-of-day, wrapping past midnight.
    pub fn from_minutes(minutes: u16) -> Self {
        Self(minutes % MINUTES_PER_DAY)
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

    /// The 12-hour display form, e.g. `"07:30 AM"`.
    pub fn to_12h(self) -> String {
        minutes_to_clock(u32::from(self.0))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidClock(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(invalid());
        }
        let hour: u16 = h.parse().map_err(|_| invalid())?;
        let minute: u16 = m.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).ok_or_else(invalid)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Format a minute-of-day as `hh:mm AM/PM`.
///
/// The value is reduced modulo one day first, so minutes past midnight
/// wrap onto the next morning.
pub fn minutes_to_clock(minutes: u32) -> String {
    let normalized = minutes % u32::from(MINUTES_PER_DAY);
    let hour = normalized / 60;
    let minute = normalized % 60;
    let display_hour = if hour % 12 == 0 { 12 } else { hour % 12 };
    let suffix = if hour < 12 { "AM" } else { "PM" };
    format!("{display_hour:02}:{minute:02} {suffix}")
}
