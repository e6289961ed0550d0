//! Auto-repeating reminder countdown.
//!
//! A countdown is a tick-driven state machine. It does not use internal
//! threads - the caller (usually [`super::Ticker`]) is responsible for
//! calling `tick()` once per second.
//!
//! ## Cycle
//!
//! ```text
//! interval*60 -> ... -> 2 -> 1 -> interval*60 -> ...
//! ```
//!
//! The displayed value never reaches zero: the tick that would take it to
//! zero emits [`Event::ReminderDue`] and restarts the cycle instead.

use std::fmt;
use std::num::NonZeroU16;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::events::{Event, ResetReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownKind {
    Hydration,
    EyeRest,
}

impl CountdownKind {
    pub const ALL: [CountdownKind; 2] = [Self::Hydration, Self::EyeRest];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hydration => "hydration",
            Self::EyeRest => "eye rest",
        }
    }
}

impl fmt::Display for CountdownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    kind: CountdownKind,
    /// Full cycle length in seconds.
    interval_secs: u64,
    remaining_secs: u64,
}

impl Countdown {
    /// Create a countdown that starts a full cycle of `interval_min` minutes.
    pub fn new(kind: CountdownKind, interval_min: NonZeroU16) -> Self {
        let interval_secs = minutes_to_secs(interval_min);
        Self {
            kind,
            interval_secs,
            remaining_secs: interval_secs,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn kind(&self) -> CountdownKind {
        self.kind
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    /// `MM:SS` form of the remaining time.
    pub fn display(&self) -> String {
        format_countdown(self.remaining_secs)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Advance by one second. Returns `Some(Event::ReminderDue)` on wrap.
    pub fn tick(&mut self) -> Option<Event> {
        if self.remaining_secs <= 1 {
            self.remaining_secs = self.interval_secs;
            tracing::info!(countdown = %self.kind, next_in_secs = self.interval_secs, "reminder due");
            return Some(Event::ReminderDue {
                countdown: self.kind,
                next_in_secs: self.interval_secs,
                at: Utc::now(),
            });
        }
        self.remaining_secs -= 1;
        None
    }

    /// Snap back to a full cycle.
    pub fn reset(&mut self, reason: ResetReason) -> Event {
        self.remaining_secs = self.interval_secs;
        Event::CountdownReset {
            countdown: self.kind,
            remaining_secs: self.remaining_secs,
            reason,
            at: Utc::now(),
        }
    }

    /// Replace the cycle length. Partial progress is discarded.
    pub fn set_interval(&mut self, interval_min: NonZeroU16, reason: ResetReason) -> Event {
        self.interval_secs = minutes_to_secs(interval_min);
        self.reset(reason)
    }

    /// Push the next reminder back. There is no upper bound.
    pub fn extend(&mut self, secs: u64) -> Event {
        self.remaining_secs = self.remaining_secs.saturating_add(secs);
        Event::CountdownExtended {
            countdown: self.kind,
            added_secs: secs,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Force the remaining time, for restoring a snapshot or tests.
    pub fn set_remaining(&mut self, secs: u64) {
        self.remaining_secs = secs;
    }

    /// Wall-clock time of the next reminder, as `hh:mm AM/PM`.
    pub fn next_reminder_clock<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        next_reminder_clock(now, self.remaining_secs)
    }
}

fn minutes_to_secs(minutes: NonZeroU16) -> u64 {
    u64::from(minutes.get()) * 60
}

/// Format seconds as `MM:SS`. Minutes grow past two digits when needed.
pub fn format_countdown(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// `now + remaining_secs`, formatted as a 12-hour `hh:mm AM/PM` clock.
pub fn next_reminder_clock<Tz: TimeZone>(now: &DateTime<Tz>, remaining_secs: u64) -> String
where
    Tz::Offset: fmt::Display,
{
    // Clamped so Duration::seconds stays in range.
    let secs = remaining_secs.min(i32::MAX as u64) as i64;
    let at = now
        .clone()
        .checked_add_signed(Duration::seconds(secs))
        .unwrap_or_else(|| now.clone());
    at.format("%I:%M %p").to_string()
}
