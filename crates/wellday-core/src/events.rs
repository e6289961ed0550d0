use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::planner::Preset;
use crate::routine::FocusMode;
use crate::timer::CountdownKind;

/// Why a countdown was snapped back to its full interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetReason {
    IntervalChanged,
    PresetApplied,
    CompletedEarly,
}

/// Every state change in a planner session produces an Event.
/// Front ends print them; the ticker forwards them over a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A countdown hit zero and started its next cycle.
    ReminderDue {
        countdown: CountdownKind,
        next_in_secs: u64,
        at: DateTime<Utc>,
    },
    CountdownReset {
        countdown: CountdownKind,
        remaining_secs: u64,
        reason: ResetReason,
        at: DateTime<Utc>,
    },
    CountdownExtended {
        countdown: CountdownKind,
        added_secs: u64,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    WaterLogged {
        amount_ml: u32,
        total_ml: u32,
        goal_ml: u32,
        at: DateTime<Utc>,
    },
    WaterLogReset {
        at: DateTime<Utc>,
    },
    WaterGoalChanged {
        goal_ml: u32,
        total_ml: u32,
        at: DateTime<Utc>,
    },
    PresetApplied {
        preset: Preset,
        focus: FocusMode,
        movement_interval: u16,
        eye_interval: u16,
        hydration_interval: u16,
        at: DateTime<Utc>,
    },
    /// A timeline input (wake, bed, focus, movement interval) changed.
    ScheduleChanged {
        field: String,
        value: String,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        hydration_remaining_secs: u64,
        eye_remaining_secs: u64,
        water_logged_ml: u32,
        water_goal_ml: u32,
        hydration_progress_pct: u8,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// The countdown this event resets, if it resets one.
    pub fn reset_countdown(&self) -> Option<CountdownKind> {
        match self {
            Event::CountdownReset { countdown, .. } => Some(*countdown),
            _ => None,
        }
    }
}
