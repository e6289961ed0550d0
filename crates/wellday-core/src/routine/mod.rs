//! Daily routine timeline.
//!
//! This module provides:
//! - Minute-of-day clock parsing and 12-hour formatting
//! - Routine event kinds and focus-mode movement content
//! - The timeline builder that merges all reminder schedules
//! - A single-entry memo for the builder

mod builder;
mod cache;
mod clock;
mod event;

pub use builder::{
    build_timeline, Timeline, TimelineParams, TimelineSlot, DIGITAL_SUNSET_OFFSET_MIN,
    MORNING_ACTIVATION_OFFSET_MIN, WIND_DOWN_OFFSET_MIN,
};
pub use cache::TimelineCache;
pub use clock::{minutes_to_clock, ClockTime, MINUTES_PER_DAY};
pub use event::{EventKind, FocusMode, RoutineEvent};
