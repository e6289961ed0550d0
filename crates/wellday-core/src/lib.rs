//! # Wellday Core Library
//!
//! This library provides the core logic for the Wellday routine planner.
//! All operations are available via the standalone CLI binary, which is a
//! thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Routine**: pure timeline builder that merges hydration, eye-rest and
//!   movement schedules with fixed anchors into a minute-bucketed agenda
//! - **Planner**: session-scoped state (countdowns, water log) with
//!   validated, reducer-style transitions
//! - **Timer**: auto-repeating countdowns and the tokio tasks that tick them
//! - **Storage**: TOML-based defaults
//!
//! ## Key Components
//!
//! - [`build_timeline`]: the timeline builder
//! - [`PlannerSession`]: session state machine
//! - [`Ticker`]: once-per-second countdown drivers
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod planner;
pub mod routine;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, ValidationError};
pub use events::{Event, ResetReason};
pub use planner::{PlannerCommand, PlannerConfig, PlannerSession, Preset};
pub use routine::{
    build_timeline, minutes_to_clock, ClockTime, EventKind, FocusMode, RoutineEvent, Timeline,
    TimelineSlot,
};
pub use storage::Config;
pub use timer::{format_countdown, next_reminder_clock, CountdownKind, Ticker};
