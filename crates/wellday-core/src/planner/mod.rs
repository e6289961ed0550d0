//! Planner session: configuration, presets, countdown and water state.

mod config;
mod preset;
mod session;
mod state;

pub use config::{
    validate_water_goal, validate_window, IntervalField, PlannerConfig, EYE_INTERVAL_RANGE,
    HYDRATION_INTERVAL_RANGE, MOVEMENT_INTERVAL_RANGE, WATER_GOAL_RANGE,
};
pub use preset::{Preset, PresetValues};
pub use session::{PlannerCommand, PlannerSession};
pub use state::{EyeRestState, HydrationState};
