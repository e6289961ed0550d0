//! Planner configuration and its validation boundary.

use std::num::NonZeroU16;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::routine::{ClockTime, FocusMode, TimelineParams};

pub const HYDRATION_INTERVAL_RANGE: RangeInclusive<u16> = 30..=120;
pub const MOVEMENT_INTERVAL_RANGE: RangeInclusive<u16> = 45..=150;
pub const EYE_INTERVAL_RANGE: RangeInclusive<u16> = 15..=40;
pub const WATER_GOAL_RANGE: RangeInclusive<u32> = 1500..=5000;

/// Which interval a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalField {
    Hydration,
    Eye,
    Movement,
}

impl IntervalField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hydration => "hydration_interval",
            Self::Eye => "eye_interval",
            Self::Movement => "movement_interval",
        }
    }

    pub fn range(&self) -> RangeInclusive<u16> {
        match self {
            Self::Hydration => HYDRATION_INTERVAL_RANGE,
            Self::Eye => EYE_INTERVAL_RANGE,
            Self::Movement => MOVEMENT_INTERVAL_RANGE,
        }
    }

    /// Reject zero and anything outside the field's range.
    pub fn validate(&self, minutes: u16) -> Result<NonZeroU16, ValidationError> {
        let value = NonZeroU16::new(minutes)
            .ok_or(ValidationError::NonPositiveInterval { field: self.name() })?;
        let range = self.range();
        if !range.contains(&minutes) {
            return Err(ValidationError::IntervalOutOfRange {
                field: self.name(),
                value: minutes,
                min: *range.start(),
                max: *range.end(),
            });
        }
        Ok(value)
    }
}

/// Everything a planner session is configured with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default = "default_wake")]
    pub wake: ClockTime,
    #[serde(default = "default_bed")]
    pub bed: ClockTime,
    /// Minutes between hydration reminders.
    #[serde(default = "default_hydration_interval")]
    pub hydration_interval: u16,
    /// Minutes between eye-rest reminders.
    #[serde(default = "default_eye_interval")]
    pub eye_interval: u16,
    /// Minutes between movement reminders.
    #[serde(default = "default_movement_interval")]
    pub movement_interval: u16,
    #[serde(default)]
    pub focus: FocusMode,
    /// Daily water goal in millilitres.
    #[serde(default = "default_water_goal")]
    pub water_goal: u32,
}

fn default_wake() -> ClockTime {
    ClockTime::from_minutes(6 * 60 + 30)
}
fn default_bed() -> ClockTime {
    ClockTime::from_minutes(22 * 60 + 30)
}
fn default_hydration_interval() -> u16 {
    60
}
fn default_eye_interval() -> u16 {
    20
}
fn default_movement_interval() -> u16 {
    90
}
fn default_water_goal() -> u32 {
    2500
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            wake: default_wake(),
            bed: default_bed(),
            hydration_interval: default_hydration_interval(),
            eye_interval: default_eye_interval(),
            movement_interval: default_movement_interval(),
            focus: FocusMode::default(),
            water_goal: default_water_goal(),
        }
    }
}

impl PlannerConfig {
    /// Check every field. The first violation wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_window(self.wake, self.bed)?;
        IntervalField::Hydration.validate(self.hydration_interval)?;
        IntervalField::Eye.validate(self.eye_interval)?;
        IntervalField::Movement.validate(self.movement_interval)?;
        validate_water_goal(self.water_goal)?;
        Ok(())
    }

    /// Builder inputs for this configuration, validated.
    pub fn timeline_params(&self) -> Result<TimelineParams, ValidationError> {
        validate_window(self.wake, self.bed)?;
        Ok(TimelineParams {
            wake: self.wake,
            bed: self.bed,
            hydration_interval: IntervalField::Hydration.validate(self.hydration_interval)?,
            eye_interval: IntervalField::Eye.validate(self.eye_interval)?,
            movement_interval: IntervalField::Movement.validate(self.movement_interval)?,
            focus: self.focus,
        })
    }
}

pub fn validate_window(wake: ClockTime, bed: ClockTime) -> Result<(), ValidationError> {
    if wake >= bed {
        return Err(ValidationError::WakeNotBeforeBed {
            wake: wake.to_string(),
            bed: bed.to_string(),
        });
    }
    Ok(())
}

pub fn validate_water_goal(goal_ml: u32) -> Result<(), ValidationError> {
    if !WATER_GOAL_RANGE.contains(&goal_ml) {
        return Err(ValidationError::WaterGoalOutOfRange { value: goal_ml });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
        let params = PlannerConfig::default().timeline_params().unwrap();
        assert_eq!(params.wake.minutes(), 390);
        assert_eq!(params.bed.minutes(), 1350);
    }

    #[test]
    fn zero_interval_is_non_positive() {
        let cfg = PlannerConfig {
            eye_interval: 0,
            ..PlannerConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ValidationError::NonPositiveInterval {
                field: "eye_interval"
            })
        );
        assert!(cfg.timeline_params().is_err());
    }

    #[test]
    fn intervals_are_range_checked() {
        assert!(IntervalField::Hydration.validate(30).is_ok());
        assert!(IntervalField::Hydration.validate(120).is_ok());
        assert!(IntervalField::Hydration.validate(29).is_err());
        assert!(IntervalField::Movement.validate(151).is_err());
        assert!(matches!(
            IntervalField::Eye.validate(41),
            Err(ValidationError::IntervalOutOfRange {
                min: 15,
                max: 40,
                ..
            })
        ));
    }

    #[test]
    fn wake_must_precede_bed() {
        let cfg = PlannerConfig {
            wake: "23:00".parse().unwrap(),
            bed: "07:00".parse().unwrap(),
            ..PlannerConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ValidationError::WakeNotBeforeBed { .. })
        ));

        let same = PlannerConfig {
            wake: "07:00".parse().unwrap(),
            bed: "07:00".parse().unwrap(),
            ..PlannerConfig::default()
        };
        assert!(same.validate().is_err());
    }

    #[test]
    fn water_goal_bounds() {
        assert!(validate_water_goal(1500).is_ok());
        assert!(validate_water_goal(5000).is_ok());
        assert!(validate_water_goal(1499).is_err());
        assert!(validate_water_goal(5001).is_err());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: PlannerConfig = serde_json::from_str(r#"{"wake":"07:15","focus":"relax"}"#).unwrap();
        assert_eq!(cfg.wake.minutes(), 435);
        assert_eq!(cfg.bed, PlannerConfig::default().bed);
        assert_eq!(cfg.focus, FocusMode::Relax);
        assert_eq!(cfg.water_goal, 2500);
    }
}
