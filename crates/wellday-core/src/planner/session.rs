//! Session-scoped planner state.
//!
//! All mutation goes through [`PlannerSession`] transitions. Each one is
//! total over a validated session: it either rejects its input with a
//! [`ValidationError`] and leaves the state untouched, or applies it and
//! reports what changed as [`Event`]s.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::config::{validate_water_goal, validate_window, IntervalField, PlannerConfig};
use super::preset::Preset;
use super::state::{EyeRestState, HydrationState};
use crate::error::ValidationError;
use crate::events::{Event, ResetReason};
use crate::routine::{ClockTime, FocusMode, Timeline, TimelineCache, TimelineParams};
use crate::timer::CountdownKind;

/// Input to [`PlannerSession::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "value", rename_all = "snake_case")]
pub enum PlannerCommand {
    ApplyPreset(Preset),
    SetWake(ClockTime),
    SetBed(ClockTime),
    SetFocus(FocusMode),
    SetHydrationInterval(u16),
    SetEyeInterval(u16),
    SetMovementInterval(u16),
    SetWaterGoal(u32),
    LogWater(u32),
    ResetLog,
    ExtendEye(u64),
    CompleteEyeRest,
    Tick(CountdownKind),
}

#[derive(Debug, Clone)]
pub struct PlannerSession {
    config: PlannerConfig,
    params: TimelineParams,
    hydration: HydrationState,
    eye: EyeRestState,
    cache: TimelineCache,
}

impl PlannerSession {
    /// Start a session. Countdowns begin a full cycle, the log is empty.
    pub fn new(config: PlannerConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        let params = config.timeline_params()?;
        Ok(Self {
            hydration: HydrationState::new(params.hydration_interval, config.water_goal),
            eye: EyeRestState::new(params.eye_interval),
            config,
            params,
            cache: TimelineCache::new(),
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn hydration(&self) -> &HydrationState {
        &self.hydration
    }

    pub fn eye(&self) -> &EyeRestState {
        &self.eye
    }

    pub fn remaining_secs(&self, kind: CountdownKind) -> u64 {
        match kind {
            CountdownKind::Hydration => self.hydration.countdown.remaining_secs(),
            CountdownKind::EyeRest => self.eye.countdown.remaining_secs(),
        }
    }

    pub fn hydration_progress_pct(&self) -> u8 {
        self.hydration.progress_pct()
    }

    /// Agenda for the current configuration, memoized on its inputs.
    pub fn timeline(&mut self) -> &Timeline {
        self.cache.get_or_build(self.params)
    }

    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            hydration_remaining_secs: self.hydration.countdown.remaining_secs(),
            eye_remaining_secs: self.eye.countdown.remaining_secs(),
            water_logged_ml: self.hydration.logged_ml(),
            water_goal_ml: self.hydration.goal_ml(),
            hydration_progress_pct: self.hydration.progress_pct(),
            at: Utc::now(),
        }
    }

    // ── Countdown transitions ────────────────────────────────────────

    pub fn tick_hydration(&mut self) -> Option<Event> {
        self.hydration.countdown.tick()
    }

    pub fn tick_eye(&mut self) -> Option<Event> {
        self.eye.countdown.tick()
    }

    pub fn tick(&mut self, kind: CountdownKind) -> Option<Event> {
        match kind {
            CountdownKind::Hydration => self.tick_hydration(),
            CountdownKind::EyeRest => self.tick_eye(),
        }
    }

    pub fn extend_eye(&mut self, secs: u64) -> Event {
        self.eye.extend(secs)
    }

    pub fn complete_eye_rest(&mut self) -> Event {
        self.eye.complete()
    }

    // ── Configuration transitions ────────────────────────────────────

    /// Setting the same value again is a no-op and keeps countdown progress.
    pub fn set_hydration_interval(&mut self, minutes: u16) -> Result<Vec<Event>, ValidationError> {
        let value = IntervalField::Hydration.validate(minutes)?;
        if minutes == self.config.hydration_interval {
            return Ok(Vec::new());
        }
        self.config.hydration_interval = minutes;
        self.params.hydration_interval = value;
        Ok(vec![self
            .hydration
            .countdown
            .set_interval(value, ResetReason::IntervalChanged)])
    }

    pub fn set_eye_interval(&mut self, minutes: u16) -> Result<Vec<Event>, ValidationError> {
        let value = IntervalField::Eye.validate(minutes)?;
        if minutes == self.config.eye_interval {
            return Ok(Vec::new());
        }
        self.config.eye_interval = minutes;
        self.params.eye_interval = value;
        Ok(vec![self
            .eye
            .countdown
            .set_interval(value, ResetReason::IntervalChanged)])
    }

    /// Movement has no countdown; only the timeline changes.
    pub fn set_movement_interval(&mut self, minutes: u16) -> Result<Vec<Event>, ValidationError> {
        let value = IntervalField::Movement.validate(minutes)?;
        if minutes == self.config.movement_interval {
            return Ok(Vec::new());
        }
        self.config.movement_interval = minutes;
        self.params.movement_interval = value;
        Ok(vec![schedule_changed("movement_interval", minutes)])
    }

    pub fn set_wake(&mut self, wake: ClockTime) -> Result<Event, ValidationError> {
        validate_window(wake, self.config.bed)?;
        self.config.wake = wake;
        self.params.wake = wake;
        Ok(schedule_changed("wake", wake))
    }

    pub fn set_bed(&mut self, bed: ClockTime) -> Result<Event, ValidationError> {
        validate_window(self.config.wake, bed)?;
        self.config.bed = bed;
        self.params.bed = bed;
        Ok(schedule_changed("bed", bed))
    }

    pub fn set_focus(&mut self, focus: FocusMode) -> Event {
        self.config.focus = focus;
        self.params.focus = focus;
        schedule_changed("focus", focus)
    }

    /// Atomically set focus and all three intervals.
    ///
    /// Countdowns whose interval actually changed restart a full cycle.
    pub fn apply_preset(&mut self, preset: Preset) -> Vec<Event> {
        let values = preset.values();
        let mut next = self.config.clone();
        next.focus = values.focus;
        next.movement_interval = values.movement_interval;
        next.eye_interval = values.eye_interval;
        next.hydration_interval = values.hydration_interval;

        // Preset tuples sit inside every interval range.
        let Ok(params) = next.timeline_params() else {
            tracing::warn!(%preset, "preset values rejected by validation");
            return Vec::new();
        };

        let mut events = vec![Event::PresetApplied {
            preset,
            focus: values.focus,
            movement_interval: values.movement_interval,
            eye_interval: values.eye_interval,
            hydration_interval: values.hydration_interval,
            at: Utc::now(),
        }];
        if next.hydration_interval != self.config.hydration_interval {
            events.push(
                self.hydration
                    .countdown
                    .set_interval(params.hydration_interval, ResetReason::PresetApplied),
            );
        }
        if next.eye_interval != self.config.eye_interval {
            events.push(
                self.eye
                    .countdown
                    .set_interval(params.eye_interval, ResetReason::PresetApplied),
            );
        }

        self.config = next;
        self.params = params;
        tracing::info!(%preset, "preset applied");
        events
    }

    // ── Water log transitions ────────────────────────────────────────

    pub fn log_water(&mut self, amount_ml: u32) -> Event {
        self.hydration.log_water(amount_ml)
    }

    pub fn reset_log(&mut self) -> Event {
        self.hydration.reset_log()
    }

    pub fn set_water_goal(&mut self, goal_ml: u32) -> Result<Event, ValidationError> {
        validate_water_goal(goal_ml)?;
        self.config.water_goal = goal_ml;
        Ok(self.hydration.set_goal(goal_ml))
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Reducer form of the transitions above.
    pub fn apply(&mut self, command: PlannerCommand) -> Result<Vec<Event>, ValidationError> {
        let result = match command {
            PlannerCommand::ApplyPreset(preset) => Ok(self.apply_preset(preset)),
            PlannerCommand::SetWake(t) => self.set_wake(t).map(|e| vec![e]),
            PlannerCommand::SetBed(t) => self.set_bed(t).map(|e| vec![e]),
            PlannerCommand::SetFocus(f) => Ok(vec![self.set_focus(f)]),
            PlannerCommand::SetHydrationInterval(m) => self.set_hydration_interval(m),
            PlannerCommand::SetEyeInterval(m) => self.set_eye_interval(m),
            PlannerCommand::SetMovementInterval(m) => self.set_movement_interval(m),
            PlannerCommand::SetWaterGoal(ml) => self.set_water_goal(ml).map(|e| vec![e]),
            PlannerCommand::LogWater(ml) => Ok(vec![self.log_water(ml)]),
            PlannerCommand::ResetLog => Ok(vec![self.reset_log()]),
            PlannerCommand::ExtendEye(secs) => Ok(vec![self.extend_eye(secs)]),
            PlannerCommand::CompleteEyeRest => Ok(vec![self.complete_eye_rest()]),
            PlannerCommand::Tick(kind) => Ok(self.tick(kind).into_iter().collect()),
        };
        if let Err(e) = &result {
            tracing::warn!(error = %e, "planner command rejected");
        }
        result
    }
}

fn schedule_changed(field: &str, value: impl ToString) -> Event {
    Event::ScheduleChanged {
        field: field.to_string(),
        value: value.to_string(),
        at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::EventKind;

    fn session() -> PlannerSession {
        PlannerSession::new(PlannerConfig::default()).unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = PlannerConfig {
            hydration_interval: 0,
            ..PlannerConfig::default()
        };
        assert!(PlannerSession::new(cfg).is_err());
    }

    #[test]
    fn preset_active_overrides_prior_values() {
        let mut s = session();
        s.set_focus(FocusMode::Relax);
        s.set_movement_interval(120).unwrap();
        s.apply_preset(Preset::Active);
        let c = s.config();
        assert_eq!(
            (c.focus, c.movement_interval, c.eye_interval, c.hydration_interval),
            (FocusMode::Strength, 75, 25, 45)
        );
        assert_eq!(s.remaining_secs(CountdownKind::Hydration), 45 * 60);
        assert_eq!(s.remaining_secs(CountdownKind::EyeRest), 25 * 60);
    }

    #[test]
    fn preset_keeps_progress_of_unchanged_countdown() {
        let mut s = session();
        // Default eye interval is 20, same as the desk preset.
        for _ in 0..10 {
            s.tick_eye();
        }
        let events = s.apply_preset(Preset::Desk);
        assert_eq!(s.remaining_secs(CountdownKind::EyeRest), 20 * 60 - 10);
        assert_eq!(s.remaining_secs(CountdownKind::Hydration), 50 * 60);
        let resets: Vec<CountdownKind> = events.iter().filter_map(Event::reset_countdown).collect();
        assert_eq!(resets, vec![CountdownKind::Hydration]);
    }

    #[test]
    fn interval_change_resets_countdown() {
        let mut s = session();
        for _ in 0..42 {
            s.tick_hydration();
        }
        let events = s.set_hydration_interval(30).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(s.remaining_secs(CountdownKind::Hydration), 1800);
    }

    #[test]
    fn invalid_interval_leaves_state_untouched() {
        let mut s = session();
        s.tick_eye();
        assert!(s.set_eye_interval(0).is_err());
        assert!(s.set_eye_interval(90).is_err());
        assert_eq!(s.config().eye_interval, 20);
        assert_eq!(s.remaining_secs(CountdownKind::EyeRest), 1199);
    }

    #[test]
    fn water_goal_is_range_checked_then_clamps_log() {
        let mut s = session();
        s.log_water(2500);
        assert!(s.set_water_goal(1000).is_err());
        assert_eq!(s.hydration().logged_ml(), 2500);
        s.set_water_goal(2000).unwrap();
        assert_eq!(s.hydration().logged_ml(), 2000);
        assert_eq!(s.hydration_progress_pct(), 100);
    }

    #[test]
    fn wake_and_bed_keep_window_ordered() {
        let mut s = session();
        assert!(s.set_wake("23:00".parse().unwrap()).is_err());
        assert!(s.set_bed("06:30".parse().unwrap()).is_err());
        s.set_wake("07:00".parse().unwrap()).unwrap();
        assert_eq!(s.config().wake.minutes(), 420);
    }

    #[test]
    fn timeline_follows_config_changes() {
        let mut s = session();
        let before = s.timeline().count_of(EventKind::Hydration);
        s.set_hydration_interval(120).unwrap();
        let after = s.timeline().count_of(EventKind::Hydration);
        assert_eq!(before, 15);
        assert_eq!(after, 7);
    }

    #[test]
    fn apply_dispatches_commands() {
        let mut s = session();
        let events = s.apply(PlannerCommand::LogWater(300)).unwrap();
        assert!(matches!(events[0], Event::WaterLogged { total_ml: 300, .. }));

        s.apply(PlannerCommand::ExtendEye(60)).unwrap();
        assert_eq!(s.remaining_secs(CountdownKind::EyeRest), 1260);

        s.apply(PlannerCommand::CompleteEyeRest).unwrap();
        assert_eq!(s.remaining_secs(CountdownKind::EyeRest), 1200);

        s.apply(PlannerCommand::ApplyPreset(Preset::Calm)).unwrap();
        assert_eq!(s.config().focus, FocusMode::Relax);

        assert!(s.apply(PlannerCommand::SetWaterGoal(10)).is_err());
        assert!(s
            .apply(PlannerCommand::Tick(CountdownKind::Hydration))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn command_serde_shape() {
        let json = serde_json::to_string(&PlannerCommand::LogWater(250)).unwrap();
        assert_eq!(json, r#"{"command":"log_water","value":250}"#);
        let back: PlannerCommand =
            serde_json::from_str(r#"{"command":"apply_preset","value":"calm"}"#).unwrap();
        assert_eq!(back, PlannerCommand::ApplyPreset(Preset::Calm));
    }
}
