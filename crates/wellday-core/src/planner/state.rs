use std::num::NonZeroU16;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::{Event, ResetReason};
use crate::timer::{Countdown, CountdownKind};

/// Hydration countdown plus the water log.
///
/// Invariant: `logged_ml <= goal_ml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationState {
    pub countdown: Countdown,
    logged_ml: u32,
    goal_ml: u32,
}

impl HydrationState {
    pub fn new(interval_min: NonZeroU16, goal_ml: u32) -> Self {
        Self {
            countdown: Countdown::new(CountdownKind::Hydration, interval_min),
            logged_ml: 0,
            goal_ml,
        }
    }

    pub fn logged_ml(&self) -> u32 {
        self.logged_ml
    }

    pub fn goal_ml(&self) -> u32 {
        self.goal_ml
    }

    /// Add to the running total, capped at the goal.
    pub fn log_water(&mut self, amount_ml: u32) -> Event {
        self.logged_ml = self.logged_ml.saturating_add(amount_ml).min(self.goal_ml);
        Event::WaterLogged {
            amount_ml,
            total_ml: self.logged_ml,
            goal_ml: self.goal_ml,
            at: Utc::now(),
        }
    }

    pub fn reset_log(&mut self) -> Event {
        self.logged_ml = 0;
        Event::WaterLogReset { at: Utc::now() }
    }

    /// Replace the goal; a total above the new goal is pulled down to it.
    ///
    /// Range checks happen at the session boundary, not here.
    pub fn set_goal(&mut self, goal_ml: u32) -> Event {
        self.goal_ml = goal_ml;
        self.logged_ml = self.logged_ml.min(goal_ml);
        Event::WaterGoalChanged {
            goal_ml,
            total_ml: self.logged_ml,
            at: Utc::now(),
        }
    }

    /// `round(100 * logged / goal)`, never above 100.
    pub fn progress_pct(&self) -> u8 {
        if self.goal_ml == 0 {
            return 0;
        }
        let pct = (f64::from(self.logged_ml) * 100.0 / f64::from(self.goal_ml)).round();
        pct.min(100.0) as u8
    }
}

/// Eye-rest countdown with deferral and early completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EyeRestState {
    pub countdown: Countdown,
}

impl EyeRestState {
    /// Seconds added by one "snooze".
    pub const EXTENSION_SECS: u64 = 60;

    pub fn new(interval_min: NonZeroU16) -> Self {
        Self {
            countdown: Countdown::new(CountdownKind::EyeRest, interval_min),
        }
    }

    pub fn extend(&mut self, secs: u64) -> Event {
        self.countdown.extend(secs)
    }

    /// The user rested early; start a fresh cycle now.
    pub fn complete(&mut self) -> Event {
        self.countdown.reset(ResetReason::CompletedEarly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hydration(goal: u32) -> HydrationState {
        HydrationState::new(NonZeroU16::new(60).unwrap(), goal)
    }

    #[test]
    fn log_clamps_at_goal_and_goal_shrink_clamps_total() {
        let mut h = hydration(2000);
        h.log_water(1500);
        h.log_water(1000);
        assert_eq!(h.logged_ml(), 2000);

        let event = h.set_goal(1000);
        assert_eq!(h.logged_ml(), 1000);
        assert!(matches!(
            event,
            Event::WaterGoalChanged {
                goal_ml: 1000,
                total_ml: 1000,
                ..
            }
        ));
    }

    #[test]
    fn growing_goal_keeps_total() {
        let mut h = hydration(2000);
        h.log_water(1200);
        h.set_goal(3000);
        assert_eq!(h.logged_ml(), 1200);
    }

    #[test]
    fn reset_log_zeroes_total() {
        let mut h = hydration(2500);
        h.log_water(750);
        h.reset_log();
        assert_eq!(h.logged_ml(), 0);
        assert_eq!(h.progress_pct(), 0);
    }

    #[test]
    fn progress_rounds_and_caps() {
        let mut h = hydration(3000);
        h.log_water(1000);
        assert_eq!(h.progress_pct(), 33);
        h.log_water(1000);
        assert_eq!(h.progress_pct(), 67);
        h.log_water(5000);
        assert_eq!(h.progress_pct(), 100);
    }

    #[test]
    fn eye_extend_and_complete() {
        let mut eye = EyeRestState::new(NonZeroU16::new(20).unwrap());
        for _ in 0..30 {
            eye.countdown.tick();
        }
        eye.extend(EyeRestState::EXTENSION_SECS);
        assert_eq!(eye.countdown.remaining_secs(), 1200 - 30 + 60);
        eye.complete();
        assert_eq!(eye.countdown.remaining_secs(), 1200);
    }
}
