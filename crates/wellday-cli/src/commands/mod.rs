pub mod completions;
pub mod config;
pub mod preset;
pub mod timeline;
pub mod watch;

use clap::Args;
use wellday_core::{ClockTime, Config, FocusMode, PlannerConfig, Preset};

/// Per-invocation overrides on top of the stored planner defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct PlannerArgs {
    /// Apply a preset before the individual overrides
    #[arg(long)]
    pub preset: Option<Preset>,
    /// Wake time (HH:MM)
    #[arg(long)]
    pub wake: Option<ClockTime>,
    /// Bed time (HH:MM)
    #[arg(long)]
    pub bed: Option<ClockTime>,
    /// Minutes between hydration reminders (30-120)
    #[arg(long)]
    pub hydration: Option<u16>,
    /// Minutes between eye-rest reminders (15-40)
    #[arg(long)]
    pub eye: Option<u16>,
    /// Minutes between movement reminders (45-150)
    #[arg(long)]
    pub movement: Option<u16>,
    /// Focus mode: strength, mobility or relax
    #[arg(long)]
    pub focus: Option<FocusMode>,
    /// Daily water goal in ml (1500-5000)
    #[arg(long)]
    pub goal: Option<u32>,
}

impl PlannerArgs {
    /// Stored defaults with the preset and flags applied. Not yet validated.
    pub fn resolve(&self, config: &Config) -> PlannerConfig {
        let mut planner = config.planner.clone();
        if let Some(preset) = self.preset {
            let v = preset.values();
            planner.focus = v.focus;
            planner.movement_interval = v.movement_interval;
            planner.eye_interval = v.eye_interval;
            planner.hydration_interval = v.hydration_interval;
        }
        if let Some(wake) = self.wake {
            planner.wake = wake;
        }
        if let Some(bed) = self.bed {
            planner.bed = bed;
        }
        if let Some(m) = self.hydration {
            planner.hydration_interval = m;
        }
        if let Some(m) = self.eye {
            planner.eye_interval = m;
        }
        if let Some(m) = self.movement {
            planner.movement_interval = m;
        }
        if let Some(focus) = self.focus {
            planner.focus = focus;
        }
        if let Some(goal) = self.goal {
            planner.water_goal = goal;
        }
        planner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_preset() {
        let args = PlannerArgs {
            preset: Some(Preset::Calm),
            eye: Some(30),
            ..PlannerArgs::default()
        };
        let planner = args.resolve(&Config::default());
        assert_eq!(planner.focus, FocusMode::Relax);
        assert_eq!(planner.movement_interval, 105);
        assert_eq!(planner.hydration_interval, 60);
        assert_eq!(planner.eye_interval, 30);
    }

    #[test]
    fn no_flags_keeps_stored_defaults() {
        let cfg = Config::default();
        assert_eq!(PlannerArgs::default().resolve(&cfg), cfg.planner);
    }
}
