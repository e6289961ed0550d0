use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::routine::FocusMode;

/// Named bundles of focus and interval settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Desk,
    Active,
    Calm,
}

/// The values a preset writes, all at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetValues {
    pub focus: FocusMode,
    pub movement_interval: u16,
    pub eye_interval: u16,
    pub hydration_interval: u16,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Self::Desk, Self::Active, Self::Calm];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Desk => "desk",
            Self::Active => "active",
            Self::Calm => "calm",
        }
    }

    pub fn values(&self) -> PresetValues {
        let (focus, movement_interval, eye_interval, hydration_interval) = match self {
            Self::Desk => (FocusMode::Mobility, 60, 20, 50),
            Self::Active => (FocusMode::Strength, 75, 25, 45),
            Self::Calm => (FocusMode::Relax, 105, 18, 60),
        };
        PresetValues {
            focus,
            movement_interval,
            eye_interval,
            hydration_interval,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownPreset(s.to_string()))
    }
}
