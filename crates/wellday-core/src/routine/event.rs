use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Category of a routine reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Hydration,
    Movement,
    EyeRest,
    Mindfulness,
    Sleep,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hydration => "hydration",
            Self::Movement => "movement",
            Self::EyeRest => "eye-rest",
            Self::Mindfulness => "mindfulness",
            Self::Sleep => "sleep",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selects the content of generated movement reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusMode {
    Strength,
    #[default]
    Mobility,
    Relax,
}

impl FocusMode {
    pub const ALL: [FocusMode; 3] = [Self::Strength, Self::Mobility, Self::Relax];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Mobility => "mobility",
            Self::Relax => "relax",
        }
    }

    /// The movement reminder used for every movement slot in this mode.
    pub fn movement_event(&self) -> RoutineEvent {
        let (title, description, benefit) = match self {
            Self::Strength => (
                "Strength snack",
                "10 squats, 10 desk push-ups and a 30 second wall sit.",
                "Keeps large muscle groups engaged and raises heart rate.",
            ),
            Self::Mobility => (
                "Mobility flow",
                "Neck rolls, shoulder circles, hip openers and a standing forward fold.",
                "Restores range of motion lost to long stretches of sitting.",
            ),
            Self::Relax => (
                "Gentle stretch",
                "Slow side bends and calf stretches with long exhales.",
                "Releases tension and lowers stress between focus blocks.",
            ),
        };
        RoutineEvent::new(EventKind::Movement, title, description, benefit)
    }
}

impl fmt::Display for FocusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FocusMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "mobility" => Ok(Self::Mobility),
            "relax" => Ok(Self::Relax),
            _ => Err(ValidationError::UnknownFocus(s.to_string())),
        }
    }
}

/// A single reminder on the daily timeline. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineEvent {
    pub kind: EventKind,
    pub title: String,
    pub description: String,
    pub benefit: String,
}

impl RoutineEvent {
    pub fn new(
        kind: EventKind,
        title: impl Into<String>,
        description: impl Into<String>,
        benefit: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            benefit: benefit.into(),
        }
    }

    pub fn hydration() -> Self {
        Self::new(
            EventKind::Hydration,
            "Hydration break",
            "Drink a glass of water (about 250 ml).",
            "Steady hydration supports focus and energy levels.",
        )
    }

    pub fn eye_rest() -> Self {
        Self::new(
            EventKind::EyeRest,
            "Eye rest",
            "Look at something 6 metres away for 20 seconds and blink slowly.",
            "Reduces digital eye strain and dryness.",
        )
    }

    pub fn morning_activation() -> Self {
        Self::new(
            EventKind::Movement,
            "Morning activation",
            "Five minutes of light movement and daylight exposure.",
            "Wakes up the body and anchors the circadian rhythm.",
        )
    }

    pub fn evening_wind_down() -> Self {
        Self::new(
            EventKind::Mindfulness,
            "Evening wind-down",
            "Dim the lights, breathe slowly and review the day.",
            "Signals the nervous system to shift into rest.",
        )
    }

    pub fn digital_sunset() -> Self {
        Self::new(
            EventKind::Sleep,
            "Digital sunset",
            "Put screens away and prepare for bed.",
            "Less blue light before sleep improves sleep quality.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&EventKind::EyeRest).unwrap(), "\"eye-rest\"");
        assert_eq!(EventKind::EyeRest.to_string(), "eye-rest");
    }

    #[test]
    fn focus_parses_case_insensitively() {
        assert_eq!("Strength".parse::<FocusMode>().unwrap(), FocusMode::Strength);
        assert_eq!(" relax ".parse::<FocusMode>().unwrap(), FocusMode::Relax);
        assert!("cardio".parse::<FocusMode>().is_err());
    }

    #[test]
    fn every_focus_mode_yields_distinct_movement_text() {
        let titles: Vec<String> = FocusMode::ALL
            .iter()
            .map(|f| f.movement_event().title)
            .collect();
        assert_eq!(titles.len(), 3);
        assert_ne!(titles[0], titles[1]);
        assert_ne!(titles[1], titles[2]);
        for f in FocusMode::ALL {
            assert_eq!(f.movement_event().kind, EventKind::Movement);
        }
    }
}
