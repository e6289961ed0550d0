//! Timeline generation.
//!
//! Merges the hydration, eye-rest and movement schedules plus three fixed
//! anchors into one agenda, bucketed by minute-of-day.
//!
//! ## Boundary policy
//!
//! Events are only kept strictly inside `(wake, bed)`. An occurrence that
//! lands exactly on wake or bed is dropped, so an interval that evenly
//! divides the waking window loses its final occurrence.

use std::collections::BTreeMap;
use std::num::NonZeroU16;

use serde::{Deserialize, Serialize};

use super::clock::{minutes_to_clock, ClockTime};
use super::event::{EventKind, FocusMode, RoutineEvent};

/// Offset of the morning activation anchor after wake.
pub const MORNING_ACTIVATION_OFFSET_MIN: i32 = 15;
/// Offset of the wind-down anchor before bed.
pub const WIND_DOWN_OFFSET_MIN: i32 = 30;
/// Offset of the digital sunset anchor before bed.
pub const DIGITAL_SUNSET_OFFSET_MIN: i32 = 15;

/// All events sharing one minute-of-day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSlot {
    /// Minute-of-day, `0..1440`. Sort key.
    pub minute: u16,
    /// 12-hour display label derived from `minute`.
    pub clock: String,
    /// Events in generation order.
    pub events: Vec<RoutineEvent>,
}

impl TimelineSlot {
    pub fn has_kind(&self, kind: EventKind) -> bool {
        self.events.iter().any(|e| e.kind == kind)
    }
}

/// Ordered agenda produced by [`build_timeline`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    slots: Vec<TimelineSlot>,
}

impl Timeline {
    pub fn slots(&self) -> &[TimelineSlot] {
        &self.slots
    }

    pub fn into_slots(self) -> Vec<TimelineSlot> {
        self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn event_count(&self) -> usize {
        self.slots.iter().map(|s| s.events.len()).sum()
    }

    pub fn count_of(&self, kind: EventKind) -> usize {
        self.slots
            .iter()
            .flat_map(|s| s.events.iter())
            .filter(|e| e.kind == kind)
            .count()
    }

    /// Slot at an exact minute-of-day, if any.
    pub fn slot_at(&self, minute: u16) -> Option<&TimelineSlot> {
        self.slots
            .binary_search_by_key(&minute, |s| s.minute)
            .ok()
            .map(|i| &self.slots[i])
    }
}

/// The full input tuple of the builder. Also the memoization key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimelineParams {
    pub wake: ClockTime,
    pub bed: ClockTime,
    pub hydration_interval: NonZeroU16,
    pub eye_interval: NonZeroU16,
    pub movement_interval: NonZeroU16,
    pub focus: FocusMode,
}

impl TimelineParams {
    pub fn build(&self) -> Timeline {
        build_timeline(
            self.wake,
            self.bed,
            self.hydration_interval,
            self.eye_interval,
            self.movement_interval,
            self.focus,
        )
    }
}

/// Minute-keyed accumulator enforcing the open `(wake, bed)` window.
struct SlotMap {
    wake: i32,
    bed: i32,
    slots: BTreeMap<i32, Vec<RoutineEvent>>,
}

impl SlotMap {
    fn new(wake: i32, bed: i32) -> Self {
        Self {
            wake,
            bed,
            slots: BTreeMap::new(),
        }
    }

    fn add_event(&mut self, minute: i32, event: RoutineEvent) {
        if minute <= self.wake || minute >= self.bed {
            return;
        }
        self.slots.entry(minute).or_default().push(event);
    }

    /// Adds `event` at `wake + k * interval` for every k >= 1 before bed.
    fn add_recurring(&mut self, interval: NonZeroU16, event: &RoutineEvent) {
        let step = i32::from(interval.get());
        let mut minute = self.wake + step;
        while minute < self.bed {
            self.add_event(minute, event.clone());
            minute += step;
        }
    }

    fn into_timeline(self) -> Timeline {
        let slots = self
            .slots
            .into_iter()
            .map(|(minute, events)| {
                let minute = minute.rem_euclid(1440) as u16;
                TimelineSlot {
                    minute,
                    clock: minutes_to_clock(u32::from(minute)),
                    events,
                }
            })
            .collect();
        Timeline { slots }
    }
}

/// Build the daily agenda.
///
/// Pass order (and therefore in-slot order) is hydration, eye rest,
/// movement, then the morning activation, wind-down and digital sunset
/// anchors.
pub fn build_timeline(
    wake: ClockTime,
    bed: ClockTime,
    hydration_interval: NonZeroU16,
    eye_interval: NonZeroU16,
    movement_interval: NonZeroU16,
    focus: FocusMode,
) -> Timeline {
    let wake_min = i32::from(wake.minutes());
    let bed_min = i32::from(bed.minutes());
    let mut map = SlotMap::new(wake_min, bed_min);

    map.add_recurring(hydration_interval, &RoutineEvent::hydration());
    map.add_recurring(eye_interval, &RoutineEvent::eye_rest());
    map.add_recurring(movement_interval, &focus.movement_event());

    map.add_event(
        wake_min + MORNING_ACTIVATION_OFFSET_MIN,
        RoutineEvent::morning_activation(),
    );
    map.add_event(
        bed_min - WIND_DOWN_OFFSET_MIN,
        RoutineEvent::evening_wind_down(),
    );
    map.add_event(
        bed_min - DIGITAL_SUNSET_OFFSET_MIN,
        RoutineEvent::digital_sunset(),
    );

    let timeline = map.into_timeline();
    tracing::debug!(
        wake = %wake,
        bed = %bed,
        %focus,
        slots = timeline.len(),
        events = timeline.event_count(),
        "timeline built"
    );
    timeline
}
