//! Property tests for the timeline builder.

use std::num::NonZeroU16;

use proptest::prelude::*;
use wellday_core::routine::TimelineParams;
use wellday_core::{build_timeline, ClockTime, EventKind, FocusMode};

fn focus_strategy() -> impl Strategy<Value = FocusMode> {
    prop_oneof![
        Just(FocusMode::Strength),
        Just(FocusMode::Mobility),
        Just(FocusMode::Relax),
    ]
}

fn params_strategy() -> impl Strategy<Value = TimelineParams> {
    (0u16..1439)
        .prop_flat_map(|wake| (Just(wake), (wake + 1)..1440))
        .prop_flat_map(|(wake, bed)| {
            (
                Just(wake),
                Just(bed),
                1u16..200,
                1u16..200,
                1u16..200,
                focus_strategy(),
            )
        })
        .prop_map(|(wake, bed, hi, ei, mi, focus)| TimelineParams {
            wake: ClockTime::from_minutes(wake),
            bed: ClockTime::from_minutes(bed),
            hydration_interval: NonZeroU16::new(hi).unwrap(),
            eye_interval: NonZeroU16::new(ei).unwrap(),
            movement_interval: NonZeroU16::new(mi).unwrap(),
            focus,
        })
}

/// Occurrences of `wake + k*interval` strictly before bed, k >= 1.
fn expected_recurring(wake: u16, bed: u16, interval: u16) -> usize {
    let span = bed - wake;
    if span == 0 {
        return 0;
    }
    usize::from((span - 1) / interval)
}

proptest! {
    #[test]
    fn slots_lie_strictly_inside_window(p in params_strategy()) {
        let tl = p.build();
        for slot in tl.slots() {
            prop_assert!(slot.minute > p.wake.minutes());
            prop_assert!(slot.minute < p.bed.minutes());
            prop_assert!(!slot.events.is_empty());
        }
    }

    #[test]
    fn slots_are_unique_and_ascending(p in params_strategy()) {
        let tl = p.build();
        prop_assert!(tl.slots().windows(2).all(|w| w[0].minute < w[1].minute));
    }

    #[test]
    fn builder_is_deterministic(p in params_strategy()) {
        prop_assert_eq!(p.build(), p.build());
    }

    #[test]
    fn recurring_counts_match_window(p in params_strategy()) {
        let tl = p.build();
        let (w, b) = (p.wake.minutes(), p.bed.minutes());
        prop_assert_eq!(
            tl.count_of(EventKind::Hydration),
            expected_recurring(w, b, p.hydration_interval.get())
        );
        prop_assert_eq!(
            tl.count_of(EventKind::EyeRest),
            expected_recurring(w, b, p.eye_interval.get())
        );
    }

    #[test]
    fn equal_intervals_merge_hydration_before_eye_rest(
        p in params_strategy(),
    ) {
        let interval = p.hydration_interval;
        let tl = build_timeline(p.wake, p.bed, interval, interval, p.movement_interval, p.focus);
        let first = p.wake.minutes() + interval.get();
        if first < p.bed.minutes() {
            let slot = tl.slot_at(first).unwrap();
            prop_assert_eq!(slot.events[0].kind, EventKind::Hydration);
            prop_assert_eq!(slot.events[1].kind, EventKind::EyeRest);
        }
    }

    #[test]
    fn clock_label_matches_minute(p in params_strategy()) {
        for slot in p.build().slots() {
            prop_assert_eq!(&slot.clock, &wellday_core::minutes_to_clock(u32::from(slot.minute)));
        }
    }
}
