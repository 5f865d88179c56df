//! Property-based tests for the display computations and state machines
//!
//! Uses proptest to pin the arithmetic and state invariants the UI kit
//! depends on.

use proptest::prelude::*;
use storefront_core::chart::{y_axis_max, y_axis_ticks, TICK_STEP};
use storefront_core::dropdown::reconcile_guard;
use storefront_core::{
    format_price, ControlledValue, DropdownEvent, DropdownKey, DropdownOption, DropdownState,
    LoyaltyProgress, OutsideClickRegistry, QuantityStepper, StarRating, StepOutcome,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn dropdown_event_strategy() -> impl Strategy<Value = DropdownEvent> {
    prop_oneof![
        Just(DropdownEvent::TriggerClick),
        Just(DropdownEvent::OutsidePointerDown),
        (0..6usize).prop_map(DropdownEvent::Select),
        prop_oneof![
            Just(DropdownKey::Enter),
            Just(DropdownKey::Space),
            Just(DropdownKey::ArrowDown),
            Just(DropdownKey::ArrowUp),
            Just(DropdownKey::Home),
            Just(DropdownKey::End),
            Just(DropdownKey::Escape),
            Just(DropdownKey::Tab),
            Just(DropdownKey::Other),
        ]
        .prop_map(DropdownEvent::Key),
    ]
}

fn options_strategy() -> impl Strategy<Value = Vec<DropdownOption>> {
    prop::collection::vec(any::<bool>(), 0..6).prop_map(|flags| {
        flags
            .into_iter()
            .enumerate()
            .map(|(i, disabled)| DropdownOption {
                value: format!("v{i}"),
                label: format!("Option {i}"),
                disabled,
            })
            .collect()
    })
}

/// Stepper presses: true = right (increment), false = left
fn presses_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..50)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Gradient offset is always the clamped rating as a percentage string
    #[test]
    fn star_offset_matches_clamped_rating(r in -20.0f64..20.0) {
        let rating = StarRating::new(r);
        let clamped = r.clamp(0.0, 5.0);
        prop_assert_eq!(rating.gradient_offset(), format!("{}%", clamped / 5.0 * 100.0));
        prop_assert!((0.0..=100.0).contains(&rating.fill_percent()));
    }

    /// aria-valuenow is raw points; indicator is clamped into [0, 100]
    #[test]
    fn loyalty_aria_raw_indicator_clamped(points in -5000.0f64..5000.0, max in 1.0f64..5000.0) {
        let progress = LoyaltyProgress::new(points, max);
        prop_assert_eq!(progress.aria_value_now(), points);
        let expected = (points.max(0.0) / max * 100.0).min(100.0);
        prop_assert_eq!(progress.indicator_percent(), expected);
    }

    /// Segments fill left to right
    #[test]
    fn loyalty_segments_monotonic(points in -100.0f64..2000.0, max in 1.0f64..1000.0) {
        let [a, b, c] = LoyaltyProgress::new(points, max).segments();
        prop_assert!(!b || a);
        prop_assert!(!c || b);
    }

    /// Axis max is a step multiple, at least the floor and at least every value
    #[test]
    fn axis_covers_series(values in prop::collection::vec(0.0f64..10_000.0, 0..24)) {
        let max = y_axis_max(values.iter().copied());
        prop_assert!(max >= 1000.0);
        prop_assert_eq!(max % TICK_STEP, 0.0);
        prop_assert!(values.iter().all(|v| *v <= max));

        let ticks = y_axis_ticks(values.iter().copied());
        prop_assert_eq!(*ticks.last().unwrap(), 0);
        prop_assert_eq!(ticks[0] as f64, max);
        prop_assert!(ticks.windows(2).all(|w| w[0] - w[1] == 250));
    }

    /// Prices always carry exactly two decimals
    #[test]
    fn price_has_two_decimals(amount in -100_000.0f64..100_000.0) {
        let s = format_price(amount, "$");
        prop_assert!(s.starts_with('$'));
        let (_, frac) = s.rsplit_once('.').unwrap();
        prop_assert_eq!(frac.len(), 2);
    }

    /// The stepper never leaves [min, max] and deletes only at min
    #[test]
    fn stepper_stays_in_bounds(min in 0u32..5, span in 0u32..10, presses in presses_strategy()) {
        let max = min + span;
        let mut stepper = QuantityStepper::new(min, min, max);
        for right in presses {
            let before = stepper.quantity();
            if right {
                match stepper.press_right() {
                    Some(StepOutcome::Increment(q)) => prop_assert_eq!(q, before + 1),
                    None => prop_assert_eq!(before, max),
                    Some(other) => prop_assert!(false, "unexpected {:?}", other),
                }
            } else {
                match stepper.press_left() {
                    StepOutcome::Delete => {
                        prop_assert_eq!(before, min);
                        prop_assert_eq!(stepper.quantity(), min);
                    }
                    StepOutcome::Decrement(q) => prop_assert_eq!(q, before - 1),
                    StepOutcome::Increment(_) => prop_assert!(false, "left press incremented"),
                }
            }
            prop_assert!((min..=max).contains(&stepper.quantity()));
        }
    }

    /// The outside-click guard is held exactly while open, whatever happens
    #[test]
    fn dropdown_guard_tracks_open(
        options in options_strategy(),
        events in prop::collection::vec(dropdown_event_strategy(), 0..40),
    ) {
        let registry = OutsideClickRegistry::new();
        let mut slot = None;
        let mut state = DropdownState::new();
        for event in events {
            let outcome = state.handle(event, &options, None, false);
            reconcile_guard(&state, &registry, &mut slot);
            prop_assert_eq!(registry.active(), usize::from(state.is_open()));
            if let Some(value) = outcome.selected {
                // Only enabled options are ever reported, and the list closes
                prop_assert!(options.iter().any(|o| o.value == value && !o.disabled));
                prop_assert!(!state.is_open());
            }
        }
        drop(slot);
        prop_assert_eq!(registry.active(), 0);
    }

    /// Keystrokes show immediately, and the next prop transition wins
    #[test]
    fn controlled_value_wins(
        external in "[a-z]{0,8}",
        typed in prop::collection::vec("[a-z]{0,8}", 0..10),
        next in "[A-Z]{1,8}",
    ) {
        let mut value = ControlledValue::new(Some(external.clone()), String::new());
        prop_assert_eq!(value.current(), &external);
        for t in typed {
            value.commit(t.clone(), false);
            prop_assert_eq!(value.current(), &t);
            prop_assert!(value.is_controlled());
        }
        let next = Some(next);
        prop_assert!(value.needs_sync(&next));
        value.sync_external(next.clone());
        prop_assert_eq!(Some(value.current().clone()), next);
    }
}
