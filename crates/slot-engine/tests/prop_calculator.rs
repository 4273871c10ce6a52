//! Property-based tests for free slot computation using proptest.
//!
//! These tests verify invariants that should hold for *any* set of bookings,
//! not just the specific examples in `calculator_tests.rs`.

use std::collections::BTreeSet;

use proptest::prelude::*;
use slot_engine::{
    block_count, compute_free_slots, occupied_slots, universe, BookingOccupancy, Granularity,
    OperatingWindow, TimeOfDay,
};
use slot_engine::time::MINUTES_PER_DAY;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_granularity() -> impl Strategy<Value = Granularity> {
    prop_oneof![Just(5u32), Just(10), Just(15), Just(20), Just(30), Just(45), Just(60)]
        .prop_map(|m| Granularity::new(m).unwrap())
}

fn arb_time() -> impl Strategy<Value = TimeOfDay> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| TimeOfDay::new(h, m).unwrap())
}

/// A start time on the 5-minute grid, so it lines up with some granularities.
fn arb_grid_time() -> impl Strategy<Value = TimeOfDay> {
    (0u32..24, 0u32..12).prop_map(|(h, m)| TimeOfDay::new(h, m * 5).unwrap())
}

fn arb_booking() -> impl Strategy<Value = BookingOccupancy> {
    (prop_oneof![arb_time(), arb_grid_time()], 0u32..=600)
        .prop_map(|(start, minutes)| BookingOccupancy::new(start, minutes))
}

fn arb_window() -> impl Strategy<Value = OperatingWindow> {
    (arb_grid_time(), arb_grid_time()).prop_map(|(a, b)| {
        let (open, close) = if a <= b { (a, b) } else { (b, a) };
        OperatingWindow::new(open, close).unwrap()
    })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn same_input_same_output(
        bookings in prop::collection::vec(arb_booking(), 0..8),
        window in arb_window(),
        g in arb_granularity(),
    ) {
        let a = compute_free_slots(&bookings, &window, g);
        let b = compute_free_slots(&bookings, &window, g);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn free_is_universe_minus_occupied(
        bookings in prop::collection::vec(arb_booking(), 0..8),
        window in arb_window(),
        g in arb_granularity(),
    ) {
        let free = compute_free_slots(&bookings, &window, g);
        let occupied = occupied_slots(&bookings, g);
        let expected: Vec<TimeOfDay> = universe(&window, g)
            .into_iter()
            .filter(|s| !occupied.contains(&s.minutes()))
            .collect();

        prop_assert_eq!(&free, &expected);
        for slot in &free {
            prop_assert!(!occupied.contains(&slot.minutes()));
        }
    }

    #[test]
    fn free_slots_strictly_ascending_and_in_window(
        bookings in prop::collection::vec(arb_booking(), 0..8),
        window in arb_window(),
        g in arb_granularity(),
    ) {
        let free = compute_free_slots(&bookings, &window, g);
        prop_assert!(free.windows(2).all(|w| w[0] < w[1]));
        for slot in &free {
            prop_assert!(window.contains(*slot));
            prop_assert_eq!((slot.minutes() - window.open().minutes()) % g.minutes(), 0);
        }
    }

    #[test]
    fn block_count_is_ceiling(minutes in 0u32..=2000, g in arb_granularity()) {
        let count = block_count(minutes, g);
        prop_assert!(count * g.minutes() >= minutes);
        if count > 0 {
            prop_assert!((count - 1) * g.minutes() < minutes);
        }
    }

    #[test]
    fn longer_booking_never_blocks_fewer_slots(
        start in arb_time(),
        minutes in 0u32..=600,
        extra in 0u32..=120,
        g in arb_granularity(),
    ) {
        let short = BookingOccupancy::new(start, minutes);
        let long = BookingOccupancy::new(start, minutes + extra);
        let short_slots: BTreeSet<u32> = short.slot_offsets(g).collect();
        let long_slots: BTreeSet<u32> = long.slot_offsets(g).collect();

        prop_assert!(long_slots.len() >= short_slots.len());
        prop_assert!(short_slots.is_subset(&long_slots));
    }

    #[test]
    fn offsets_stay_within_one_day(
        start in arb_time(),
        minutes in any::<u32>(),
        g in arb_granularity(),
    ) {
        let offsets: Vec<u32> = BookingOccupancy::new(start, minutes).slot_offsets(g).collect();

        prop_assert!(offsets.len() as u32 <= block_count(minutes, g));
        prop_assert!(offsets.iter().all(|&m| m < MINUTES_PER_DAY));
    }

    #[test]
    fn adding_a_booking_never_frees_a_slot(
        bookings in prop::collection::vec(arb_booking(), 0..6),
        extra in arb_booking(),
        window in arb_window(),
        g in arb_granularity(),
    ) {
        let before: BTreeSet<TimeOfDay> =
            compute_free_slots(&bookings, &window, g).into_iter().collect();
        let mut more = bookings.clone();
        more.push(extra);
        let after: BTreeSet<TimeOfDay> =
            compute_free_slots(&more, &window, g).into_iter().collect();

        prop_assert!(after.is_subset(&before));
    }

    #[test]
    fn booking_order_does_not_matter(
        bookings in prop::collection::vec(arb_booking(), 0..8),
        window in arb_window(),
        g in arb_granularity(),
    ) {
        let mut reversed = bookings.clone();
        reversed.reverse();
        prop_assert_eq!(
            compute_free_slots(&bookings, &window, g),
            compute_free_slots(&reversed, &window, g)
        );
    }
}
