//! Compute bookable slot start times from a day's bookings.
//!
//! Builds the universe of slots for the operating window, quantizes every
//! booking into occupied slots, then returns the universe minus the occupied
//! set in ascending order. Matching is exact minute-of-day equality, so a
//! booking that starts off-grid blocks only off-grid positions.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::{Granularity, OperatingWindow};
use crate::occupancy::{block_count, occupied_slots, BookingOccupancy};
use crate::time::TimeOfDay;

/// Every slot start from `window.open()` to `window.close()` inclusive,
/// stepping by `granularity`.
pub fn universe(window: &OperatingWindow, granularity: Granularity) -> Vec<TimeOfDay> {
    let step = granularity.minutes() as usize;
    (window.open().minutes()..=window.close().minutes())
        .step_by(step)
        .filter_map(TimeOfDay::from_minutes)
        .collect()
}

/// Slots inside the window not covered by any booking, ascending.
///
/// Never fails: empty bookings leave the whole universe free; occupied slots
/// outside the window (before open or after close) are ignored.
pub fn compute_free_slots(
    bookings: &[BookingOccupancy],
    window: &OperatingWindow,
    granularity: Granularity,
) -> Vec<TimeOfDay> {
    let occupied = occupied_slots(bookings, granularity);
    let free: Vec<TimeOfDay> = universe(window, granularity)
        .into_iter()
        .filter(|slot| !occupied.contains(&slot.minutes()))
        .collect();

    debug!(
        bookings = bookings.len(),
        occupied = occupied.len(),
        free = free.len(),
        granularity = granularity.minutes(),
        "computed free slots"
    );

    free
}

/// Every free slot from which a booking of `duration_minutes` fits.
///
/// A start fits when all `ceil(duration / granularity)` slots beginning there
/// are in the universe and unoccupied. Ascending order.
pub fn fitting_slots(
    bookings: &[BookingOccupancy],
    window: &OperatingWindow,
    granularity: Granularity,
    duration_minutes: u32,
) -> Vec<TimeOfDay> {
    let occupied = occupied_slots(bookings, granularity);
    let free: BTreeSet<u32> = universe(window, granularity)
        .into_iter()
        .map(TimeOfDay::minutes)
        .filter(|m| !occupied.contains(m))
        .collect();

    // Zero-length requests still need one free slot to start in.
    let needed = block_count(duration_minutes, granularity).max(1);
    let step = granularity.minutes();

    free.iter()
        .copied()
        .filter(|&start| {
            (0..needed).all(|i| {
                start
                    .checked_add(i * step)
                    .is_some_and(|m| free.contains(&m))
            })
        })
        .filter_map(TimeOfDay::from_minutes)
        .collect()
}

/// The earliest start from which a booking of `duration_minutes` fits.
///
/// Delegates to [`fitting_slots`] and returns the first entry.
pub fn find_first_fit(
    bookings: &[BookingOccupancy],
    window: &OperatingWindow,
    granularity: Granularity,
    duration_minutes: u32,
) -> Option<TimeOfDay> {
    fitting_slots(bookings, window, granularity, duration_minutes)
        .into_iter()
        .next()
}
