//! Detect slot-level overlaps between a proposed booking and existing ones.
//!
//! Both sides are quantized to slots first, so two bookings conflict whenever
//! they block a common slot, even if their raw minute ranges merely touch the
//! same rounded-up unit.

use crate::config::Granularity;
use crate::occupancy::{occupied_slots, BookingOccupancy};
use crate::time::TimeOfDay;

/// Slots blocked by `proposed` that are already blocked by `existing`.
///
/// Returns them ascending. Only slots before midnight are considered, so a
/// late overlap is reported by the in-day slots it shares.
pub fn find_conflicts(
    proposed: &BookingOccupancy,
    existing: &[BookingOccupancy],
    granularity: Granularity,
) -> Vec<TimeOfDay> {
    let taken = occupied_slots(existing, granularity);

    proposed
        .slot_offsets(granularity)
        .filter(|m| taken.contains(m))
        .filter_map(TimeOfDay::from_minutes)
        .collect()
}

/// `true` when `proposed` blocks no slot that `existing` already blocks.
pub fn is_conflict_free(
    proposed: &BookingOccupancy,
    existing: &[BookingOccupancy],
    granularity: Granularity,
) -> bool {
    let taken = occupied_slots(existing, granularity);
    !proposed
        .slot_offsets(granularity)
        .any(|m| taken.contains(&m))
}
