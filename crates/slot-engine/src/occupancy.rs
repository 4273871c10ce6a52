//! Booking footprints and their quantization into occupied slots.
//!
//! A booking blocks `ceil(duration / granularity)` consecutive slots starting
//! at its start time. Occupied positions are minute offsets from midnight and
//! stop at 24:00: a late booking never wraps onto morning slots, and the work
//! done per booking is bounded by the length of a day, not its duration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::Granularity;
use crate::time::{TimeOfDay, MINUTES_PER_DAY};

/// One existing appointment's footprint on a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingOccupancy {
    pub start: TimeOfDay,
    pub total_duration_minutes: u32,
}

impl BookingOccupancy {
    pub fn new(start: TimeOfDay, total_duration_minutes: u32) -> Self {
        Self {
            start,
            total_duration_minutes,
        }
    }

    /// Build from a signed duration, clamping negatives to zero.
    pub fn from_signed(start: TimeOfDay, total_duration_minutes: i64) -> Self {
        let minutes = total_duration_minutes.clamp(0, i64::from(u32::MAX)) as u32;
        Self::new(start, minutes)
    }

    /// Minute offsets (from midnight) of the slots this booking blocks before 24:00.
    pub fn slot_offsets(&self, granularity: Granularity) -> impl Iterator<Item = u32> {
        let step = granularity.minutes();
        let start = self.start.minutes();
        (0..block_count(self.total_duration_minutes, granularity))
            .map(move |i| start.saturating_add(i.saturating_mul(step)))
            .take_while(|m| *m < MINUTES_PER_DAY)
    }
}

/// Number of slots a booking of `duration_minutes` blocks: the duration rounded
/// up to whole slots. Zero minutes blocks nothing.
pub fn block_count(duration_minutes: u32, granularity: Granularity) -> u32 {
    duration_minutes.div_ceil(granularity.minutes())
}

/// Union of every booking's occupied slot offsets.
///
/// Offsets are not clipped to any window. Overlapping bookings collapse into
/// a single entry per slot.
pub fn occupied_slots(bookings: &[BookingOccupancy], granularity: Granularity) -> BTreeSet<u32> {
    bookings
        .iter()
        .flat_map(|b| b.slot_offsets(granularity))
        .collect()
}
