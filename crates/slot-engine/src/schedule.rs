//! Store-backed scheduling operations.
//!
//! Glues a [`BookingStore`] and a [`ServiceCatalog`] to the pure calculator:
//! fetch the day's occupancies, then compute. The calculator itself never
//! sees the store.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::calculator::{compute_free_slots, fitting_slots};
use crate::catalog::ServiceCatalog;
use crate::config::SlotConfig;
use crate::error::{Result, SlotError};
use crate::store::{Booking, BookingStatus, BookingStore};
use crate::time::TimeOfDay;

/// A request to book `service_ids` for `client` at `start` on `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub id: String,
    pub client: String,
    pub date: NaiveDate,
    pub start: TimeOfDay,
    pub service_ids: Vec<String>,
}

/// Free slot starts on `date`.
pub fn free_slots_for_date<S: BookingStore + ?Sized>(
    store: &S,
    catalog: &ServiceCatalog,
    date: NaiveDate,
    config: &SlotConfig,
) -> Result<Vec<TimeOfDay>> {
    let (window, granularity) = config.validate()?;
    let occupancy = store.occupancy_for_date(date, catalog)?;
    debug!(%date, bookings = occupancy.len(), "loaded occupancy");
    Ok(compute_free_slots(&occupancy, &window, granularity))
}

/// Earliest start on `date` with room for all of `service_ids` back to back.
pub fn next_available<S: BookingStore + ?Sized>(
    store: &S,
    catalog: &ServiceCatalog,
    date: NaiveDate,
    service_ids: &[String],
    config: &SlotConfig,
) -> Result<Option<TimeOfDay>> {
    let (window, granularity) = config.validate()?;
    let duration = catalog.total_duration(service_ids)?;
    let occupancy = store.occupancy_for_date(date, catalog)?;
    Ok(fitting_slots(&occupancy, &window, granularity, duration)
        .into_iter()
        .next())
}

/// Validate that the requested start fits the day's free slots, then store it.
///
/// # Errors
/// - `SlotError::UnknownService` if any requested service is not in the catalog.
/// - `SlotError::SlotUnavailable` if the request's slots are not all free.
/// - `SlotError::DuplicateBooking` if the id is already taken.
pub fn book<S: BookingStore + ?Sized>(
    store: &mut S,
    catalog: &ServiceCatalog,
    request: BookingRequest,
    config: &SlotConfig,
) -> Result<Booking> {
    let (window, granularity) = config.validate()?;
    let duration = catalog.total_duration(request.service_ids.as_slice())?;
    let occupancy = store.occupancy_for_date(request.date, catalog)?;

    let candidates = fitting_slots(&occupancy, &window, granularity, duration);
    if !candidates.contains(&request.start) {
        return Err(SlotError::SlotUnavailable {
            date: request.date.to_string(),
            start: request.start.to_string(),
            duration_minutes: duration,
        });
    }

    let booking = Booking {
        id: request.id,
        client: request.client,
        date: request.date,
        start: request.start,
        service_ids: request.service_ids,
        status: BookingStatus::Scheduled,
    };
    store.insert(booking.clone())?;

    info!(
        id = %booking.id,
        date = %booking.date,
        start = %booking.start,
        duration_minutes = duration,
        "booked"
    );
    Ok(booking)
}

/// Mark a booking cancelled, releasing its slots.
pub fn cancel<S: BookingStore + ?Sized>(store: &mut S, id: &str) -> Result<()> {
    store.set_status(id, BookingStatus::Cancelled)?;
    info!(%id, "cancelled");
    Ok(())
}
