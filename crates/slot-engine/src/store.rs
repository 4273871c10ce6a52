//! Booking persistence behind a single [`BookingStore`] trait.
//!
//! [`JsonFileBookingStore`] is the persistent backend: one JSON data file
//! holding both the service catalog and the bookings. [`InMemoryBookingStore`]
//! keeps everything in a `Vec` and is what tests and the WASM bindings use.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{Service, ServiceCatalog};
use crate::error::{Result, SlotError};
use crate::occupancy::BookingOccupancy;
use crate::time::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Scheduled,
    Completed,
    /// Cancelled bookings stay on record but free their slots.
    Cancelled,
}

/// A stored appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub client: String,
    pub date: NaiveDate,
    pub start: TimeOfDay,
    pub service_ids: Vec<String>,
    #[serde(default)]
    pub status: BookingStatus,
}

impl Booking {
    /// Footprint of this booking: its start and the summed duration of its services.
    pub fn occupancy(&self, catalog: &ServiceCatalog) -> Result<BookingOccupancy> {
        let total = catalog.total_duration(self.service_ids.as_slice())?;
        Ok(BookingOccupancy::new(self.start, total))
    }

    pub fn blocks_slots(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }
}

pub trait BookingStore {
    /// Every booking on `date`, any status, ordered by start time.
    fn bookings_for_date(&self, date: NaiveDate) -> Result<Vec<Booking>>;

    /// # Errors
    /// `SlotError::DuplicateBooking` if a booking with the same id exists.
    fn insert(&mut self, booking: Booking) -> Result<()>;

    /// # Errors
    /// `SlotError::BookingNotFound` if no booking has this id.
    fn set_status(&mut self, id: &str, status: BookingStatus) -> Result<()>;

    /// Whether a booking with this id exists.
    fn contains(&self, id: &str) -> bool;

    /// Occupancies of the non-cancelled bookings on `date`.
    fn occupancy_for_date(
        &self,
        date: NaiveDate,
        catalog: &ServiceCatalog,
    ) -> Result<Vec<BookingOccupancy>> {
        self.bookings_for_date(date)?
            .iter()
            .filter(|b| b.blocks_slots())
            .map(|b| b.occupancy(catalog))
            .collect()
    }
}

/// Next `bk-NNNN` id not yet used in `store`.
pub fn next_booking_id<S: BookingStore + ?Sized>(store: &S) -> String {
    (1u32..)
        .map(|n| format!("bk-{:04}", n))
        .find(|id| !store.contains(id))
        .unwrap_or_else(|| "bk-overflow".to_string())
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingStore {
    bookings: Vec<Booking>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }
}

impl BookingStore for InMemoryBookingStore {
    fn bookings_for_date(&self, date: NaiveDate) -> Result<Vec<Booking>> {
        let mut found: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|b| b.date == date)
            .cloned()
            .collect();
        found.sort_by_key(|b| b.start);
        Ok(found)
    }

    fn insert(&mut self, booking: Booking) -> Result<()> {
        if self.contains(&booking.id) {
            return Err(SlotError::DuplicateBooking(booking.id));
        }
        debug!(id = %booking.id, date = %booking.date, start = %booking.start, "inserting booking");
        self.bookings.push(booking);
        Ok(())
    }

    fn set_status(&mut self, id: &str, status: BookingStatus) -> Result<()> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| SlotError::BookingNotFound(id.to_string()))?;
        booking.status = status;
        Ok(())
    }

    fn contains(&self, id: &str) -> bool {
        self.bookings.iter().any(|b| b.id == id)
    }
}

/// On-disk layout of the JSON data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalonData {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// A booking store persisted to a single JSON file.
///
/// The whole file is loaded on open and rewritten after each mutation.
#[derive(Debug)]
pub struct JsonFileBookingStore {
    path: PathBuf,
    catalog: ServiceCatalog,
    inner: InMemoryBookingStore,
}

impl JsonFileBookingStore {
    /// Load the data file at `path`. A missing file opens as an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data: SalonData = if path.exists() {
            let text = fs::read_to_string(&path)?;
            serde_json::from_str(&text)?
        } else {
            info!(path = %path.display(), "data file not found, starting empty");
            SalonData::default()
        };

        debug!(
            path = %path.display(),
            services = data.services.len(),
            bookings = data.bookings.len(),
            "opened booking store"
        );

        Ok(Self {
            path,
            catalog: ServiceCatalog::new(data.services),
            inner: InMemoryBookingStore::with_bookings(data.bookings),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    /// Write `staged` to disk via a sibling temp file and rename, then adopt it.
    ///
    /// On any failure the in-memory state is left as it was before the mutation
    /// and the temp file is removed.
    fn commit(&mut self, staged: InMemoryBookingStore) -> Result<()> {
        let data = SalonData {
            services: self.catalog.services().to_vec(),
            bookings: staged.bookings().to_vec(),
        };
        let json = serde_json::to_string_pretty(&data)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        if let Err(e) = fs::write(&tmp, json).and_then(|()| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        self.inner = staged;
        debug!(path = %self.path.display(), "flushed booking store");
        Ok(())
    }
}

impl BookingStore for JsonFileBookingStore {
    fn bookings_for_date(&self, date: NaiveDate) -> Result<Vec<Booking>> {
        self.inner.bookings_for_date(date)
    }

    fn insert(&mut self, booking: Booking) -> Result<()> {
        let mut staged = self.inner.clone();
        staged.insert(booking)?;
        self.commit(staged)
    }

    fn set_status(&mut self, id: &str, status: BookingStatus) -> Result<()> {
        let mut staged = self.inner.clone();
        staged.set_status(id, status)?;
        self.commit(staged)
    }

    fn contains(&self, id: &str) -> bool {
        self.inner.contains(id)
    }
}
