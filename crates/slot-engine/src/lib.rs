//! # slot-engine
//!
//! Deterministic appointment slot availability for salon and booking back-ends.
//!
//! Given a day's bookings (start time plus total booked minutes), the engine
//! quantizes each booking onto a fixed slot grid, rounding durations up so a
//! booking is never under-blocked, and returns the slot starts left free inside
//! the operating window.
//!
//! ```rust
//! use slot_engine::{compute_free_slots, BookingOccupancy, Granularity, OperatingWindow};
//!
//! let booking = BookingOccupancy::new("09:00".parse().unwrap(), 45);
//! let free = compute_free_slots(&[booking], &OperatingWindow::default(), Granularity::default());
//!
//! assert_eq!(free.len(), 23);
//! assert_eq!(free[2].to_string(), "10:00");
//! ```
//!
//! ## Modules
//!
//! - [`time`]: `TimeOfDay` value type (`"HH:MM"`)
//! - [`config`]: granularity, operating window, `SlotConfig`
//! - [`occupancy`]: booking footprints and slot quantization
//! - [`calculator`]: free slots, fitting slots, first fit
//! - [`conflict`]: slot-level overlap between a proposal and existing bookings
//! - [`catalog`]: services and their durations
//! - [`store`]: `BookingStore` trait with in-memory and JSON file backends
//! - [`schedule`]: store-backed free slots, booking and cancellation
//! - [`error`]: Error types

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod conflict;
pub mod error;
pub mod occupancy;
pub mod schedule;
pub mod store;
pub mod time;

pub use calculator::{compute_free_slots, find_first_fit, fitting_slots, universe};
pub use catalog::{Service, ServiceCatalog};
pub use config::{Granularity, OperatingWindow, SlotConfig};
pub use conflict::{find_conflicts, is_conflict_free};
pub use error::SlotError;
pub use occupancy::{block_count, occupied_slots, BookingOccupancy};
pub use schedule::{book, cancel, free_slots_for_date, next_available, BookingRequest};
pub use store::{
    next_booking_id, Booking, BookingStatus, BookingStore, InMemoryBookingStore,
    JsonFileBookingStore,
};
pub use time::TimeOfDay;
