//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid slot granularity: {0} minutes (must be positive)")]
    InvalidGranularity(u32),

    #[error("Invalid operating window: opens at {open} but closes at {close}")]
    InvalidWindow { open: String, close: String },

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Booking already exists: {0}")]
    DuplicateBooking(String),

    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    #[error("Slot {start} on {date} is not available for {duration_minutes} minutes")]
    SlotUnavailable {
        date: String,
        start: String,
        duration_minutes: u32,
    },

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage format error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
