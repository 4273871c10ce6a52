//! Slot configuration: granularity and operating window.
//!
//! [`SlotConfig`] is the serde-facing form (every field has a default, so an
//! empty TOML or JSON document is valid). Validate it into the typed
//! [`OperatingWindow`] and [`Granularity`] before calling the calculator.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::time::TimeOfDay;

pub const DEFAULT_GRANULARITY_MINUTES: u32 = 30;

/// Size of one bookable unit, in minutes. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Granularity(u32);

impl Granularity {
    /// # Errors
    /// Returns `SlotError::InvalidGranularity` for zero, or for a value longer
    /// than a full day.
    pub fn new(minutes: u32) -> Result<Self> {
        if minutes == 0 || minutes > crate::time::MINUTES_PER_DAY {
            return Err(SlotError::InvalidGranularity(minutes));
        }
        Ok(Granularity(minutes))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Granularity(DEFAULT_GRANULARITY_MINUTES)
    }
}

/// Business hours within which slots are generated.
///
/// Both ends are slot starts: the last generated slot begins exactly at
/// `close` when `close` is reachable from `open` in whole steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingWindow {
    open: TimeOfDay,
    close: TimeOfDay,
}

impl OperatingWindow {
    /// # Errors
    /// Returns `SlotError::InvalidWindow` if `open` is after `close`.
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Result<Self> {
        if open > close {
            return Err(SlotError::InvalidWindow {
                open: open.to_string(),
                close: close.to_string(),
            });
        }
        Ok(OperatingWindow { open, close })
    }

    pub fn open(&self) -> TimeOfDay {
        self.open
    }

    pub fn close(&self) -> TimeOfDay {
        self.close
    }

    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.open <= time && time <= self.close
    }
}

/// 08:00–20:00.
impl Default for OperatingWindow {
    fn default() -> Self {
        OperatingWindow {
            open: default_open(),
            close: default_close(),
        }
    }
}

/// Externally tunable slot parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    pub granularity_minutes: u32,
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl Default for SlotConfig {
    fn default() -> Self {
        SlotConfig {
            granularity_minutes: DEFAULT_GRANULARITY_MINUTES,
            open: default_open(),
            close: default_close(),
        }
    }
}

impl SlotConfig {
    pub fn window(&self) -> Result<OperatingWindow> {
        OperatingWindow::new(self.open, self.close)
    }

    pub fn granularity(&self) -> Result<Granularity> {
        Granularity::new(self.granularity_minutes)
    }

    /// Validate both parts at once.
    pub fn validate(&self) -> Result<(OperatingWindow, Granularity)> {
        Ok((self.window()?, self.granularity()?))
    }
}

fn default_open() -> TimeOfDay {
    TimeOfDay::at(8, 0)
}

fn default_close() -> TimeOfDay {
    TimeOfDay::at(20, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_thirty_minutes_eight_to_eight() {
        let (window, granularity) = SlotConfig::default().validate().unwrap();
        assert_eq!(granularity.minutes(), 30);
        assert_eq!(window.open().to_string(), "08:00");
        assert_eq!(window.close().to_string(), "20:00");
        assert_eq!(window, OperatingWindow::default());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config: SlotConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SlotConfig::default());

        let partial: SlotConfig = serde_json::from_str(r#"{"granularity_minutes":15}"#).unwrap();
        assert_eq!(partial.granularity_minutes, 15);
        assert_eq!(partial.open.to_string(), "08:00");
    }

    #[test]
    fn zero_granularity_rejected() {
        assert!(matches!(
            Granularity::new(0),
            Err(SlotError::InvalidGranularity(0))
        ));
    }

    #[test]
    fn inverted_window_rejected() {
        let open = TimeOfDay::new(18, 0).unwrap();
        let close = TimeOfDay::new(9, 0).unwrap();
        assert!(matches!(
            OperatingWindow::new(open, close),
            Err(SlotError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn single_instant_window_is_valid() {
        let t = TimeOfDay::new(12, 0).unwrap();
        let window = OperatingWindow::new(t, t).unwrap();
        assert!(window.contains(t));
    }
}
