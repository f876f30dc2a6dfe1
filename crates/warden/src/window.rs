//! Work-hour window used by attribute-based evaluation.
//!
//! The window is a half-open interval `[start_hour, end_hour)` over the hours
//! of a day. It applies globally; there are no per-user overrides.

use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;
use thiserror::Error;

/// Errors raised when constructing a [`WorkWindow`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// The window is empty or inverted.
    #[error("work window start ({start}) must be before end ({end})")]
    Empty { start: u8, end: u8 },

    /// The end hour lies past midnight.
    #[error("work window end ({0}) must be at most 24")]
    EndOutOfRange(u8),
}

/// Half-open interval of allowed access hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkWindow {
    start_hour: u8,
    end_hour: u8,
}

/// 09:00 (inclusive) to 17:00 (exclusive).
pub const BUSINESS_HOURS: WorkWindow = WorkWindow {
    start_hour: 9,
    end_hour: 17,
};

impl WorkWindow {
    /// Creates a window, rejecting empty, inverted, or past-midnight ranges.
    pub fn new(start_hour: u8, end_hour: u8) -> Result<Self, WindowError> {
        if end_hour > 24 {
            return Err(WindowError::EndOutOfRange(end_hour));
        }
        if start_hour >= end_hour {
            return Err(WindowError::Empty {
                start: start_hour,
                end: end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    /// Returns whether `hour` falls inside `[start_hour, end_hour)`.
    ///
    /// Any hour value is accepted; values outside 0-23 simply fall outside
    /// every valid window.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden::window::BUSINESS_HOURS;
    ///
    /// assert!(BUSINESS_HOURS.contains(9));
    /// assert!(BUSINESS_HOURS.contains(16));
    /// assert!(!BUSINESS_HOURS.contains(17));
    /// assert!(!BUSINESS_HOURS.contains(99));
    /// ```
    pub fn contains(&self, hour: u32) -> bool {
        (u32::from(self.start_hour)..u32::from(self.end_hour)).contains(&hour)
    }
}

impl Default for WorkWindow {
    fn default() -> Self {
        BUSINESS_HOURS
    }
}

/// Returns the UTC hour of day (0-23) for a timestamp.
pub fn hour_of(ts: DateTime<Utc>) -> u32 {
    ts.hour()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    #[test_case(8, false; "before start")]
    #[test_case(9, true; "start inclusive")]
    #[test_case(12, true; "midday")]
    #[test_case(16, true; "last hour")]
    #[test_case(17, false; "end exclusive")]
    #[test_case(20, false; "evening")]
    #[test_case(24, false; "past midnight")]
    #[test_case(u32::MAX, false; "absurd hour")]
    fn test_business_hours(hour: u32, expected: bool) {
        assert_eq!(BUSINESS_HOURS.contains(hour), expected);
    }

    #[test]
    fn test_new_window_validation() {
        assert!(WorkWindow::new(0, 24).is_ok());
        assert_eq!(
            WorkWindow::new(17, 9),
            Err(WindowError::Empty { start: 17, end: 9 })
        );
        assert_eq!(
            WorkWindow::new(9, 9),
            Err(WindowError::Empty { start: 9, end: 9 })
        );
        assert_eq!(WorkWindow::new(9, 25), Err(WindowError::EndOutOfRange(25)));
    }

    #[test]
    fn test_default_is_business_hours() {
        let window = WorkWindow::default();
        assert_eq!(window.start_hour(), 9);
        assert_eq!(window.end_hour(), 17);
    }

    #[test]
    fn test_hour_of_timestamp() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 0).unwrap();
        assert_eq!(hour_of(ts), 10);
    }
}
