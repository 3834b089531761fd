//! Time-of-day parsing and formatting.
//!
//! Times are stored as minutes after midnight. The external literal format
//! is `H:MM` followed by `am` or `pm` (case-insensitive): hour 1-12,
//! minute 00-59. `12:xxam` maps to hour 0, `12:xxpm` stays hour 12, other
//! `pm` hours add 12. `Display` renders the same shape with an uppercase
//! suffix (`9:00AM`), which parses back to the identical value.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime {
    /// Minutes after midnight, < 1440.
    minutes: u16,
}

impl ClockTime {
    /// Creates a clock time from a 24-hour clock hour (0-23) and minute (0-59).
    pub fn new(hour: u16, minute: u16) -> Self {
        debug_assert!(hour < 24 && minute < 60);
        Self {
            minutes: hour * 60 + minute,
        }
    }

    /// Hour on the 24-hour clock (0-23).
    #[inline]
    pub fn hour(&self) -> u16 {
        self.minutes / 60
    }

    /// Minute within the hour (0-59).
    #[inline]
    pub fn minute(&self) -> u16 {
        self.minutes % 60
    }

    /// Fractional hours after midnight (`12:30pm` -> 12.5).
    #[inline]
    pub fn to_hours(&self) -> f64 {
        f64::from(self.minutes) / 60.0
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidTimeFormat {
            input: s.to_string(),
        };

        let lower = s.trim().to_ascii_lowercase();
        let (digits, pm) = if let Some(rest) = lower.strip_suffix("am") {
            (rest, false)
        } else if let Some(rest) = lower.strip_suffix("pm") {
            (rest, true)
        } else {
            return Err(invalid());
        };

        let (h, m) = digits.split_once(':').ok_or_else(invalid)?;
        let hour = parse_component(h).filter(|h| (1..=12).contains(h));
        let minute = parse_component(m).filter(|v| m.len() == 2 && *v <= 59);
        let (hour, minute) = hour.zip(minute).ok_or_else(invalid)?;

        let hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        Ok(Self::new(hour, minute))
    }
}

/// Parses a bare decimal component, rejecting signs and empty strings.
fn parse_component(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.hour() < 12 { "AM" } else { "PM" };
        let hour = match self.hour() % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{}:{:02}{}", hour, self.minute(), suffix)
    }
}
