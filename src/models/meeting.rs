//! Weekly meeting pattern model.

use crate::clock::ClockTime;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One weekly meeting pattern: a set of day codes plus a half-open time
/// range `[start, end)`.
///
/// Day codes are single characters, one per weekday, in whatever
/// convention the caller uses (`"MWF"`, `"TTH"`). Two meetings share a day
/// iff their code strings share at least one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Single-character weekday codes, e.g. `"MWF"`.
    pub days: String,
    /// Meeting start (inclusive).
    pub start: ClockTime,
    /// Meeting end (exclusive).
    pub end: ClockTime,
}

impl Meeting {
    /// Creates a meeting.
    ///
    /// Fails with `InvalidInterval` unless `start < end`, and with
    /// `EmptyDays` when no day codes are given.
    pub fn new(days: impl Into<String>, start: ClockTime, end: ClockTime) -> Result<Self> {
        let days = days.into();
        if days.is_empty() {
            return Err(Error::EmptyDays);
        }
        if start >= end {
            return Err(Error::InvalidInterval { start, end });
        }
        Ok(Self { days, start, end })
    }

    /// Whether the two meetings share at least one day code.
    pub fn shares_day(&self, other: &Meeting) -> bool {
        self.days.chars().any(|d| other.days.contains(d))
    }

    /// Whether this meeting overlaps `other` in both day and time.
    ///
    /// Time ranges are half-open: a meeting that ends exactly when the
    /// other starts does not conflict.
    pub fn conflicts_with(&self, other: &Meeting) -> bool {
        self.shares_day(other) && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.days, self.start, self.end)
    }
}
