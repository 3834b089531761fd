//! Course offering model.

use crate::clock::ClockTime;
use crate::error::{Error, Result};
use crate::models::Meeting;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single course: an identifier plus its weekly meetings.
///
/// Offerings are immutable once placed in a catalog; edits are out of
/// scope (re-add instead).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offering {
    /// Course identifier, e.g. `"MATH 101"`.
    pub number: String,
    /// Weekly meetings, in insertion order.
    pub meetings: Vec<Meeting>,
}

impl Offering {
    /// Creates an offering with no meetings yet.
    ///
    /// Fails with `EmptyCourseNumber` when the identifier is blank.
    pub fn new(number: impl Into<String>) -> Result<Self> {
        let number = number.into();
        if number.trim().is_empty() {
            return Err(Error::EmptyCourseNumber);
        }
        Ok(Self {
            number,
            meetings: Vec::new(),
        })
    }

    /// Appends a meeting.
    ///
    /// Meetings are not de-duplicated or merged; an offering may hold
    /// overlapping meetings without error.
    pub fn add_meeting(
        &mut self,
        days: impl Into<String>,
        start: ClockTime,
        end: ClockTime,
    ) -> Result<()> {
        self.meetings.push(Meeting::new(days, start, end)?);
        Ok(())
    }

    /// Whether any meeting of this offering conflicts with any meeting of
    /// `other`.
    ///
    /// Pairwise scan; offerings hold a handful of meetings at most.
    pub fn conflicts_with(&self, other: &Offering) -> bool {
        self.meetings
            .iter()
            .any(|m| other.meetings.iter().any(|o| m.conflicts_with(o)))
    }
}

impl fmt::Display for Offering {
    /// Renders the display-format block: a `Course N:` header plus one
    /// indented line per meeting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Course {}:", self.number)?;
        for meeting in &self.meetings {
            writeln!(f, "  {meeting}")?;
        }
        Ok(())
    }
}
