//! Schedule accumulation.
//!
//! A schedule is rebuilt from scratch on every selection run; it holds
//! shared references into the catalog rather than copies of course data.

use crate::models::Offering;
use serde::Serialize;
use std::fmt;

/// Accumulates accepted offerings during a selection run.
///
/// The builder answers the admission query (`conflicts_with_schedule`)
/// but does not enforce it: `accept` trusts the caller to have checked
/// first. The selection run is the only producer and always does, which
/// keeps the query and the mutation separable.
#[derive(Debug, Default)]
pub struct ScheduleBuilder<'a> {
    accepted: Vec<&'a Offering>,
}

impl<'a> ScheduleBuilder<'a> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `candidate` conflicts with any already-accepted offering.
    pub fn conflicts_with_schedule(&self, candidate: &Offering) -> bool {
        self.accepted.iter().any(|s| candidate.conflicts_with(s))
    }

    /// Appends an offering. The caller must have verified no conflict.
    pub fn accept(&mut self, offering: &'a Offering) {
        self.accepted.push(offering);
    }

    /// Number of accepted offerings so far.
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    /// Whether nothing has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Freezes the builder into a schedule.
    pub fn into_schedule(self) -> Schedule<'a> {
        Schedule {
            accepted: self.accepted,
        }
    }
}

/// The outcome of a selection run: accepted offerings in acceptance order,
/// at most one per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule<'a> {
    /// Accepted offerings, borrowed from the catalog.
    pub accepted: Vec<&'a Offering>,
}

impl Schedule<'_> {
    /// Number of accepted offerings.
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    /// Whether the run accepted nothing.
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Course numbers in acceptance order.
    pub fn course_numbers(&self) -> Vec<&str> {
        self.accepted.iter().map(|o| o.number.as_str()).collect()
    }
}

impl fmt::Display for Schedule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for offering in &self.accepted {
            write!(f, "{offering}")?;
        }
        Ok(())
    }
}
