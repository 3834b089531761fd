//! The interactive selection run.
//!
//! Walks the catalog category by category, offering each compatible
//! candidate to a [`DecisionSource`] and accepting at most one offering
//! per category. Candidates that conflict with the schedule built so far
//! are skipped without ever being shown, so the decision source only
//! evaluates trade-offs among currently-compatible options.
//!
//! # Algorithm
//!
//! First-fit greedy, single pass, deterministic: no backtracking across
//! categories and no re-offering of rejected candidates. A category where
//! every offering is rejected or conflicting simply contributes nothing,
//! which is not an error. `Abort` halts the entire run immediately and
//! returns whatever was accepted so far.

use crate::models::{Catalog, Offering, Schedule, ScheduleBuilder};
use tracing::{debug, info};

/// A verdict on one offered candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Take this offering and move on to the next category.
    Accept,
    /// Skip this offering and try the next one in the same category.
    Reject,
    /// Stop the whole run now, keeping what was accepted so far.
    Abort,
}

/// Answers accept/reject/abort for each offered candidate.
///
/// The interactive front end implements this over stdin; tests inject
/// scripted closures (any `FnMut(&str, &Offering) -> Decision` qualifies).
/// The run blocks on each call with no timeout, so the source must always
/// produce a verdict.
pub trait DecisionSource {
    fn decide(&mut self, category: &str, offering: &Offering) -> Decision;
}

impl<F> DecisionSource for F
where
    F: FnMut(&str, &Offering) -> Decision,
{
    fn decide(&mut self, category: &str, offering: &Offering) -> Decision {
        self(category, offering)
    }
}

/// Builds a schedule by walking the catalog in insertion order.
///
/// The returned schedule borrows its offerings from `catalog`. Running
/// twice over the same catalog with the same scripted decisions yields
/// the same schedule.
pub fn build_schedule<'a>(
    catalog: &'a Catalog,
    decisions: &mut dyn DecisionSource,
) -> Schedule<'a> {
    let mut builder = ScheduleBuilder::new();

    for (category, offerings) in catalog.iter() {
        for offering in offerings {
            if builder.conflicts_with_schedule(offering) {
                debug!(category, number = %offering.number, "skipping conflicting offering");
                continue;
            }
            match decisions.decide(category, offering) {
                Decision::Abort => {
                    info!(accepted = builder.len(), "selection run aborted");
                    return builder.into_schedule();
                }
                Decision::Accept => {
                    info!(category, number = %offering.number, "offering accepted");
                    builder.accept(offering);
                    break;
                }
                Decision::Reject => continue,
            }
        }
    }

    builder.into_schedule()
}
