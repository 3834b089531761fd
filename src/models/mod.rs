//! Scheduling domain models.
//!
//! Core data types for the catalog and the schedule built from it:
//!
//! - `Meeting`: one weekly meeting pattern (day codes + time range)
//! - `Offering`: a course number plus its meetings
//! - `Catalog`: categories mapped to offerings, in insertion order
//! - `ScheduleBuilder` / `Schedule`: accepted offerings, borrowed from the
//!   catalog
//!
//! The catalog is the single owner of offering data; schedules hold shared
//! references into it and are rebuilt from scratch on every selection run.

mod catalog;
mod meeting;
mod offering;
mod schedule;

pub use catalog::Catalog;
pub use meeting::Meeting;
pub use offering::Offering;
pub use schedule::{Schedule, ScheduleBuilder};
