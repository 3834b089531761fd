//! Interactive weekly class schedule builder.
//!
//! Assembles a non-conflicting schedule from manually entered course
//! offerings. Offerings are grouped into categories; a selection run walks
//! the categories in insertion order, offers each compatible candidate to
//! a decision source, and accepts at most one offering per category. Two
//! offerings conflict when any of their weekly meetings share a day and
//! overlap in time (half-open ranges, so back-to-back classes are fine).
//!
//! # Modules
//!
//! - **`models`**: domain types — `Meeting`, `Offering`, `Catalog`,
//!   `ScheduleBuilder`, `Schedule`
//! - **`clock`**: `ClockTime` parsing and formatting (`9:00AM` literals)
//! - **`walk`**: the `DecisionSource` trait and the selection run
//! - **`store`**: line-oriented catalog persistence
//! - **`error`**: crate error type
//!
//! The binary front end supplies a stdin decision source; tests inject
//! scripted closures, so the core never touches a terminal.

pub mod clock;
pub mod error;
pub mod models;
pub mod store;
pub mod walk;

pub use clock::ClockTime;
pub use error::{Error, Result};
pub use models::{Catalog, Meeting, Offering, Schedule, ScheduleBuilder};
pub use walk::{build_schedule, Decision, DecisionSource};
