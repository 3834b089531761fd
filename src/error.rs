//! Crate error type.
//!
//! All errors are local to the operation that raised them: a bad time
//! literal or a malformed store line fails that single add/parse call and
//! leaves in-memory state untouched. A missing catalog file is not an
//! error (it loads as an empty catalog). The selection run itself has no
//! error path; aborting is a normal outcome.

use crate::clock::ClockTime;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Time literal that is not `H:MM` followed by `am`/`pm`.
    #[error("invalid time format {input:?} (expected H:MM followed by am or pm)")]
    InvalidTimeFormat { input: String },

    /// Meeting whose start is not strictly before its end.
    #[error("meeting must start before it ends ({start} >= {end})")]
    InvalidInterval { start: ClockTime, end: ClockTime },

    /// Meeting with no day codes.
    #[error("meeting has no day codes")]
    EmptyDays,

    /// Offering with a blank course number.
    #[error("course number must not be empty")]
    EmptyCourseNumber,

    /// Catalog store line that does not fit the record format.
    #[error("malformed catalog record line {line:?}")]
    MalformedRecord { line: String },

    #[error("catalog store I/O error")]
    Io(#[from] std::io::Error),
}
