//! Grader error types.
//!
//! A grading call either produces a [`crate::result::GradeResult`] or fails
//! terminally with one of these errors; the grader never retries. Conditions
//! with a documented fallback (a non-numeric survey score, a zero
//! denominator) are *not* errors: they grade as zero with an explanatory
//! message instead.

use thiserror::Error;

/// All error types a grading call can fail with.
#[derive(Debug, Error)]
pub enum GraderError {
    /// The response envelope or its inner answer body could not be decoded
    /// into the expected shape.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// An option value is outside its valid domain and has no documented
    /// fallback.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
