//! Grade results and the platform response envelope.
//!
//! A grading call produces exactly one [`GradeResult`]: a correctness tier,
//! a feedback message, and a decimal grade clamped into `[0, 1]`. Most
//! problem kinds are returned to the platform wrapped in the historical
//! one-element [`InputListResponse`]; pathway results are returned bare.
//! The tier cutoffs differ per grader, so [`Cutoffs`] is a per-call-site
//! parameter rather than a single global policy.

use serde::{Serialize, Serializer};

/// The three correctness tiers.
///
/// On the wire this serializes to the platform's historical `ok` values:
/// `true`, `false`, or the string `"Partial"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correctness {
    Correct,
    Partial,
    Incorrect,
}

impl Serialize for Correctness {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Correctness::Correct => serializer.serialize_bool(true),
            Correctness::Partial => serializer.serialize_str("Partial"),
            Correctness::Incorrect => serializer.serialize_bool(false),
        }
    }
}

/// Tier cutoffs for graders whose policy is "strictly above `full` is
/// correct, strictly above `partial` is partial credit".
///
/// Graders with a `>=`-at-full policy (matching, ordering) compute their
/// tier inline instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutoffs {
    pub full: f64,
    pub partial: f64,
}

impl Cutoffs {
    pub const fn new(full: f64, partial: f64) -> Self {
        Self { full, partial }
    }

    pub fn apply(self, grade: f64) -> Correctness {
        if grade > self.full {
            Correctness::Correct
        } else if grade > self.partial {
            Correctness::Partial
        } else {
            Correctness::Incorrect
        }
    }
}

/// The outcome of one grading call. Constructed once and never mutated.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GradeResult {
    pub ok: Correctness,
    pub msg: String,
    pub grade_decimal: f64,
}

impl GradeResult {
    /// Builds a result, clamping the grade into `[0, 1]`.
    pub fn new(ok: Correctness, msg: impl Into<String>, grade_decimal: f64) -> Self {
        Self {
            ok,
            msg: msg.into(),
            grade_decimal: grade_decimal.clamp(0.0, 1.0),
        }
    }

    /// Builds a result whose tier is derived from `cutoffs` applied to the
    /// clamped grade.
    pub fn graded(cutoffs: Cutoffs, msg: impl Into<String>, grade_decimal: f64) -> Self {
        let grade = grade_decimal.clamp(0.0, 1.0);
        Self {
            ok: cutoffs.apply(grade),
            msg: msg.into(),
            grade_decimal: grade,
        }
    }

    /// Wraps the result in the platform's one-element list framing.
    pub fn into_input_list(self) -> InputListResponse {
        self.into()
    }
}

/// The response shape most problem kinds hand back to the platform: a list
/// holding a single grade result, keyed by input index.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InputListResponse {
    pub input_list: Vec<GradeResult>,
}

impl From<GradeResult> for InputListResponse {
    fn from(result: GradeResult) -> Self {
        Self {
            input_list: vec![result],
        }
    }
}
