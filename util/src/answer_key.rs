//! Answer key schemas.
//!
//! These are the externally-authored descriptions of the correct answer(s)
//! for each problem kind. Keys are plain serde structs so course authors can
//! ship them as JSON alongside the problem definition. Graders treat keys as
//! read-only; a key may carry several acceptable answer variants
//! (candidates), and graders always select the best-scoring candidate.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single item-to-target association inside a matching problem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pairing {
    pub item: String,
    pub target: String,
}

/// Answer key for matching problems.
///
/// Each candidate is one acceptable complete mapping; the learner's pairings
/// are compared order-independently against every candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchingKey {
    pub candidates: Vec<Vec<Pairing>>,
}

/// Answer key for ordering problems.
///
/// Each candidate is an acceptable sequence written as one symbol per item,
/// e.g. `"ABCD"`. Comparison is case-insensitive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderingKey {
    pub candidates: Vec<String>,
}

/// Answer key for pathway (exploration) problems.
///
/// The key is a map of named choice groups, each group mapping a choice id to
/// its point value, plus `final_total`, the cap the summed score is divided
/// by. Scalar entries other than `final_total` are tolerated and ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathwayKey {
    pub final_total: f64,
    #[serde(flatten)]
    pub entries: BTreeMap<String, Value>,
}

impl PathwayKey {
    /// Iterates over the grouped sub-maps of the key, coercing point values
    /// to integers. Non-group entries and unparseable point values are
    /// skipped.
    pub fn point_groups(&self) -> impl Iterator<Item = (&str, Vec<(&str, i64)>)> {
        self.entries.iter().filter_map(|(name, value)| {
            let map = value.as_object()?;
            let choices = map
                .iter()
                .filter_map(|(choice, points)| Some((choice.as_str(), as_points(points)?)))
                .collect();
            Some((name.as_str(), choices))
        })
    }
}

fn as_points(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Whether an interval endpoint is closed (included) or open (excluded).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IntervalEnd {
    Closed,
    Open,
}

/// Answer key for range-guess problems, covering both problem shapes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "problem_type", rename_all = "lowercase")]
pub enum RangeKey {
    /// The correct answer is itself an interval; the learner is scored on
    /// overlap with it.
    Interval {
        /// `[lower, upper]` bounds of the correct interval.
        correct_interval: [f64; 2],
        /// Open/closed status of the `[lower, upper]` endpoints.
        interval_type: [IntervalEnd; 2],
    },
    /// The correct answer is a single number; the learner's guessed bounds
    /// are scored against a bracket table.
    Point {
        correct_number: f64,
        /// Three increasing distance thresholds.
        tolerance: [f64; 3],
        /// Grade awarded per distance band; the last entry applies beyond
        /// the widest tolerance.
        brackets: [f64; 4],
    },
}
