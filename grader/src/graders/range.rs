//! Range-guess grader.
//!
//! The learner answers with an interval: a lower and upper guess plus
//! open/closed flags for each endpoint. The key decides the scoring shape:
//!
//! - *Interval* keys score the overlap between the guessed and correct
//!   intervals, optionally penalizing wrong endpoint open/closed flags.
//! - *Point* keys score how far the correct number is from the farther of
//!   the two guessed bounds, against a bracket table: a guess wide enough
//!   to leave a bound far from the answer earns less even if it contains
//!   the answer.

use crate::codec::{self, RangeBody};
use crate::error::GraderError;
use crate::result::{Correctness, Cutoffs, GradeResult};
use crate::round2;
use crate::traits::grader::Grader;
use rand::Rng;
use serde::Serialize;
use tracing::warn;
use util::answer_key::{IntervalEnd, RangeKey};
use util::grading_options::RangeOptions;

const CUTOFFS: Cutoffs = Cutoffs::new(0.95, 0.05);

pub struct RangeGuessGrader {
    key: RangeKey,
    options: RangeOptions,
}

impl RangeGuessGrader {
    pub fn new(key: RangeKey, options: RangeOptions) -> Self {
        Self { key, options }
    }

    fn grade_interval(
        &self,
        body: &RangeBody,
        correct_interval: [f64; 2],
        interval_type: [IntervalEnd; 2],
    ) -> GradeResult {
        let [correct_lower, correct_upper] = correct_interval;

        if body.upperguess < correct_lower || body.lowerguess > correct_upper {
            return self.finish("Answer not in selected range.".to_string(), 0.0);
        }

        let mut endpoints = [correct_lower, correct_upper, body.upperguess, body.lowerguess];
        endpoints.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let overlap = endpoints[2] - endpoints[1];
        let bigrange = (correct_upper - correct_lower).max(body.upperguess - body.lowerguess);
        if bigrange <= 0.0 {
            warn!(bigrange, "degenerate interval, cannot score overlap");
            return self.finish("This problem has no interval width configured.".to_string(), 0.0);
        }

        let mut final_grade = overlap / bigrange;
        // The overlap percentage reported to the learner is the raw ratio,
        // before the difficulty transform.
        let mut message = format!(
            "{}% overlap with correct answer.",
            (round2(final_grade) * 100.0) as i64
        );

        final_grade = self.options.interval_tolerance.transform(final_grade);
        // Round up to the nearest tenth.
        final_grade = (final_grade * 10.0).ceil() / 10.0;

        if self.options.show_open_close {
            let lower_closed_expected = interval_type[0] == IntervalEnd::Closed;
            if body.lowerclosed != lower_closed_expected {
                final_grade -= self.options.type_penalty;
                message.push_str(" Lower endpoint is wrong.");
            }
            let upper_closed_expected = interval_type[1] == IntervalEnd::Closed;
            if body.upperclosed != upper_closed_expected {
                final_grade -= self.options.type_penalty;
                message.push_str(" Upper endpoint is wrong.");
            }
        }

        self.finish(message, final_grade)
    }

    fn grade_point(
        &self,
        body: &RangeBody,
        correct_number: f64,
        tolerance: [f64; 3],
        brackets: [f64; 4],
    ) -> GradeResult {
        let farthest = (correct_number - body.upperguess)
            .abs()
            .max((correct_number - body.lowerguess).abs());

        let (final_grade, mut message) = if farthest < tolerance[0] {
            (
                brackets[0],
                format!("Close enough! Actual answer: {correct_number}"),
            )
        } else if farthest < tolerance[1] {
            (brackets[1], format!("Close. You are off by {farthest}"))
        } else if farthest < tolerance[2] {
            (
                brackets[2],
                format!("Not very close. You are off by {farthest}"),
            )
        } else {
            (
                brackets[3],
                "Your range is too large to get points.".to_string(),
            )
        };

        // Reported independently of the score.
        if body.upperguess > correct_number && body.lowerguess < correct_number {
            message.push_str(" The answer is within your range.");
        } else {
            message.push_str(" The answer is outside your range.");
        }

        self.finish(message, final_grade)
    }

    fn finish(&self, message: String, final_grade: f64) -> GradeResult {
        let message = if self.options.feedback {
            message
        } else {
            String::new()
        };
        GradeResult::graded(CUTOFFS, message, final_grade)
    }
}

impl Grader for RangeGuessGrader {
    fn grade(&self, envelope: &str) -> Result<GradeResult, GraderError> {
        let body: RangeBody = codec::decode_body(envelope)?;

        Ok(match self.key {
            RangeKey::Interval {
                correct_interval,
                interval_type,
            } => self.grade_interval(&body, correct_interval, interval_type),
            RangeKey::Point {
                correct_number,
                tolerance,
                brackets,
            } => self.grade_point(&body, correct_number, tolerance, brackets),
        })
    }
}

/// Outer bounds for the learner-facing slider, randomized so the correct
/// answer's position inside the slider gives nothing away.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SliderBounds {
    pub upper: f64,
    pub lower: f64,
}

/// Picks slider bounds spanning two to four times the key's own scale on
/// each side of the correct answer.
pub fn slider_bounds(key: &RangeKey) -> SliderBounds {
    let mut rng = rand::thread_rng();
    match *key {
        RangeKey::Interval {
            correct_interval, ..
        } => {
            let span = correct_interval[1] - correct_interval[0];
            SliderBounds {
                lower: correct_interval[0] - 2.0 * span * (rng.r#gen::<f64>() + 1.0),
                upper: correct_interval[1] + 2.0 * span * (rng.r#gen::<f64>() + 1.0),
            }
        }
        RangeKey::Point {
            correct_number,
            tolerance,
            ..
        } => {
            let span = tolerance[2];
            SliderBounds {
                lower: correct_number - 2.0 * span * (rng.r#gen::<f64>() + 1.0),
                upper: correct_number + 2.0 * span * (rng.r#gen::<f64>() + 1.0),
            }
        }
    }
}
