//! # Grading Engine
//!
//! This crate provides the core logic for scoring learner responses
//! delivered by an external assessment platform. It decodes the platform's
//! doubly-encoded answer envelopes, resolves per-grader options over
//! documented defaults, scores the decoded answer against an
//! externally-authored answer key, and returns a clamped grade with a
//! correctness tier and feedback message.
//!
//! ## Key Concepts
//! - **Grader**: a pluggable scoring strategy, one per problem kind; see
//!   [`traits::grader::Grader`] and the [`graders`] module.
//! - **Problem**: a tagged variant over every grader for uniform dispatch.
//! - **GradeResult**: the per-call outcome; most kinds are wrapped in the
//!   platform's one-element `input_list` framing.
//!
//! Every grading call is a synchronous, bounded, side-effect-free
//! computation: no files, sockets, or shared state are touched.

pub mod codec;
pub mod edit_distance;
pub mod error;
pub mod graders;
pub mod result;
pub mod traits;

pub use error::GraderError;
pub use result::{Correctness, Cutoffs, GradeResult, InputListResponse};
pub use traits::grader::{Grader, WithParticipation};

use graders::matching::MatchingGrader;
use graders::ordering::OrderingGrader;
use graders::pathway::PathwayGrader;
use graders::range::RangeGuessGrader;
use graders::survey::SurveyGrader;
use graders::text::{JournalingGrader, MultiTextResponseGrader, TextResponseGrader};
use graders::video::VideoWatchGrader;

/// Round a float to two decimal places in an efficient manner.
///
/// Uses the common multiply / round / divide trick. Kept local to this crate
/// so it's cheap to inline and obvious where rounding is happening.
#[inline]
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Every problem kind the engine can score, as one dispatchable value.
///
/// Each variant holds a fully-configured grader (answer key plus resolved
/// options); the enum itself implements [`Grader`] by delegation, so hosts
/// can hold a heterogeneous table of problems and grade uniformly.
pub enum Problem {
    Text(TextResponseGrader),
    MultiText(MultiTextResponseGrader),
    Journaling(JournalingGrader),
    Pathway(PathwayGrader),
    Survey(SurveyGrader),
    Video(VideoWatchGrader),
    Matching(MatchingGrader),
    Ordering(OrderingGrader),
    RangeGuess(RangeGuessGrader),
}

impl Grader for Problem {
    fn grade(&self, envelope: &str) -> Result<GradeResult, GraderError> {
        match self {
            Problem::Text(g) => g.grade(envelope),
            Problem::MultiText(g) => g.grade(envelope),
            Problem::Journaling(g) => g.grade(envelope),
            Problem::Pathway(g) => g.grade(envelope),
            Problem::Survey(g) => g.grade(envelope),
            Problem::Video(g) => g.grade(envelope),
            Problem::Matching(g) => g.grade(envelope),
            Problem::Ordering(g) => g.grade(envelope),
            Problem::RangeGuess(g) => g.grade(envelope),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use util::answer_key::OrderingKey;
    use util::grading_options::{OrderingOptions, TextOptions};

    fn envelope(body: serde_json::Value) -> String {
        json!({ "answer": body.to_string() }).to_string()
    }

    #[test]
    fn problem_dispatch_reaches_the_right_grader() {
        let problems = vec![
            Problem::Text(TextResponseGrader::new(TextOptions { min_length: 3 })),
            Problem::Ordering(OrderingGrader::new(
                OrderingKey {
                    candidates: vec!["AB".to_string()],
                },
                OrderingOptions::default(),
            )),
        ];

        let text = envelope(json!({"answer": "a fine answer"}));
        let ordering = envelope(json!({"pairings": [["a", 1], ["b", 2]]}));

        let result = problems[0].grade(&text).unwrap();
        assert_eq!(result.grade_decimal, 1.0);

        let result = problems[1].grade(&ordering).unwrap();
        assert_eq!(result.grade_decimal, 1.0);
        assert_eq!(result.msg, "This sequence is correct.");
    }

    #[test]
    fn grading_is_deterministic_across_repeat_calls() {
        let problem = Problem::Text(TextResponseGrader::new(TextOptions { min_length: 5 }));
        let raw = envelope(json!({"answer": "steady"}));
        let first = problem.grade(&raw).unwrap();
        let second = problem.grade(&raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn round2_rounds_half_up_at_two_decimals() {
        assert_eq!(round2(0.666_666), 0.67);
        assert_eq!(round2(0.5), 0.5);
        assert_eq!(round2(-0.004), -0.0);
    }
}
