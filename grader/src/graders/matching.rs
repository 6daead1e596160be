//! Matching problem grader.
//!
//! The learner pairs items with targets; the key lists one or more
//! acceptable complete mappings. Binary mode awards full credit only when
//! the learner's pairing set equals a candidate set order-independently.
//! Partial-credit mode scores each candidate as
//! `(matched - wrong) / candidate size` and keeps the best.

use crate::codec::{self, PairingsBody};
use crate::error::GraderError;
use crate::result::{Correctness, GradeResult};
use crate::round2;
use crate::traits::grader::Grader;
use tracing::{debug, warn};
use util::answer_key::{MatchingKey, Pairing};
use util::grading_options::MatchingOptions;

pub struct MatchingGrader {
    key: MatchingKey,
    options: MatchingOptions,
}

impl MatchingGrader {
    pub fn new(key: MatchingKey, options: MatchingOptions) -> Self {
        Self { key, options }
    }

    fn grade_binary(&self, pairings: &[Pairing]) -> GradeResult {
        let mut answer = pairings.to_vec();
        answer.sort();

        let is_right = self.key.candidates.iter().any(|candidate| {
            let mut candidate = candidate.clone();
            candidate.sort();
            candidate == answer
        });

        if is_right {
            GradeResult::new(Correctness::Correct, "", 1.0)
        } else {
            GradeResult::new(Correctness::Incorrect, "", 0.0)
        }
    }

    fn grade_partial(&self, pairings: &[Pairing]) -> GradeResult {
        // Best candidate: score, then (matched, wrong, size) for the message.
        let mut best: Option<(f64, usize, usize, usize)> = None;

        for candidate in &self.key.candidates {
            if candidate.is_empty() {
                warn!("skipping empty matching candidate");
                continue;
            }
            let matched = pairings
                .iter()
                .filter(|p| candidate.contains(p))
                .count();
            let wrong = pairings.len() - matched;
            let score = (matched as f64 - wrong as f64) / candidate.len() as f64;
            debug!(matched, wrong, size = candidate.len(), score, "matching candidate scored");

            if best.is_none_or(|(s, ..)| score > s) {
                best = Some((score, matched, wrong, candidate.len()));
            }
        }

        let Some((score, matched, wrong, size)) = best else {
            warn!("matching key has no usable candidates");
            return GradeResult::new(
                Correctness::Incorrect,
                "This problem has no answer key configured.",
                0.0,
            );
        };

        let final_grade = round2(score).max(0.0);
        let ok = if final_grade >= 0.9 {
            Correctness::Correct
        } else if final_grade > 0.1 && final_grade < 0.9 {
            Correctness::Partial
        } else {
            Correctness::Incorrect
        };

        let message = if self.options.feedback {
            format!("{matched} correct out of {size}, {wrong} wrong.")
        } else {
            String::new()
        };
        GradeResult::new(ok, message, final_grade)
    }
}

impl Grader for MatchingGrader {
    fn grade(&self, envelope: &str) -> Result<GradeResult, GraderError> {
        let body: PairingsBody<Pairing> = codec::decode_body(envelope)?;

        if self.options.partial_credit {
            Ok(self.grade_partial(&body.pairings))
        } else {
            Ok(self.grade_binary(&body.pairings))
        }
    }
}
