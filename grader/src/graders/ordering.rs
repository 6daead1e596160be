//! Ordering problem grader.
//!
//! The learner places item symbols at numbered positions. Sorting the
//! placements by position and concatenating the symbols yields a sequence
//! word, which is scored against every candidate sequence by edit distance:
//! each insertion, deletion, or substitution needed to reach the candidate
//! costs one point out of the candidate's length. A single placed item
//! carries too little information to assess order and always scores zero.

use crate::codec::{self, PairingsBody, Placement};
use crate::edit_distance::levenshtein;
use crate::error::GraderError;
use crate::result::{Correctness, GradeResult};
use crate::round2;
use crate::traits::grader::Grader;
use tracing::{debug, warn};
use util::answer_key::OrderingKey;
use util::grading_options::OrderingOptions;

pub struct OrderingGrader {
    key: OrderingKey,
    options: OrderingOptions,
}

impl OrderingGrader {
    pub fn new(key: OrderingKey, options: OrderingOptions) -> Self {
        Self { key, options }
    }
}

impl Grader for OrderingGrader {
    fn grade(&self, envelope: &str) -> Result<GradeResult, GraderError> {
        let body: PairingsBody<Placement> = codec::decode_body(envelope)?;

        if self.options.all_correct {
            return Ok(GradeResult::new(
                Correctness::Correct,
                "Thank you for your response.",
                1.0,
            ));
        }

        let mut placements = body.pairings;
        placements.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        let answer_word: String = placements.iter().map(|p| p.0.as_str()).collect();

        // Best candidate: score plus the edit delta for the message.
        let mut best: Option<(f64, usize)> = None;
        for candidate in &self.key.candidates {
            let length = candidate.chars().count();
            if length == 0 {
                warn!("skipping empty ordering candidate");
                continue;
            }
            let distance = levenshtein(&answer_word.to_lowercase(), &candidate.to_lowercase());
            let points = length as i64 - distance as i64;
            let score = points as f64 / length as f64;
            debug!(candidate, distance, score, "ordering candidate scored");

            if best.is_none_or(|(s, _)| score > s) {
                best = Some((score, distance));
            }
        }

        let Some((score, delta)) = best else {
            warn!("ordering key has no usable candidates");
            return Ok(GradeResult::new(
                Correctness::Incorrect,
                "This problem has no answer key configured.",
                0.0,
            ));
        };

        let mut final_grade = round2(score).max(0.0);
        let mut message = format!(
            "You are {delta} {} away from the ideal sequence.",
            if delta == 1 { "change" } else { "changes" }
        );

        let mut ok = if final_grade >= 0.9 {
            Correctness::Correct
        } else if final_grade > 0.1 && final_grade < 0.9 && self.options.partial_credit {
            Correctness::Partial
        } else {
            Correctness::Incorrect
        };

        // No points for placing just one item.
        if answer_word.chars().count() == 1 {
            message = "Only one item placed.".to_string();
            final_grade = 0.0;
            ok = Correctness::Incorrect;
        }

        if final_grade == 1.0 {
            message = "This sequence is correct.".to_string();
        }

        if !self.options.feedback {
            message = String::new();
        }

        Ok(GradeResult::new(ok, message, final_grade))
    }
}
