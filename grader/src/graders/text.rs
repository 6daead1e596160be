//! Free-text response graders.
//!
//! All three are binary: the grade is 1.0 when every length gate passes and
//! 0.0 otherwise. The single-field grader accepts responses of *at least*
//! `min_length`, while the multi-field grader requires *strictly more than*
//! `min_length` per field; the asymmetry is part of the external contract
//! and must not be unified.

use crate::codec::{self, JournalBody, MultiTextBody, TextBody};
use crate::error::GraderError;
use crate::result::{Correctness, GradeResult};
use crate::traits::grader::Grader;
use util::grading_options::{JournalingOptions, MultiTextOptions, TextOptions};

const ACCEPTED: &str = "Thank you for your response.";
const TOO_SHORT: &str = "Your response is too short. Please try again.";
const ONE_TOO_SHORT: &str = "One of your responses is too short. Please try again.";
const ONE_BLANK: &str = "One of your responses is blank. Please try again.";

/// Grades a single free-text field on scrubbed length, `>= min_length`.
#[derive(Debug, Clone, Default)]
pub struct TextResponseGrader {
    options: TextOptions,
}

impl TextResponseGrader {
    pub fn new(options: TextOptions) -> Self {
        Self { options }
    }
}

impl Grader for TextResponseGrader {
    fn grade(&self, envelope: &str) -> Result<GradeResult, GraderError> {
        let body: TextBody = codec::decode_body(envelope)?;
        let answer = codec::scrub(&body.answer);

        if answer.chars().count() >= self.options.min_length {
            Ok(GradeResult::new(Correctness::Correct, ACCEPTED, 1.0))
        } else {
            Ok(GradeResult::new(Correctness::Incorrect, TOO_SHORT, 0.0))
        }
    }
}

/// Grades several free-text fields at once: every scrubbed field must be
/// strictly longer than `min_length`, and non-empty when `fill_all` is set.
#[derive(Debug, Clone, Default)]
pub struct MultiTextResponseGrader {
    options: MultiTextOptions,
}

impl MultiTextResponseGrader {
    pub fn new(options: MultiTextOptions) -> Self {
        Self { options }
    }
}

impl Grader for MultiTextResponseGrader {
    fn grade(&self, envelope: &str) -> Result<GradeResult, GraderError> {
        let body: MultiTextBody = codec::decode_body(envelope)?;
        let answers: Vec<&str> = body.answers.iter().map(|a| codec::scrub(a)).collect();

        let mut correct = true;
        let mut message = "Your input has been accepted.";

        for answer in &answers {
            if answer.chars().count() <= self.options.min_length {
                correct = false;
                message = ONE_TOO_SHORT;
            }
        }

        // The blank check runs second; its message wins if both gates fail.
        if self.options.fill_all {
            for answer in &answers {
                if answer.is_empty() {
                    correct = false;
                    message = ONE_BLANK;
                }
            }
        }

        if correct {
            Ok(GradeResult::new(Correctness::Correct, message, 1.0))
        } else {
            Ok(GradeResult::new(Correctness::Incorrect, message, 0.0))
        }
    }
}

/// Grades a journaling response on the platform-reported character count
/// rather than the submitted string.
#[derive(Debug, Clone, Default)]
pub struct JournalingGrader {
    options: JournalingOptions,
}

impl JournalingGrader {
    pub fn new(options: JournalingOptions) -> Self {
        Self { options }
    }
}

impl Grader for JournalingGrader {
    fn grade(&self, envelope: &str) -> Result<GradeResult, GraderError> {
        let body: JournalBody = codec::decode_body(envelope)?;

        if body.length >= self.options.min_length {
            Ok(GradeResult::new(Correctness::Correct, ACCEPTED, 1.0))
        } else {
            Ok(GradeResult::new(Correctness::Incorrect, TOO_SHORT, 0.0))
        }
    }
}
