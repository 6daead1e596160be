//! External-survey passthrough grader.
//!
//! The survey tool reports a raw numeric score inside the answer body; the
//! grade is that score divided by the configured survey length. A
//! non-numeric score is an intentional zero-grade fallback, not an error:
//! the survey platform occasionally sends placeholder strings.

use crate::codec::{self, SurveyBody, coerce_f64};
use crate::error::GraderError;
use crate::result::{Correctness, Cutoffs, GradeResult};
use crate::traits::grader::Grader;
use tracing::warn;
use util::grading_options::SurveyOptions;

const CUTOFFS: Cutoffs = Cutoffs::new(0.9, 0.2);

#[derive(Debug, Clone, Default)]
pub struct SurveyGrader {
    options: SurveyOptions,
}

impl SurveyGrader {
    pub fn new(options: SurveyOptions) -> Self {
        Self { options }
    }
}

impl Grader for SurveyGrader {
    fn grade(&self, envelope: &str) -> Result<GradeResult, GraderError> {
        let body: SurveyBody = codec::decode_body(envelope)?;

        let raw_score = match coerce_f64(&body.score) {
            Some(score) => score,
            None => {
                warn!(score = %body.score, "non-numeric survey score, falling back to zero");
                0.0
            }
        };

        if self.options.survey_length <= 0.0 {
            warn!(
                survey_length = self.options.survey_length,
                "survey length is not positive"
            );
            return Ok(GradeResult::new(
                Correctness::Incorrect,
                "This survey has no length configured.",
                0.0,
            ));
        }

        let grade = raw_score / self.options.survey_length;
        Ok(GradeResult::graded(CUTOFFS, "", grade))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(body: serde_json::Value) -> String {
        json!({ "answer": body.to_string() }).to_string()
    }

    #[test]
    fn divides_score_by_survey_length() {
        let grader = SurveyGrader::new(SurveyOptions { survey_length: 10.0 });
        let result = grader.grade(&envelope(json!({"score": 5}))).unwrap();
        assert!((result.grade_decimal - 0.5).abs() < 1e-9);
        assert_eq!(result.ok, Correctness::Partial);
        assert_eq!(result.msg, "");
    }

    #[test]
    fn full_credit_above_ninety_percent() {
        let grader = SurveyGrader::new(SurveyOptions { survey_length: 10.0 });
        let result = grader.grade(&envelope(json!({"score": "9.5"}))).unwrap();
        assert_eq!(result.ok, Correctness::Correct);
    }

    #[test]
    fn non_numeric_score_falls_back_to_zero() {
        let grader = SurveyGrader::default();
        let result = grader
            .grade(&envelope(json!({"score": "incomplete"})))
            .unwrap();
        assert_eq!(result.grade_decimal, 0.0);
        assert_eq!(result.ok, Correctness::Incorrect);
    }

    #[test]
    fn zero_survey_length_grades_zero_with_message() {
        let grader = SurveyGrader::new(SurveyOptions { survey_length: 0.0 });
        let result = grader.grade(&envelope(json!({"score": 3}))).unwrap();
        assert_eq!(result.grade_decimal, 0.0);
        assert!(!result.msg.is_empty());
    }

    #[test]
    fn grade_is_capped_at_one() {
        let grader = SurveyGrader::new(SurveyOptions { survey_length: 2.0 });
        let result = grader.grade(&envelope(json!({"score": 5}))).unwrap();
        assert_eq!(result.grade_decimal, 1.0);
        assert_eq!(result.ok, Correctness::Correct);
    }
}
