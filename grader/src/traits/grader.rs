//! The grading strategy trait.

use crate::error::GraderError;
use crate::result::GradeResult;

/// A scoring strategy for one problem kind.
///
/// Implementations hold their answer key and resolved options; `grade` is
/// pure and deterministic given the envelope, performs no I/O, and never
/// retries. Each call decodes the envelope itself, so the trait stays
/// uniform across problem kinds with different body shapes.
pub trait Grader: Send + Sync {
    /// Scores one raw response envelope.
    fn grade(&self, envelope: &str) -> Result<GradeResult, GraderError>;
}

/// Decorator that layers a flat participation credit on top of any base
/// grader's score, capped at 1.0. Tier and message come from the base
/// result unchanged.
pub struct WithParticipation<G> {
    base: G,
    participation_credit: f64,
}

impl<G> WithParticipation<G> {
    pub fn new(base: G, participation_credit: f64) -> Self {
        Self {
            base,
            participation_credit,
        }
    }
}

impl<G: Grader> Grader for WithParticipation<G> {
    fn grade(&self, envelope: &str) -> Result<GradeResult, GraderError> {
        let base = self.base.grade(envelope)?;
        let grade = (self.participation_credit + base.grade_decimal).min(1.0);
        Ok(GradeResult::new(base.ok, base.msg, grade))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Correctness;

    struct FixedGrader(f64, Correctness);

    impl Grader for FixedGrader {
        fn grade(&self, _envelope: &str) -> Result<GradeResult, GraderError> {
            Ok(GradeResult::new(self.1, "base message", self.0))
        }
    }

    #[test]
    fn participation_credit_is_added_and_capped() {
        let wrapped = WithParticipation::new(FixedGrader(0.5, Correctness::Partial), 0.2);
        let result = wrapped.grade("{}").unwrap();
        assert!((result.grade_decimal - 0.7).abs() < 1e-9);
        assert_eq!(result.ok, Correctness::Partial);
        assert_eq!(result.msg, "base message");

        let wrapped = WithParticipation::new(FixedGrader(0.9, Correctness::Correct), 0.5);
        assert_eq!(wrapped.grade("{}").unwrap().grade_decimal, 1.0);
    }
}
