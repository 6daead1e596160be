//! Exploration pathway grader.
//!
//! The learner opens and closes choice boxes inside named groups; the key
//! assigns each choice a point value. Positive points are taken as the best
//! choice per group (currently open, or ever opened in exploration mode);
//! negative points from ever-opened choices always subtract while
//! `retain_negative` is set. Unlike the other graders, pathway results are
//! returned to the platform bare, without the `input_list` wrapper.

use crate::codec::{self, PathwayBody};
use crate::error::GraderError;
use crate::result::{Correctness, Cutoffs, GradeResult};
use crate::traits::grader::Grader;
use tracing::warn;
use util::answer_key::PathwayKey;
use util::grading_options::{PathwayMode, PathwayOptions};

const CUTOFFS: Cutoffs = Cutoffs::new(0.7, 0.2);

pub struct PathwayGrader {
    key: PathwayKey,
    options: PathwayOptions,
}

impl PathwayGrader {
    pub fn new(key: PathwayKey, options: PathwayOptions) -> Self {
        Self { key, options }
    }
}

impl Grader for PathwayGrader {
    fn grade(&self, envelope: &str) -> Result<GradeResult, GraderError> {
        let body: PathwayBody = codec::decode_body(envelope)?;

        let mut total_score: i64 = 0;
        let mut number_groups: usize = 0;

        for (_, choices) in self.key.point_groups() {
            number_groups += 1;
            let mut minus_points: i64 = 0;
            let mut plus_points: i64 = 0;

            for (choice, points) in choices {
                let choice = choice.to_string();
                if points < 0
                    && self.options.retain_negative
                    && body.ever_opened.contains(&choice)
                {
                    minus_points += points;
                }
                let opened = match self.options.grade_on {
                    PathwayMode::Exploration => body.ever_opened.contains(&choice),
                    _ => body.currently_open.contains(&choice),
                };
                if points > 0 && opened {
                    plus_points = plus_points.max(points);
                }
            }

            total_score += plus_points + minus_points;
        }

        let message = if self.options.show_points {
            format!(
                "Saved Score: {} points out of {}",
                total_score, self.key.final_total
            )
        } else {
            String::new()
        };

        let grade_decimal = match self.options.grade_on {
            PathwayMode::Score | PathwayMode::Exploration => {
                if self.key.final_total <= 0.0 {
                    warn!(final_total = self.key.final_total, "pathway key has no total points");
                    return Ok(GradeResult::new(
                        Correctness::Incorrect,
                        "This problem has no points configured.",
                        0.0,
                    ));
                }
                // Median-of-three clamp in the original; `graded` clamps.
                total_score as f64 / self.key.final_total
            }
            PathwayMode::Participation => {
                if number_groups == 0 {
                    warn!("pathway key has no choice groups");
                    return Ok(GradeResult::new(
                        Correctness::Incorrect,
                        "This problem has no choice groups configured.",
                        0.0,
                    ));
                }
                body.currently_open.len() as f64 / number_groups as f64
            }
        };

        Ok(GradeResult::graded(CUTOFFS, message, grade_decimal))
    }
}
