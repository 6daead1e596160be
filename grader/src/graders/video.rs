//! Video watch-time grader.
//!
//! The player samples the playhead position while the video plays. The
//! grader deduplicates and sorts those samples, then walks them
//! accumulating watch segments: a gap of more than three time units closes
//! the current segment, and reaching the second-to-last sample closes the
//! final one (its end is the last sample). The summed segment durations
//! over the video length give the fraction watched. The initial segment
//! start comes from the body's `start_time` until the first sample resets
//! it; that quirk is part of the platform contract.

use crate::codec::{self, VideoBody, coerce_f64};
use crate::error::GraderError;
use crate::result::{Correctness, Cutoffs, GradeResult};
use crate::traits::grader::Grader;
use tracing::warn;
use util::grading_options::VideoOptions;

const CUTOFFS: Cutoffs = Cutoffs::new(0.95, 0.20);

/// Samples further apart than this belong to different watch segments.
const SEGMENT_GAP: f64 = 3.0;

#[derive(Debug, Clone, Default)]
pub struct VideoWatchGrader {
    options: VideoOptions,
}

impl VideoWatchGrader {
    pub fn new(options: VideoOptions) -> Self {
        Self { options }
    }
}

impl Grader for VideoWatchGrader {
    fn grade(&self, envelope: &str) -> Result<GradeResult, GraderError> {
        let body: VideoBody = codec::decode_body(envelope)?;

        let video_length = coerce_f64(&body.video_length)
            .ok_or_else(|| GraderError::MalformedInput("video_length is not numeric".into()))?;
        let mut start_time = coerce_f64(&body.start_time)
            .ok_or_else(|| GraderError::MalformedInput("start_time is not numeric".into()))?;
        let mut watch_times = body
            .watch_times
            .iter()
            .map(|v| {
                coerce_f64(v)
                    .ok_or_else(|| GraderError::MalformedInput("watch time is not numeric".into()))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        watch_times.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        watch_times.dedup();

        if watch_times.len() < 2 {
            warn!(samples = watch_times.len(), "too few playback samples to grade");
            return Ok(GradeResult::new(
                Correctness::Incorrect,
                "Not enough playback data to grade.",
                0.0,
            ));
        }
        if video_length <= 0.0 {
            warn!(video_length, "video length is not positive");
            return Ok(GradeResult::new(
                Correctness::Incorrect,
                "This video has no length configured.",
                0.0,
            ));
        }

        let mut durations: Vec<f64> = Vec::new();
        for ind in 0..watch_times.len() - 1 {
            let this_time = watch_times[ind];
            let next_time = watch_times[ind + 1];

            if ind == watch_times.len() - 2 {
                // The next sample is the last one; close the final segment.
                durations.push(next_time - start_time);
                break;
            } else if next_time - this_time > SEGMENT_GAP {
                durations.push(this_time - start_time);
                start_time = next_time;
            } else if ind == 0 {
                start_time = this_time;
            }
        }

        let total_watch_time: f64 = durations.iter().sum();
        let mut grade = self
            .options
            .grading
            .transform(total_watch_time / video_length);

        // Round up to the nearest tenth.
        grade = (grade * 10.0).ceil() / 10.0;
        grade = grade.min(1.0);

        let message = format!(
            "You watched about {} percent of the video.",
            (grade * 100.0) as i64
        );
        Ok(GradeResult::graded(CUTOFFS, message, grade))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use util::grading_options::Difficulty;

    fn envelope(body: serde_json::Value) -> String {
        json!({ "answer": body.to_string() }).to_string()
    }

    fn watch(times: serde_json::Value, length: f64) -> String {
        envelope(json!({
            "watch_times": times,
            "video_length": length,
            "start_time": 0
        }))
    }

    #[test]
    fn two_segments_split_by_gap() {
        let grader = VideoWatchGrader::default();
        let result = grader
            .grade(&watch(json!([0, 1, 2, 3, 10, 11, 12, 13]), 13.0))
            .unwrap();

        // Segments 0-3 and 10-13: 6 of 13 units, 0.4615 rounded up to 0.5.
        assert!((result.grade_decimal - 0.5).abs() < 1e-9);
        assert_eq!(result.ok, Correctness::Partial);
        assert_eq!(result.msg, "You watched about 50 percent of the video.");
    }

    #[test]
    fn full_watch_scores_full_credit() {
        let grader = VideoWatchGrader::default();
        let result = grader
            .grade(&watch(json!([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]), 10.0))
            .unwrap();
        assert_eq!(result.grade_decimal, 1.0);
        assert_eq!(result.ok, Correctness::Correct);
    }

    #[test]
    fn duplicate_samples_are_ignored() {
        let grader = VideoWatchGrader::default();
        let a = grader.grade(&watch(json!([0, 1, 1, 2, 2, 3, 4]), 10.0)).unwrap();
        let b = grader.grade(&watch(json!([0, 1, 2, 3, 4]), 10.0)).unwrap();
        assert_eq!(a.grade_decimal, b.grade_decimal);
    }

    #[test]
    fn strict_difficulty_squares_the_fraction() {
        let grader = VideoWatchGrader::new(VideoOptions {
            grading: Difficulty::Strict,
        });
        let result = grader.grade(&watch(json!([0, 1, 2, 3, 4, 5]), 10.0)).unwrap();
        // 5/10 watched, squared to 0.25, rounded up to 0.3.
        assert!((result.grade_decimal - 0.3).abs() < 1e-9);
    }

    #[test]
    fn numeric_strings_are_tolerated() {
        let grader = VideoWatchGrader::default();
        let raw = envelope(json!({
            "watch_times": ["0", "1", "2", "3", "4", "5"],
            "video_length": "10",
            "start_time": "0"
        }));
        let result = grader.grade(&raw).unwrap();
        assert!((result.grade_decimal - 0.5).abs() < 1e-9);
    }

    #[test]
    fn single_sample_grades_zero() {
        let grader = VideoWatchGrader::default();
        let result = grader.grade(&watch(json!([4]), 10.0)).unwrap();
        assert_eq!(result.grade_decimal, 0.0);
        assert_eq!(result.ok, Correctness::Incorrect);
        assert!(!result.msg.is_empty());
    }

    #[test]
    fn non_numeric_video_length_is_malformed() {
        let grader = VideoWatchGrader::default();
        let raw = envelope(json!({
            "watch_times": [0, 1],
            "video_length": [],
            "start_time": 0
        }));
        assert!(matches!(
            grader.grade(&raw),
            Err(GraderError::MalformedInput(_))
        ));
    }
}
