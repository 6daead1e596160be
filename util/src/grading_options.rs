//! Per-grader option tables.
//!
//! Every grader declares a fixed set of options with documented defaults.
//! Callers override them by supplying a partial JSON object; [`resolve`]
//! deserializes that object into a fully-populated options value, filling
//! every absent key from the defaults. The defaults live in code (the
//! `default_*` free functions below), so there is no shared mutable table
//! and nothing one call sets can leak into the next. Unknown keys in the
//! caller's object are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Builds a fresh options value from an optional partial override object.
///
/// Absent keys fall back to the grader's defaults; `None` yields the plain
/// default table.
pub fn resolve<T>(overrides: Option<&Value>) -> Result<T, serde_json::Error>
where
    T: serde::de::DeserializeOwned + Default,
{
    match overrides {
        Some(value) => serde_json::from_value(value.clone()),
        None => Ok(T::default()),
    }
}

/// How forgiving a fraction-based grade is.
///
/// `strict` squares the raw fraction, `generous` takes its square root, and
/// the default leaves it unchanged.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Default,
    Strict,
    Generous,
}

impl Difficulty {
    pub fn transform(self, raw: f64) -> f64 {
        match self {
            Difficulty::Default => raw,
            Difficulty::Strict => raw * raw,
            Difficulty::Generous => raw.sqrt(),
        }
    }
}

/// Options for the single-field free-text grader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextOptions {
    /// Responses at least this long (after scrubbing) are accepted.
    #[serde(default = "default_text_min_length")]
    pub min_length: usize,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            min_length: default_text_min_length(),
        }
    }
}

/// Options for the multi-field free-text grader.
///
/// Note the length gate here is strict (`len > min_length`), unlike the
/// single-field grader's `len >= min_length`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultiTextOptions {
    #[serde(default)]
    pub min_length: usize,
    /// Require every field to be non-empty.
    #[serde(default)]
    pub fill_all: bool,
}

/// Options for the journaling grader, which gates on the platform-reported
/// response length rather than the string itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalingOptions {
    #[serde(default = "default_journal_min_length")]
    pub min_length: u64,
}

impl Default for JournalingOptions {
    fn default() -> Self {
        Self {
            min_length: default_journal_min_length(),
        }
    }
}

/// What a pathway problem is graded on.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PathwayMode {
    /// Points from currently-open choices.
    #[default]
    Score,
    /// Points from every choice ever opened.
    Exploration,
    /// Fraction of groups with a choice currently open.
    Participation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathwayOptions {
    /// Include the raw point tally in the feedback message.
    #[serde(default = "default_true")]
    pub show_points: bool,
    #[serde(default)]
    pub grade_on: PathwayMode,
    /// Subtract negative points for choices the learner ever opened.
    #[serde(default = "default_true")]
    pub retain_negative: bool,
}

impl Default for PathwayOptions {
    fn default() -> Self {
        Self {
            show_points: default_true(),
            grade_on: PathwayMode::default(),
            retain_negative: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurveyOptions {
    /// The score the external survey reports is divided by this length.
    #[serde(default = "default_survey_length")]
    pub survey_length: f64,
}

impl Default for SurveyOptions {
    fn default() -> Self {
        Self {
            survey_length: default_survey_length(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoOptions {
    #[serde(default)]
    pub grading: Difficulty,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchingOptions {
    /// Score `(matched - wrong) / candidate size` instead of all-or-nothing.
    #[serde(default)]
    pub partial_credit: bool,
    /// When false, the feedback message is blanked.
    #[serde(default = "default_true")]
    pub feedback: bool,
}

impl Default for MatchingOptions {
    fn default() -> Self {
        Self {
            partial_credit: false,
            feedback: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderingOptions {
    #[serde(default = "default_true")]
    pub partial_credit: bool,
    #[serde(default = "default_true")]
    pub feedback: bool,
    /// Accept any response with full credit (participation-style problems).
    #[serde(default)]
    pub all_correct: bool,
}

impl Default for OrderingOptions {
    fn default() -> Self {
        Self {
            partial_credit: default_true(),
            feedback: default_true(),
            all_correct: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeOptions {
    /// Transform applied to the raw overlap fraction in interval mode.
    #[serde(default)]
    pub interval_tolerance: Difficulty,
    /// Check the learner's open/closed endpoint flags against the key.
    #[serde(default)]
    pub show_open_close: bool,
    /// Grade deducted once per endpoint whose open/closed status is wrong.
    #[serde(default = "default_type_penalty")]
    pub type_penalty: f64,
    #[serde(default = "default_true")]
    pub feedback: bool,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            interval_tolerance: Difficulty::default(),
            show_open_close: false,
            type_penalty: default_type_penalty(),
            feedback: default_true(),
        }
    }
}

// Default functions

fn default_true() -> bool {
    true
}

fn default_text_min_length() -> usize {
    10
}

fn default_journal_min_length() -> u64 {
    10
}

fn default_survey_length() -> f64 {
    1.0
}

fn default_type_penalty() -> f64 {
    0.1
}
