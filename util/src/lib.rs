//! Shared domain types for the grading engine.
//!
//! This crate holds the externally-authored data that graders consume:
//! - [`answer_key`]: per-problem-kind descriptions of the correct answer(s).
//! - [`grading_options`]: per-grader option tables with documented defaults.

pub mod answer_key;
pub mod grading_options;
