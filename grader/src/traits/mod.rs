//! Core traits used throughout the grading engine.
//!
//! - [`grader`]: the strategy trait every problem-kind grader implements,
//!   plus the participation-credit decorator.

pub mod grader;
