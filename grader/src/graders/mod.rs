//! # Graders
//!
//! One scoring strategy per problem kind. Each grader holds its answer key
//! and resolved options, implements the [`crate::traits::grader::Grader`]
//! trait, and is pure: decode the response body, compute a score, pick the
//! kind's tier cutoffs, build a message.
//!
//! The available graders are:
//! - [`text`]: free-text length gates (single-field, multi-field, journaling).
//! - [`pathway`]: exploration pathway point tallies.
//! - [`survey`]: external-survey score passthrough.
//! - [`video`]: watch-time segment accumulation.
//! - [`matching`]: item/target pairing, binary or partial credit.
//! - [`ordering`]: sequence placement scored by edit distance.
//! - [`range`]: interval-overlap and point-bracket range guessing.

pub mod matching;
pub mod ordering;
pub mod pathway;
pub mod range;
pub mod survey;
pub mod text;
pub mod video;
