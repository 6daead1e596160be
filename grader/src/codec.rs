//! Response envelope decoding.
//!
//! The platform delivers a learner's answer doubly encoded: an outer JSON
//! envelope whose `answer` field holds a further JSON-encoded answer body.
//! [`decode_body`] performs both stages; a failure at either stage (or a
//! missing `answer` field) is a terminal [`GraderError::MalformedInput`] for
//! that grading call.
//!
//! One body type is defined per problem kind. Fields the platform
//! serializes inconsistently (numbers sometimes arriving as strings) are
//! held as raw values and coerced with [`coerce_f64`].

use crate::error::GraderError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Envelope {
    answer: String,
}

/// Decodes a raw envelope string into the body type a grader expects.
pub fn decode_body<T: DeserializeOwned>(raw: &str) -> Result<T, GraderError> {
    let envelope: Envelope = serde_json::from_str(raw)
        .map_err(|e| GraderError::MalformedInput(format!("invalid answer envelope: {e}")))?;
    serde_json::from_str(&envelope.answer)
        .map_err(|e| GraderError::MalformedInput(format!("invalid answer body: {e}")))
}

/// Strips extraneous surrounding quote characters and whitespace from a
/// scalar string answer. Applied before any length or content check.
pub fn scrub(answer: &str) -> &str {
    answer.trim_matches('"').trim()
}

/// Coerces a JSON value that should be a number but may arrive as a string.
pub(crate) fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Body of a single-field free-text response.
#[derive(Debug, Deserialize)]
pub struct TextBody {
    pub answer: String,
}

/// Body of a journaling response: the text plus the platform-reported
/// character count.
#[derive(Debug, Deserialize)]
pub struct JournalBody {
    pub answer: String,
    pub length: u64,
}

/// Body of a multi-field free-text response.
#[derive(Debug, Deserialize)]
pub struct MultiTextBody {
    pub answers: Vec<String>,
}

/// Body of a pathway response: which choices the learner has ever opened and
/// which are open right now.
#[derive(Debug, Deserialize)]
pub struct PathwayBody {
    pub ever_opened: Vec<String>,
    pub currently_open: Vec<String>,
}

/// Body of an external-survey response. `score` is coerced later; a
/// non-numeric value falls back to zero rather than erroring.
#[derive(Debug, Deserialize)]
pub struct SurveyBody {
    pub score: Value,
}

/// Body shared by matching and ordering responses; the two kinds read their
/// pairings with different element shapes.
#[derive(Debug, Deserialize)]
pub struct PairingsBody<P> {
    pub pairings: Vec<P>,
}

/// One placed item in an ordering response: `[symbol, position]`.
#[derive(Debug, Clone, Deserialize)]
pub struct Placement(pub String, pub f64);

/// Body of a range-guess response.
#[derive(Debug, Deserialize)]
pub struct RangeBody {
    pub upperguess: f64,
    pub lowerguess: f64,
    pub upperclosed: bool,
    pub lowerclosed: bool,
}

/// Body of a video-watch response.
#[derive(Debug, Deserialize)]
pub struct VideoBody {
    pub watch_times: Vec<Value>,
    pub video_length: Value,
    pub start_time: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(body: serde_json::Value) -> String {
        json!({ "answer": body.to_string() }).to_string()
    }

    #[test]
    fn decodes_two_nested_stages() {
        let raw = envelope(json!({"answer": "hello there"}));
        let body: TextBody = decode_body(&raw).unwrap();
        assert_eq!(body.answer, "hello there");
    }

    #[test]
    fn malformed_envelope_is_terminal() {
        let err = decode_body::<TextBody>("not json at all").unwrap_err();
        assert!(matches!(err, GraderError::MalformedInput(_)));
    }

    #[test]
    fn missing_answer_field_is_terminal() {
        let err = decode_body::<TextBody>(r#"{"state": "{}"}"#).unwrap_err();
        assert!(matches!(err, GraderError::MalformedInput(_)));
    }

    #[test]
    fn malformed_inner_body_is_terminal() {
        let raw = json!({ "answer": "{broken" }).to_string();
        let err = decode_body::<TextBody>(&raw).unwrap_err();
        assert!(matches!(err, GraderError::MalformedInput(_)));
    }

    #[test]
    fn scrub_strips_quotes_and_whitespace() {
        assert_eq!(scrub("\"  padded  \""), "padded");
        assert_eq!(scrub("  plain  "), "plain");
        assert_eq!(scrub("\"\""), "");
    }

    #[test]
    fn coerce_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_f64(&json!(2.5)), Some(2.5));
        assert_eq!(coerce_f64(&json!("2.5")), Some(2.5));
        assert_eq!(coerce_f64(&json!("nope")), None);
        assert_eq!(coerce_f64(&json!([1])), None);
    }

    #[test]
    fn placement_reads_symbol_position_pairs() {
        let raw = envelope(json!({"pairings": [["A", 2], ["B", 1]]}));
        let body: PairingsBody<Placement> = decode_body(&raw).unwrap();
        assert_eq!(body.pairings.len(), 2);
        assert_eq!(body.pairings[0].0, "A");
        assert_eq!(body.pairings[1].1, 1.0);
    }
}
