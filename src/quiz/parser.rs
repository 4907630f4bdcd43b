//! Pasted-text to question-set parser.
//!
//! Assistant replies rarely contain bare JSON, so parsing happens in two
//! steps: [`extract_array`] pulls a candidate array out of the surrounding
//! prose, then every element is validated and normalized up front. A set
//! that loads is a set that can be rendered and graded; nothing is deferred
//! to blow up mid-quiz.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::quiz::extract::extract_array;
use crate::quiz::model::{default_qtype, Question, QuestionId};

/// Why a paste could not be turned into a question set.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The candidate text is not valid JSON at all.
    #[error("invalid JSON syntax: {0}")]
    Syntax(#[from] serde_json::Error),
    /// The payload parsed, but its top level is not an array.
    #[error("Parsed content is not a valid JSON array")]
    NotAnArray,
    /// One element of the array is not a usable question.
    #[error("question {}: {reason}", .index + 1)]
    Question { index: usize, reason: String },
}

/// Element shape accepted from the wire. Ids in the wild are numbers,
/// numeric strings, nulls, zeros, or missing entirely, so identity is
/// resolved after deserialization rather than typed here.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    #[serde(default)]
    id: Option<Value>,
    #[serde(rename = "type", default = "default_qtype")]
    qtype: String,
    question: String,
    options: Vec<String>,
    answer: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Parse raw pasted text into a normalized question list.
///
/// Order and count follow the payload exactly. An element keeps its own id
/// when it carries a usable one; otherwise the 1-based position steps in.
/// The first bad element fails the whole paste with its position, so the
/// caller can report something better than "invalid".
pub fn parse(raw: &str) -> Result<Vec<Question>, ParseError> {
    let candidate = extract_array(raw).unwrap_or_else(|| raw.trim());
    let payload: Value = serde_json::from_str(candidate)?;

    let Value::Array(elements) = payload else {
        return Err(ParseError::NotAnArray);
    };

    let mut questions = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        let raw: RawQuestion = serde_json::from_value(element).map_err(|err| {
            ParseError::Question {
                index,
                reason: err.to_string(),
            }
        })?;

        if raw.options.is_empty() {
            return Err(ParseError::Question {
                index,
                reason: "\"options\" must contain at least one entry".to_string(),
            });
        }

        let id = raw
            .id
            .as_ref()
            .and_then(id_from_value)
            .unwrap_or(index as QuestionId + 1);

        let question = Question {
            id,
            qtype: raw.qtype,
            question: raw.question,
            options: raw.options,
            answer: raw.answer,
            extra: raw.extra,
        };

        if !question.answer_is_listed() {
            tracing::warn!(
                id = question.id,
                "declared answer is not among the options; every pick will grade wrong"
            );
        }

        questions.push(question);
    }

    Ok(questions)
}

/// Resolve an element's own `id` field. Falsy values (null, false, 0, "")
/// never count, mirroring how the payloads' producer treats them. A truthy
/// value is kept only when it reads as an unsigned integer, numeric strings
/// included; anything else falls back to the position.
fn id_from_value(value: &Value) -> Option<QuestionId> {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(0) | None => None,
            Some(id) => Some(id),
        },
        Value::String(s) if !s.is_empty() => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_prose_wrapped_payload() {
        let raw = concat!(
            "Here are 2 questions for you:\n\n```json\n",
            r#"[{"id": 1, "type": "mcq", "question": "2+2?", "options": ["3", "4"], "answer": "4"},"#,
            r#" {"id": 2, "question": "3+3?", "options": ["6", "7"], "answer": "6"}]"#,
            "\n```\n\nLet me know how it goes!"
        );
        let questions = parse(raw).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[0].question, "2+2?");
        assert_eq!(questions[1].options, vec!["6", "7"]);
    }

    #[test]
    fn test_preserves_order_and_extra_fields() {
        let raw = r#"[
            {"id": 9, "question": "a?", "options": ["x"], "answer": "x", "hint": "think"},
            {"id": 4, "question": "b?", "options": ["y"], "answer": "y"}
        ]"#;
        let questions = parse(raw).unwrap();
        assert_eq!(questions[0].id, 9);
        assert_eq!(questions[1].id, 4);
        assert_eq!(questions[0].extra["hint"], json!("think"));
    }

    #[test]
    fn test_missing_id_gets_position() {
        let raw = r#"[
            {"question": "a?", "options": ["x"], "answer": "x"},
            {"question": "b?", "options": ["y"], "answer": "y"}
        ]"#;
        let questions = parse(raw).unwrap();
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[1].id, 2);
    }

    #[test]
    fn test_falsy_ids_get_position() {
        for falsy in ["0", "\"\"", "null", "false"] {
            let raw = format!(
                r#"[{{"id": {falsy}, "question": "a?", "options": ["x"], "answer": "x"}}]"#
            );
            let questions = parse(&raw).unwrap();
            assert_eq!(questions[0].id, 1, "id {falsy} should fall back");
        }
    }

    #[test]
    fn test_truthy_ids_are_kept() {
        let raw = r#"[
            {"id": 7, "question": "a?", "options": ["x"], "answer": "x"},
            {"id": "12", "question": "b?", "options": ["y"], "answer": "y"}
        ]"#;
        let questions = parse(raw).unwrap();
        assert_eq!(questions[0].id, 7);
        assert_eq!(questions[1].id, 12);
    }

    #[test]
    fn test_unusable_truthy_ids_get_position() {
        let raw = r#"[
            {"id": "seven", "question": "a?", "options": ["x"], "answer": "x"},
            {"id": -3, "question": "b?", "options": ["y"], "answer": "y"},
            {"id": true, "question": "c?", "options": ["z"], "answer": "z"}
        ]"#;
        let questions = parse(raw).unwrap();
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[1].id, 2);
        assert_eq!(questions[2].id, 3);
    }

    #[test]
    fn test_duplicate_ids_are_not_deduplicated() {
        let raw = r#"[
            {"id": 5, "question": "a?", "options": ["x"], "answer": "x"},
            {"id": 5, "question": "b?", "options": ["y"], "answer": "y"}
        ]"#;
        let questions = parse(raw).unwrap();
        assert_eq!(questions[0].id, 5);
        assert_eq!(questions[1].id, 5);
    }

    #[test]
    fn test_garbage_is_a_syntax_error() {
        let err = parse("this is not json at all").unwrap_err();
        assert!(matches!(err, ParseError::Syntax(_)));
    }

    #[test]
    fn test_top_level_object_is_rejected() {
        let err = parse(r#"{"question": "a?"}"#).unwrap_err();
        assert!(matches!(err, ParseError::NotAnArray));
        assert_eq!(err.to_string(), "Parsed content is not a valid JSON array");
    }

    #[test]
    fn test_empty_array_yields_zero_questions() {
        assert_eq!(parse("[]").unwrap().len(), 0);
        assert_eq!(parse("  [ ]  ").unwrap().len(), 0);
    }

    #[test]
    fn test_non_object_element_is_rejected_with_position() {
        let err = parse(r#"[1, 2, 3]"#).unwrap_err();
        match err {
            ParseError::Question { index, .. } => assert_eq!(index, 0),
            other => panic!("expected element error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_fields_are_rejected_with_position() {
        let raw = r#"[
            {"id": 1, "question": "a?", "options": ["x"], "answer": "x"},
            {"id": 2, "question": "b?", "answer": "y"}
        ]"#;
        let err = parse(raw).unwrap_err();
        match err {
            ParseError::Question { index, ref reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("options"), "reason was: {reason}");
            }
            other => panic!("expected element error, got {other:?}"),
        }
        assert!(err.to_string().starts_with("question 2:"));
    }

    #[test]
    fn test_empty_options_are_rejected() {
        let raw = r#"[{"id": 1, "question": "a?", "options": [], "answer": "x"}]"#;
        let err = parse(raw).unwrap_err();
        assert!(matches!(err, ParseError::Question { index: 0, .. }));
    }

    #[test]
    fn test_unlisted_answer_still_parses() {
        let raw = r#"[{"id": 1, "question": "a?", "options": ["x", "y"], "answer": "z"}]"#;
        let questions = parse(raw).unwrap();
        assert!(!questions[0].answer_is_listed());
    }

    #[test]
    fn test_whole_paste_fallback_when_no_candidate() {
        // No `[`+`{` region exists, so the trimmed paste itself is parsed.
        let questions = parse("  []\n").unwrap();
        assert!(questions.is_empty());
    }
}
