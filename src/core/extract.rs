// Locating and parsing a structured payload embedded in free-form model
// output. The span heuristic is first '{' to last '}', taken greedily; it is
// deliberately not balanced-brace aware, and responses containing multiple
// JSON objects or trailing braced prose over-capture and fail the strict
// parse. Downstream policies are defined against exactly these semantics.

use serde::de::DeserializeOwned;

/// Outcome of an extraction attempt. A two-variant result consumed by an
/// explicit branch at each call site; the per-operation failure policies
/// differ, so this never becomes an error by itself.
#[derive(Debug)]
pub enum Extraction<T> {
    Extracted(T),
    Failed { reason: String },
}

/// The inclusive substring between the first '{' and the last '}', or `None`
/// when either brace is missing or the span is inverted.
pub fn json_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

pub fn extract<T: DeserializeOwned>(raw: &str) -> Extraction<T> {
    let Some(span) = json_span(raw) else {
        return Extraction::Failed {
            reason: "no brace-delimited payload in response".to_string(),
        };
    };

    match serde_json::from_str(span) {
        Ok(value) => Extraction::Extracted(value),
        Err(e) => Extraction::Failed {
            reason: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        answer: String,
    }

    #[test]
    fn span_requires_both_braces() {
        assert_eq!(json_span("no braces here"), None);
        assert_eq!(json_span("only open {"), None);
        assert_eq!(json_span("only close }"), None);
    }

    #[test]
    fn span_is_none_when_braces_are_inverted() {
        assert_eq!(json_span("} backwards {"), None);
    }

    #[test]
    fn span_is_greedy_across_multiple_objects() {
        // Two independent objects capture as one invalid span.
        assert_eq!(json_span(r#"{"a": 1} and {"b": 2}"#), Some(r#"{"a": 1} and {"b": 2}"#));
    }

    #[test]
    fn extracts_payload_surrounded_by_prose() {
        let raw = "Sure! Here is your answer:\n{\"answer\": \"42\"}\nHope that helps.";
        match extract::<Payload>(raw) {
            Extraction::Extracted(p) => assert_eq!(p.answer, "42"),
            Extraction::Failed { reason } => panic!("unexpected failure: {}", reason),
        }
    }

    #[test]
    fn fails_without_braces() {
        assert!(matches!(
            extract::<Payload>("plain prose, nothing structured"),
            Extraction::Failed { .. }
        ));
    }

    #[test]
    fn fails_on_invalid_json_inside_span() {
        assert!(matches!(
            extract::<Payload>("{not json at all}"),
            Extraction::Failed { .. }
        ));
    }

    #[test]
    fn fails_on_shape_mismatch() {
        assert!(matches!(
            extract::<Payload>(r#"{"different_field": true}"#),
            Extraction::Failed { .. }
        ));
    }

    #[test]
    fn tolerates_extra_fields() {
        let raw = r#"{"answer": "yes", "confidence": 0.9}"#;
        assert!(matches!(extract::<Payload>(raw), Extraction::Extracted(_)));
    }

    #[test]
    fn two_objects_fail_strict_parse() {
        assert!(matches!(
            extract::<Payload>(r#"{"answer": "a"} {"answer": "b"}"#),
            Extraction::Failed { .. }
        ));
    }
}
