use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use cricket_core::model::{PartialQuestion, QuizQuestion};

use crate::repository::ApiError;

pub(crate) const TOTAL_PAGES_HEADER: &str = "x-total-pages";
pub(crate) const TOTAL_ITEMS_HEADER: &str = "x-total-elements";

pub(crate) fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

pub(crate) fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Decode the random-question batch.
///
/// The body must be a JSON array. Entries are forgiving: a field of the wrong
/// type falls back to empty on its own, and an entry that is not an object at
/// all becomes an all-empty question.
pub(crate) fn decode_question_batch(body: &[u8]) -> Result<Vec<QuizQuestion>, ApiError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    let Value::Array(entries) = value else {
        return Err(ApiError::Malformed("expected a list of questions".into()));
    };
    Ok(entries
        .into_iter()
        .map(|entry| {
            serde_json::from_value::<QuizQuestion>(entry)
                .unwrap_or_else(|_| QuizQuestion::from(PartialQuestion::default()))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn batch_normalises_sparse_and_broken_entries() {
        let body = br#"[
            {"id": 1, "question": "Q1", "options": ["a", "b"], "correctAnswer": "a"},
            {"question": "Q2"},
            null,
            {"options": "not-a-list"}
        ]"#;
        let batch = decode_question_batch(body).unwrap();
        assert_eq!(batch.len(), 4);
        assert_eq!(batch[0].correct_answer(), "a");
        assert_eq!(batch[1].question(), "Q2");
        assert!(batch[1].options().is_empty());
        assert_eq!(batch[2].question(), "");
        assert_eq!(batch[3].id().as_str(), "");
    }

    #[test]
    fn batch_keeps_good_fields_next_to_bad_ones() {
        let body = br#"[
            {"id": 7, "question": "Who won in 2011?", "options": ["India", 3], "correctAnswer": "India"},
            {"id": "q-8", "question": "Overs in a T20 innings?", "options": ["20", "50"], "correctAnswer": 20},
            {"id": "q-9", "question": "Bails per wicket?", "options": ["2", "3"], "correctAnswer": {"n": 2}}
        ]"#;
        let batch = decode_question_batch(body).unwrap();
        assert_eq!(batch.len(), 3);

        assert_eq!(batch[0].id().as_str(), "7");
        assert_eq!(batch[0].question(), "Who won in 2011?");
        assert_eq!(batch[0].options(), ["India", "3"]);
        assert_eq!(batch[0].correct_answer(), "India");

        assert_eq!(batch[1].correct_answer(), "20");
        assert!(batch[1].has_option("20"));

        assert_eq!(batch[2].question(), "Bails per wicket?");
        assert_eq!(batch[2].options().len(), 2);
        assert_eq!(batch[2].correct_answer(), "");
    }

    #[test]
    fn batch_must_be_a_list() {
        let err = decode_question_batch(br#"{"questions": []}"#).unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
        let err = decode_question_batch(b"<html>").unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[test]
    fn header_value_ignores_non_ascii() {
        let mut headers = HeaderMap::new();
        headers.insert(TOTAL_PAGES_HEADER, HeaderValue::from_static("4"));
        headers.insert(TOTAL_ITEMS_HEADER, HeaderValue::from_bytes(b"\xff").unwrap());
        assert_eq!(header_value(&headers, TOTAL_PAGES_HEADER).as_deref(), Some("4"));
        assert_eq!(header_value(&headers, TOTAL_ITEMS_HEADER), None);
        assert_eq!(header_value(&headers, "x-missing"), None);
    }
}
