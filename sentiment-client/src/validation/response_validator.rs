use crate::config::ResponseShape;
use crate::error::{Result, SentimentError};
use crate::http::{ANALYZE_PATH, HISTORY_PATH};
use crate::types::{AnalysisResult, HistoryEntry, HistorySnapshot, HttpResponse};
use serde_json::Value;

/// Turns raw responses into typed results before any field is read
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseValidatorImpl {
    shape: ResponseShape,
}

impl ResponseValidatorImpl {
    /// Create a new response validator for the given analyze body shape
    pub fn new(shape: ResponseShape) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> ResponseShape {
        self.shape
    }

    /// Validate a `POST /analyze` response
    pub fn validate_analysis(&self, response: &HttpResponse) -> Result<AnalysisResult> {
        let payload = Self::payload(ANALYZE_PATH, response)?;

        let result = match self.shape {
            ResponseShape::Wrapped => match payload {
                Value::Object(mut map) => match map.remove("data") {
                    Some(data) => data,
                    None => {
                        return Err(Self::invalid(
                            ANALYZE_PATH,
                            "missing `data` in response",
                            response,
                        ))
                    }
                },
                _ => {
                    return Err(Self::invalid(
                        ANALYZE_PATH,
                        "response is not an object",
                        response,
                    ))
                }
            },
            ResponseShape::Flat => payload,
        };

        Self::entry(result).map_err(|reason| Self::invalid(ANALYZE_PATH, &reason, response))
    }

    /// Validate a `GET /history` response
    pub fn validate_history(&self, response: &HttpResponse) -> Result<HistorySnapshot> {
        let payload = Self::payload(HISTORY_PATH, response)?;

        let items = match payload {
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(items)) => items,
                Some(_) => {
                    return Err(Self::invalid(
                        HISTORY_PATH,
                        "`data` is not a list",
                        response,
                    ))
                }
                None => {
                    return Err(Self::invalid(
                        HISTORY_PATH,
                        "missing `data` in response",
                        response,
                    ))
                }
            },
            _ => {
                return Err(Self::invalid(
                    HISTORY_PATH,
                    "response is not an object",
                    response,
                ))
            }
        };

        let entries = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                Self::entry(item).map_err(|reason| {
                    Self::invalid(HISTORY_PATH, &format!("entry {}: {}", index, reason), response)
                })
            })
            .collect::<Result<Vec<HistoryEntry>>>()?;

        Ok(HistorySnapshot::new(entries))
    }

    /// Status and emptiness checks shared by both endpoints
    fn payload(endpoint: &str, response: &HttpResponse) -> Result<Value> {
        if response.is_error() {
            return Err(SentimentError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: response.status,
                body: response.body.clone(),
            });
        }

        if response.body.trim().is_empty() {
            return Err(Self::invalid(endpoint, "empty response body", response));
        }

        let value: Value = serde_json::from_str(&response.body).map_err(|e| {
            Self::invalid(endpoint, &format!("response is not JSON: {}", e), response)
        })?;

        if value.is_null() {
            return Err(Self::invalid(endpoint, "null payload", response));
        }

        Ok(value)
    }

    /// One result/history element: needs `text` and `sentiment`, `polarity` optional
    fn entry(value: Value) -> std::result::Result<AnalysisResult, String> {
        if !value.is_object() {
            return Err("entry is not an object".to_string());
        }
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    fn invalid(endpoint: &str, reason: &str, response: &HttpResponse) -> SentimentError {
        SentimentError::invalid_payload(endpoint, reason, response.body.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SentimentLabel;
    use std::collections::HashMap;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse::new(status, HashMap::new(), body.to_string(), "http://test".to_string())
    }

    #[test]
    fn test_wrapped_analysis() {
        let validator = ResponseValidatorImpl::new(ResponseShape::Wrapped);
        let result = validator
            .validate_analysis(&response(
                200,
                r#"{"data": {"text": "I love this!", "sentiment": "positive", "polarity": 0.8}}"#,
            ))
            .unwrap();

        assert_eq!(result.text, "I love this!");
        assert_eq!(result.sentiment, SentimentLabel::Positive);
        assert_eq!(result.polarity, Some(0.8));
    }

    #[test]
    fn test_wrapped_rejects_flat_body() {
        let validator = ResponseValidatorImpl::new(ResponseShape::Wrapped);
        let err = validator
            .validate_analysis(&response(
                200,
                r#"{"text": "x", "sentiment": "positive", "polarity": 0.1}"#,
            ))
            .unwrap_err();
        assert!(matches!(err, SentimentError::InvalidPayload { .. }));
    }

    #[test]
    fn test_flat_analysis() {
        let validator = ResponseValidatorImpl::new(ResponseShape::Flat);
        let result = validator
            .validate_analysis(&response(200, r#"{"text": "meh", "sentiment": "neutral"}"#))
            .unwrap();
        assert_eq!(result.sentiment, SentimentLabel::Neutral);
        assert_eq!(result.polarity, None);
    }

    #[test]
    fn test_missing_text_is_rejected() {
        let validator = ResponseValidatorImpl::default();
        let err = validator
            .validate_analysis(&response(200, r#"{"data": {"sentiment": "positive"}}"#))
            .unwrap_err();
        assert!(err.to_string().contains("text"));
    }

    #[test]
    fn test_non_numeric_polarity_is_rejected() {
        let validator = ResponseValidatorImpl::default();
        let result = validator.validate_analysis(&response(
            200,
            r#"{"data": {"text": "x", "sentiment": "positive", "polarity": "high"}}"#,
        ));
        assert!(result.is_err());
    }

    #[test]
    fn test_null_polarity_is_absent() {
        let validator = ResponseValidatorImpl::default();
        let result = validator
            .validate_analysis(&response(
                200,
                r#"{"data": {"text": "x", "sentiment": "negative", "polarity": null}}"#,
            ))
            .unwrap();
        assert_eq!(result.polarity, None);
    }

    #[test]
    fn test_empty_and_non_json_bodies() {
        let validator = ResponseValidatorImpl::default();
        assert!(validator.validate_analysis(&response(200, "")).is_err());
        assert!(validator.validate_analysis(&response(200, "null")).is_err());
        assert!(validator.validate_history(&response(200, "<html>")).is_err());
    }

    #[test]
    fn test_error_status_keeps_body() {
        let validator = ResponseValidatorImpl::default();
        let err = validator
            .validate_analysis(&response(429, r#"{"error": "rate limited"}"#))
            .unwrap_err();

        match err {
            SentimentError::HttpStatus { status, body, .. } => {
                assert_eq!(status, 429);
                assert!(body.contains("rate limited"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_history_list() {
        let validator = ResponseValidatorImpl::default();
        let snapshot = validator
            .validate_history(&response(
                200,
                r#"{"data": [
                    {"text": "a", "sentiment": "positive", "polarity": 0.5},
                    {"text": "b", "sentiment": "sarcastic", "polarity": 0.0},
                    {"text": "c", "sentiment": "negative"}
                ], "count": 3, "status": "success"}"#,
            ))
            .unwrap();

        assert_eq!(snapshot.len(), 3);
        assert_eq!(
            snapshot.entries()[1].sentiment,
            SentimentLabel::Unrecognized("sarcastic".to_string())
        );
        assert_eq!(snapshot.entries()[2].polarity, None);
    }

    #[test]
    fn test_history_not_a_list() {
        let validator = ResponseValidatorImpl::default();
        let err = validator
            .validate_history(&response(200, r#"{"data": {"text": "a"}}"#))
            .unwrap_err();
        assert!(err.to_string().contains("not a list"));

        assert!(validator.validate_history(&response(200, r#"{"count": 0}"#)).is_err());
        assert!(validator.validate_history(&response(200, "[]")).is_err());
    }

    #[test]
    fn test_history_bad_element() {
        let validator = ResponseValidatorImpl::default();
        let err = validator
            .validate_history(&response(
                200,
                r#"{"data": [{"text": "a", "sentiment": "positive"}, {"text": "b"}]}"#,
            ))
            .unwrap_err();
        assert!(err.to_string().contains("entry 1"));

        let err = validator
            .validate_history(&response(200, r#"{"data": [["a", "positive", 0.1]]}"#))
            .unwrap_err();
        assert!(err.to_string().contains("not an object"));
    }

    #[test]
    fn test_empty_history_is_valid() {
        let validator = ResponseValidatorImpl::default();
        let snapshot = validator.validate_history(&response(200, r#"{"data": []}"#)).unwrap();
        assert!(snapshot.is_empty());
    }
}
