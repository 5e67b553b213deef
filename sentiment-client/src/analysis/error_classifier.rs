//! Error classification - maps every raw failure to one user-facing description
//!
//! Precedence, first match wins: local input validation, a message reported by
//! the service in its response body, transport failure, anything else.

use crate::error::SentimentError;
use crate::types::{ErrorDescription, ErrorKind};
use serde_json::Value;
use tracing::debug;

pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text to analyze";
pub const IN_FLIGHT_MESSAGE: &str = "An analysis is already in progress, wait for it to finish";
pub const CONNECTIVITY_MESSAGE: &str =
    "Could not reach the sentiment service. Check backend connection.";
pub const PROTOCOL_MESSAGE: &str = "Unexpected response from the sentiment service";

/// Trait for error classification - pure business logic
pub trait ErrorClassifier: Send + Sync {
    /// Classify any failure into exactly one description
    fn classify(&self, failure: &SentimentError) -> ErrorDescription;

    /// Extract the service-reported `error` message from a response body
    fn server_message(&self, body: &str) -> Option<String>;
}

/// Default implementation of the classifier
#[derive(Debug, Clone, Copy)]
pub struct ErrorClassifierImpl;

impl ErrorClassifierImpl {
    pub fn new() -> Self {
        Self
    }

    fn local_validation(&self, failure: &SentimentError) -> Option<ErrorDescription> {
        let message = match failure {
            SentimentError::EmptyText => EMPTY_TEXT_MESSAGE,
            SentimentError::SubmissionInFlight => IN_FLIGHT_MESSAGE,
            _ => return None,
        };
        Some(ErrorDescription::new(ErrorKind::ValidationError, message))
    }

    fn server_reported(&self, failure: &SentimentError) -> Option<ErrorDescription> {
        let message = self.server_message(failure.response_body()?)?;
        Some(ErrorDescription::new(ErrorKind::ServerError, message))
    }

    fn transport(&self, failure: &SentimentError) -> Option<ErrorDescription> {
        let is_transport = match failure {
            SentimentError::Transport { .. } => true,
            SentimentError::Http(err) => err.is_timeout() || err.is_connect(),
            _ => false,
        };
        is_transport.then(|| ErrorDescription::new(ErrorKind::ConnectivityError, CONNECTIVITY_MESSAGE))
    }
}

impl Default for ErrorClassifierImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorClassifier for ErrorClassifierImpl {
    fn classify(&self, failure: &SentimentError) -> ErrorDescription {
        let description = self
            .local_validation(failure)
            .or_else(|| self.server_reported(failure))
            .or_else(|| self.transport(failure))
            .unwrap_or_else(|| ErrorDescription::new(ErrorKind::ProtocolError, PROTOCOL_MESSAGE));

        debug!(kind = %description.kind, cause = %failure, "classified failure");
        description
    }

    fn server_message(&self, body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        let message = value.get("error")?.as_str()?;
        if message.trim().is_empty() {
            return None;
        }
        Some(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(failure: SentimentError) -> ErrorDescription {
        ErrorClassifierImpl::new().classify(&failure)
    }

    fn http_status(status: u16, body: &str) -> SentimentError {
        SentimentError::HttpStatus {
            endpoint: "/analyze".to_string(),
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_local_validation_first() {
        let description = classify(SentimentError::EmptyText);
        assert_eq!(description.kind, ErrorKind::ValidationError);
        assert_eq!(description.message, EMPTY_TEXT_MESSAGE);

        let description = classify(SentimentError::SubmissionInFlight);
        assert_eq!(description.kind, ErrorKind::ValidationError);
    }

    #[test]
    fn test_server_message_is_verbatim() {
        let description = classify(http_status(429, r#"{"error": "rate limited"}"#));
        assert_eq!(description.kind, ErrorKind::ServerError);
        assert_eq!(description.message, "rate limited");

        let description = classify(http_status(500, r#"{"error": "  db down  "}"#));
        assert_eq!(description.message, "  db down  ");
    }

    #[test]
    fn test_server_message_in_invalid_success_payload() {
        let failure = SentimentError::invalid_payload(
            "/analyze",
            "missing `data` in response",
            r#"{"error": "Text field is required"}"#,
        );
        let description = classify(failure);
        assert_eq!(description.kind, ErrorKind::ServerError);
        assert_eq!(description.message, "Text field is required");
    }

    #[test]
    fn test_transport_failures() {
        let description = classify(SentimentError::Transport {
            endpoint: "/history".to_string(),
            timed_out: true,
            message: "operation timed out".to_string(),
        });
        assert_eq!(description.kind, ErrorKind::ConnectivityError);
        assert_eq!(description.message, CONNECTIVITY_MESSAGE);
    }

    #[test]
    fn test_everything_else_is_protocol() {
        for failure in [
            http_status(502, "<html>Bad Gateway</html>"),
            http_status(400, r#"{"error": ""}"#),
            http_status(400, r#"{"error": 42}"#),
            SentimentError::invalid_payload("/history", "`data` is not a list", r#"{"data": 1}"#),
            SentimentError::invalid_config("broken"),
            SentimentError::Io(std::io::Error::other("disk")),
        ] {
            let description = classify(failure);
            assert_eq!(description.kind, ErrorKind::ProtocolError);
            assert_eq!(description.message, PROTOCOL_MESSAGE);
        }
    }

    #[test]
    fn test_server_message_extraction() {
        let classifier = ErrorClassifierImpl::new();
        assert_eq!(
            classifier.server_message(r#"{"error": "Request must be JSON"}"#).as_deref(),
            Some("Request must be JSON")
        );
        assert_eq!(classifier.server_message("plain text"), None);
        assert_eq!(classifier.server_message(r#"["error"]"#), None);
    }
}
