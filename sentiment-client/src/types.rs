use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Sentiment label as reported by the scoring service.
///
/// Labels outside the three recognized ones are preserved verbatim so they
/// are never dropped from history; they count as neutral when aggregating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Unrecognized(String),
}

impl SentimentLabel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Bucket used by the distribution; unknown labels fall into neutral
    pub fn bucket(&self) -> SentimentLabel {
        match self {
            Self::Positive => Self::Positive,
            Self::Negative => Self::Negative,
            Self::Neutral | Self::Unrecognized(_) => Self::Neutral,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for SentimentLabel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            "neutral" => Self::Neutral,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<&str> for SentimentLabel {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<SentimentLabel> for String {
    fn from(label: SentimentLabel) -> Self {
        match label {
            SentimentLabel::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /analyze`. Built per submission and dropped once sent.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    pub text: String,
}

impl AnalysisRequest {
    /// Build a request from raw user input, rejecting blank text
    pub fn from_input(raw_text: &str) -> crate::error::Result<Self> {
        if raw_text.trim().is_empty() {
            return Err(crate::error::SentimentError::EmptyText);
        }
        Ok(Self {
            text: raw_text.to_string(),
        })
    }
}

/// One scored piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub sentiment: SentimentLabel,
    /// Absent when the service omitted it; never synthesized
    #[serde(default)]
    pub polarity: Option<f64>,
}

impl AnalysisResult {
    /// Polarity rendered with two decimals, or `None` when absent
    pub fn polarity_display(&self) -> Option<String> {
        self.polarity.map(|p| format!("{:.2}", p))
    }
}

/// Past analysis as returned by `GET /history`
pub type HistoryEntry = AnalysisResult;

/// Immutable, cheaply clonable view of the server history.
///
/// A new snapshot always replaces the old one wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySnapshot {
    entries: Arc<Vec<HistoryEntry>>,
}

impl HistorySnapshot {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for HistorySnapshot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl From<Vec<HistoryEntry>> for HistorySnapshot {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self::new(entries)
    }
}

impl<'a> IntoIterator for &'a HistorySnapshot {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Per-label counts derived from a history snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DistributionCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl DistributionCounts {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn count(&self, label: &SentimentLabel) -> usize {
        match label.bucket() {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            _ => self.neutral,
        }
    }

    /// Percentage of entries in the label's bucket; 0.0 for an empty distribution
    pub fn share(&self, label: &SentimentLabel) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.count(label) as f64 / total as f64) * 100.0
    }
}

/// HTTP response data as seen by the validator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub url: String,
}

impl HttpResponse {
    /// Create a new HTTP response
    pub fn new(status: u16, headers: HashMap<String, String>, body: String, url: String) -> Self {
        Self {
            status,
            headers,
            body,
            url,
        }
    }

    /// Check if the response indicates success (2xx status code)
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Check if the response indicates an error (non-2xx status code)
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }
}

/// Normalized error category shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    ValidationError,
    ServerError,
    ConnectivityError,
    ProtocolError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ValidationError => "ValidationError",
            Self::ServerError => "ServerError",
            Self::ConnectivityError => "ConnectivityError",
            Self::ProtocolError => "ProtocolError",
        };
        f.write_str(name)
    }
}

/// The single user-visible description of a failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDescription {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorDescription {
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ErrorDescription {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing_keeps_unknown_values() {
        assert_eq!(SentimentLabel::from("positive"), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from("neutral"), SentimentLabel::Neutral);

        let odd = SentimentLabel::from("mixed");
        assert_eq!(odd, SentimentLabel::Unrecognized("mixed".to_string()));
        assert_eq!(odd.as_str(), "mixed");
        assert_eq!(odd.bucket(), SentimentLabel::Neutral);
        assert!(!odd.is_recognized());
    }

    #[test]
    fn test_label_serde_uses_plain_strings() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"text": "meh", "sentiment": "Mixed", "polarity": 0.0}"#,
        )
        .unwrap();
        assert_eq!(result.sentiment, SentimentLabel::Unrecognized("Mixed".to_string()));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["sentiment"], "Mixed");
    }

    #[test]
    fn test_blank_request_is_rejected() {
        assert!(AnalysisRequest::from_input("  \t\n").is_err());
        let request = AnalysisRequest::from_input("  hi ").unwrap();
        assert_eq!(request.text, "  hi ");
    }

    #[test]
    fn test_polarity_display() {
        let result = AnalysisResult {
            text: "x".to_string(),
            sentiment: SentimentLabel::Positive,
            polarity: Some(0.8),
        };
        assert_eq!(result.polarity_display().as_deref(), Some("0.80"));

        let missing = AnalysisResult {
            polarity: None,
            ..result
        };
        assert!(missing.polarity_display().is_none());
    }

    #[test]
    fn test_distribution_share() {
        let counts = DistributionCounts {
            positive: 1,
            negative: 1,
            neutral: 2,
        };
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.share(&SentimentLabel::Neutral), 50.0);
        assert_eq!(counts.share(&SentimentLabel::from("other")), 50.0);
        assert_eq!(DistributionCounts::default().share(&SentimentLabel::Positive), 0.0);
    }

    #[test]
    fn test_http_response_status() {
        let ok = HttpResponse::new(200, HashMap::new(), String::new(), "http://x".to_string());
        assert!(ok.is_success());
        let err = HttpResponse::new(429, HashMap::new(), String::new(), "http://x".to_string());
        assert!(err.is_error());
    }
}
