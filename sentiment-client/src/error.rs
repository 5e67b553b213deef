use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sentiment client operations
pub type Result<T> = std::result::Result<T, SentimentError>;

/// Every failure the client can produce, before classification.
///
/// These are the raw failure objects; the user-facing form is produced by
/// [`crate::analysis::ErrorClassifier`].
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Text to analyze is empty")]
    EmptyText,

    #[error("An analysis request is already in flight")]
    SubmissionInFlight,

    #[error("Transport failure calling {endpoint}: {message}")]
    Transport {
        endpoint: String,
        timed_out: bool,
        message: String,
    },

    #[error("{endpoint} responded with status {status}")]
    HttpStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Invalid payload from {endpoint}: {reason}")]
    InvalidPayload {
        endpoint: String,
        reason: String,
        body: String,
    },
}

impl SentimentError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new invalid payload error, keeping the raw body for classification
    pub fn invalid_payload<S: Into<String>>(endpoint: S, reason: S, body: S) -> Self {
        Self::InvalidPayload {
            endpoint: endpoint.into(),
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Split a reqwest failure into transport vs. protocol trouble
    pub fn from_request<S: Into<String>>(endpoint: S, err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            Self::Transport {
                endpoint: endpoint.into(),
                timed_out: err.is_timeout(),
                message: err.to_string(),
            }
        } else {
            Self::Http(err)
        }
    }

    /// True when the failure was rejected locally, before any I/O
    pub fn is_local_rejection(&self) -> bool {
        matches!(self, Self::EmptyText | Self::SubmissionInFlight)
    }

    /// Raw response body attached to the failure, if any
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { body, .. } | Self::InvalidPayload { body, .. } => Some(body),
            _ => None,
        }
    }
}
