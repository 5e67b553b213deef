use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Default location of the scoring service
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
/// Default bound on a single analyze call
pub const DEFAULT_ANALYZE_TIMEOUT_SECONDS: u64 = 5;
/// Default bound on a single history read
pub const DEFAULT_HISTORY_TIMEOUT_SECONDS: u64 = 10;

/// Client configuration, passed explicitly to the client at construction
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the scoring service, e.g. `http://localhost:5000`
    pub base_url: String,
    /// Timeout for `POST /analyze` in seconds
    pub analyze_timeout_seconds: u64,
    /// Timeout for `GET /history` in seconds
    pub history_timeout_seconds: u64,
    /// Which body shape `POST /analyze` is expected to return
    pub response_shape: ResponseShape,
    /// Extra headers sent with every request
    pub headers: Option<HashMap<String, String>>,
}

/// Accepted success body of `POST /analyze`.
///
/// Exactly one shape is accepted per configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseShape {
    /// `{ "data": { "text": .., "sentiment": .., "polarity": .. } }`
    #[default]
    Wrapped,
    /// The result object is the body itself
    Flat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            analyze_timeout_seconds: DEFAULT_ANALYZE_TIMEOUT_SECONDS,
            history_timeout_seconds: DEFAULT_HISTORY_TIMEOUT_SECONDS,
            response_shape: ResponseShape::default(),
            headers: None,
        }
    }
}

impl ClientConfig {
    pub fn analyze_timeout(&self) -> Duration {
        Duration::from_secs(self.analyze_timeout_seconds)
    }

    pub fn history_timeout(&self) -> Duration {
        Duration::from_secs(self.history_timeout_seconds)
    }

    /// Join an endpoint path onto the base URL without doubling slashes
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
