use crate::error::Result;
use crate::types::{AnalysisRequest, HttpResponse};
use std::future::Future;

/// Remote scoring service as seen by the orchestrator.
///
/// Implementations return the raw response for any status code; only
/// transport trouble is an `Err`. Status and body checks belong to the
/// validator.
pub trait SentimentApi: Send + Sync {
    /// `POST /analyze`
    fn analyze(&self, request: &AnalysisRequest)
        -> impl Future<Output = Result<HttpResponse>> + Send;

    /// `GET /history`
    fn history(&self) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// Trait for building outgoing requests
pub trait RequestBuilder: Send + Sync {
    fn build_analyze(&self, request: &AnalysisRequest) -> Result<reqwest::Request>;

    fn build_history(&self) -> Result<reqwest::Request>;
}

/// Trait for turning a reqwest response into an [`HttpResponse`]
pub trait ResponseConverter: Send + Sync {
    fn convert_response(
        &self,
        endpoint: &str,
        response: reqwest::Response,
    ) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    /// Validate configuration
    fn validate(&self, config: &Self::Config) -> Result<()>;
}
