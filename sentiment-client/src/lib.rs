//! Sentiment Client - orchestration core for a sentiment-scoring dashboard
//!
//! This crate submits free text to a remote scoring service, keeps the most
//! recent result, and derives the running sentiment distribution from the
//! service's history list.

// Core modules
pub mod config;
pub mod error;
pub mod types;
pub mod traits;

// Transport and validation
pub mod http;
pub mod validation;

// Main functionality modules
pub mod analysis;
pub mod session;
pub mod history;
pub mod orchestrator;

pub mod testing;

// Re-export main types for convenience
pub use config::{ClientConfig, ClientConfigBuilder, ResponseShape};
pub use types::{
    AnalysisRequest, AnalysisResult, DistributionCounts, ErrorDescription, ErrorKind,
    HistoryEntry, HistorySnapshot, HttpResponse, SentimentLabel,
};
pub use analysis::{aggregate, ErrorClassifier, ErrorClassifierImpl};
pub use error::{Result, SentimentError};
pub use history::HistoryFetcher;
pub use http::SentimentHttpClient;
pub use orchestrator::RequestOrchestrator;
pub use session::{Phase, SessionEvent, SessionState, SessionStore};
pub use traits::SentimentApi;
pub use validation::ResponseValidatorImpl;

/// Build an HTTP-backed orchestrator and load the initial history.
///
/// A failed initial load is recorded in the session rather than returned.
pub async fn start_session(config: ClientConfig) -> Result<RequestOrchestrator<SentimentHttpClient>> {
    let orchestrator = RequestOrchestrator::connect(config)?;
    let _ = orchestrator.refresh_history().await;
    Ok(orchestrator)
}
