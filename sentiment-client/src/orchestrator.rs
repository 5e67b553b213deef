use crate::analysis::{ErrorClassifier, ErrorClassifierImpl};
use crate::config::{ClientConfig, ResponseShape};
use crate::error::{Result, SentimentError};
use crate::history::HistoryFetcher;
use crate::http::SentimentHttpClient;
use crate::session::{SessionEvent, SessionState, SessionStore};
use crate::traits::SentimentApi;
use crate::types::{
    AnalysisRequest, AnalysisResult, DistributionCounts, ErrorDescription, HistorySnapshot,
};
use crate::validation::ResponseValidatorImpl;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Top-level controller for one dashboard session.
///
/// At most one analyze request is in flight at a time. A successful analysis
/// is always followed by exactly one history fetch, issued after the result
/// has been stored.
pub struct RequestOrchestrator<C> {
    client: Arc<C>,
    validator: ResponseValidatorImpl,
    classifier: ErrorClassifierImpl,
    history: HistoryFetcher<C>,
    store: SessionStore,
}

impl RequestOrchestrator<SentimentHttpClient> {
    /// Build an orchestrator talking HTTP to the configured service
    pub fn connect(config: ClientConfig) -> Result<Self> {
        let shape = config.response_shape;
        let client = SentimentHttpClient::new(config)?;
        Ok(Self::new(client, shape))
    }
}

impl<C: SentimentApi> RequestOrchestrator<C> {
    pub fn new(client: C, shape: ResponseShape) -> Self {
        Self::with_store(client, shape, SessionStore::new())
    }

    /// Use an existing store, e.g. one shared with a renderer
    pub fn with_store(client: C, shape: ResponseShape, store: SessionStore) -> Self {
        let client = Arc::new(client);
        let validator = ResponseValidatorImpl::new(shape);
        let history = HistoryFetcher::new(Arc::clone(&client), validator, store.clone());

        Self {
            client,
            validator,
            classifier: ErrorClassifierImpl::new(),
            history,
            store,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn state(&self) -> SessionState {
        self.store.snapshot()
    }

    pub fn distribution(&self) -> DistributionCounts {
        self.store.distribution()
    }

    /// Submit text for analysis
    pub async fn submit(&self, raw_text: &str) -> std::result::Result<AnalysisResult, ErrorDescription> {
        let request = match AnalysisRequest::from_input(raw_text) {
            Ok(request) => request,
            Err(failure) => {
                let description = self.classifier.classify(&failure);
                debug!("rejected blank input");
                self.store
                    .record(SessionEvent::InputRejected(description.clone()));
                return Err(description);
            }
        };

        if self.store.dispatch(SessionEvent::SubmitStarted).is_err() {
            debug!("submission refused, another analysis is in flight");
            return Err(self.classifier.classify(&SentimentError::SubmissionInFlight));
        }
        let mut in_flight = InFlight::new(&self.store);

        info!(chars = request.text.chars().count(), "submitting text for analysis");
        let outcome = self
            .client
            .analyze(&request)
            .await
            .and_then(|response| self.validator.validate_analysis(&response));
        drop(request);

        match outcome {
            Ok(result) => {
                info!(sentiment = %result.sentiment, polarity = ?result.polarity, "analysis succeeded");
                in_flight.complete(SessionEvent::AnalyzeSucceeded(result.clone()));

                // A failed refresh is recorded in the session but does not fail the submit
                if let Err(description) = self.history.fetch().await {
                    warn!(kind = %description.kind, "history refresh after analysis failed");
                }
                Ok(result)
            }
            Err(failure) => {
                let description = self.classifier.classify(&failure);
                warn!(kind = %description.kind, error = %failure, "analysis failed");
                in_flight.complete(SessionEvent::AnalyzeFailed(description.clone()));
                Err(description)
            }
        }
    }

    /// Manual or initial history load
    pub async fn refresh_history(&self) -> std::result::Result<HistorySnapshot, ErrorDescription> {
        self.history.fetch().await
    }
}

/// Returns the session to `Idle` if a submit future is dropped mid-flight
struct InFlight<'a> {
    store: &'a SessionStore,
    done: bool,
}

impl<'a> InFlight<'a> {
    fn new(store: &'a SessionStore) -> Self {
        Self { store, done: false }
    }

    fn complete(&mut self, event: SessionEvent) {
        self.done = true;
        self.store.record(event);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.done {
            warn!("analysis abandoned before completion");
            self.store.record(SessionEvent::SubmitAbandoned);
        }
    }
}
