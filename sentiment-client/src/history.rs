use crate::analysis::{ErrorClassifier, ErrorClassifierImpl};
use crate::session::{SessionEvent, SessionStore};
use crate::traits::SentimentApi;
use crate::types::{ErrorDescription, HistorySnapshot};
use crate::validation::ResponseValidatorImpl;
use std::sync::Arc;
use tracing::{info, warn};

/// Reads `GET /history` and swaps the result into the session.
///
/// A failed fetch never touches the held snapshot; it only records the error.
pub struct HistoryFetcher<C> {
    client: Arc<C>,
    validator: ResponseValidatorImpl,
    classifier: ErrorClassifierImpl,
    store: SessionStore,
}

impl<C: SentimentApi> HistoryFetcher<C> {
    pub fn new(client: Arc<C>, validator: ResponseValidatorImpl, store: SessionStore) -> Self {
        Self {
            client,
            validator,
            classifier: ErrorClassifierImpl::new(),
            store,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub async fn fetch(&self) -> Result<HistorySnapshot, ErrorDescription> {
        let outcome = self
            .client
            .history()
            .await
            .and_then(|response| self.validator.validate_history(&response));

        match outcome {
            Ok(snapshot) => {
                info!(entries = snapshot.len(), "history refreshed");
                self.store
                    .record(SessionEvent::FetchSucceeded(snapshot.clone()));
                Ok(snapshot)
            }
            Err(failure) => {
                let description = self.classifier.classify(&failure);
                warn!(kind = %description.kind, error = %failure, "history fetch failed");
                self.store
                    .record(SessionEvent::FetchFailed(description.clone()));
                Err(description)
            }
        }
    }
}
