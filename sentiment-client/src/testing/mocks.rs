use crate::error::{Result, SentimentError};
use crate::http::{ANALYZE_PATH, HISTORY_PATH};
use crate::session::{SessionState, SessionStore};
use crate::traits::SentimentApi;
use crate::types::{AnalysisRequest, HttpResponse};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::Notify;

/// One scripted reply
#[derive(Debug, Clone)]
pub enum MockReply {
    Response(HttpResponse),
    Timeout,
    ConnectionRefused,
}

impl MockReply {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::Response(HttpResponse::new(
            status,
            HashMap::new(),
            body.to_string(),
            "http://mock.local".to_string(),
        ))
    }

    fn into_result(self, endpoint: &str) -> Result<HttpResponse> {
        match self {
            Self::Response(response) => Ok(response),
            Self::Timeout => Err(SentimentError::Transport {
                endpoint: endpoint.to_string(),
                timed_out: true,
                message: "operation timed out".to_string(),
            }),
            Self::ConnectionRefused => Err(SentimentError::Transport {
                endpoint: endpoint.to_string(),
                timed_out: false,
                message: "connection refused".to_string(),
            }),
        }
    }
}

/// Calls seen by the mock, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Analyze(String),
    History,
}

#[derive(Default)]
struct MockState {
    analyze_replies: VecDeque<MockReply>,
    history_replies: VecDeque<MockReply>,
    calls: Vec<MockCall>,
    analyze_gate: Option<Arc<Notify>>,
    history_gates: VecDeque<Arc<Notify>>,
    observed_store: Option<SessionStore>,
    history_observations: Vec<SessionState>,
}

/// Scripted scoring service for testing.
///
/// Clones share the same script and call log. With no reply queued, analyze
/// refuses the connection and history returns an empty list.
#[derive(Clone, Default)]
pub struct MockSentimentApi {
    inner: Arc<Mutex<MockState>>,
}

impl MockSentimentApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyze_reply(self, reply: MockReply) -> Self {
        self.inner.lock().analyze_replies.push_back(reply);
        self
    }

    pub fn history_reply(self, reply: MockReply) -> Self {
        self.inner.lock().history_replies.push_back(reply);
        self
    }

    /// Hold every analyze call until the gate is notified
    pub fn with_analyze_gate(self, gate: Arc<Notify>) -> Self {
        self.inner.lock().analyze_gate = Some(gate);
        self
    }

    /// Hold the next ungated history call until the gate is notified.
    ///
    /// Gates are consumed in call order, like replies; later calls run freely.
    pub fn with_history_gate(self, gate: Arc<Notify>) -> Self {
        self.inner.lock().history_gates.push_back(gate);
        self
    }

    /// Capture the session state each time history is requested
    pub fn observe(self, store: SessionStore) -> Self {
        self.inner.lock().observed_store = Some(store);
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.inner.lock().calls.clone()
    }

    pub fn analyze_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, MockCall::Analyze(_)))
            .count()
    }

    pub fn history_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, MockCall::History))
            .count()
    }

    pub fn history_observations(&self) -> Vec<SessionState> {
        self.inner.lock().history_observations.clone()
    }
}

impl SentimentApi for MockSentimentApi {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<HttpResponse> {
        let gate = {
            let mut state = self.inner.lock();
            state.calls.push(MockCall::Analyze(request.text.clone()));
            state.analyze_gate.clone()
        };

        if let Some(gate) = gate {
            gate.notified().await;
        }

        let reply = self.inner.lock().analyze_replies.pop_front();
        reply
            .unwrap_or(MockReply::ConnectionRefused)
            .into_result(ANALYZE_PATH)
    }

    async fn history(&self) -> Result<HttpResponse> {
        let (reply, gate) = {
            let mut state = self.inner.lock();
            state.calls.push(MockCall::History);
            if let Some(store) = state.observed_store.clone() {
                state.history_observations.push(store.snapshot());
            }
            (state.history_replies.pop_front(), state.history_gates.pop_front())
        };

        if let Some(gate) = gate {
            gate.notified().await;
        }

        reply
            .unwrap_or_else(|| MockReply::ok(r#"{"data": []}"#))
            .into_result(HISTORY_PATH)
    }
}
