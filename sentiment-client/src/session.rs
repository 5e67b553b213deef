//! Session state and the event-driven state machine behind it.
//!
//! `Idle --SubmitStarted--> Submitting --AnalyzeSucceeded--> Idle`
//! `Submitting --AnalyzeFailed--> Error --SubmitStarted--> Submitting`
//!
//! History events never move the phase; they only replace the snapshot or
//! record an error.

use crate::analysis::aggregate;
use crate::types::{AnalysisResult, DistributionCounts, ErrorDescription, HistorySnapshot};
use parking_lot::RwLock;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{trace, warn};

/// Request lifecycle phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Error,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "Idle",
            Self::Submitting => "Submitting",
            Self::Error => "Error",
        };
        f.write_str(name)
    }
}

/// Discrete inputs to the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Blank input rejected before any I/O
    InputRejected(ErrorDescription),
    SubmitStarted,
    AnalyzeSucceeded(AnalysisResult),
    AnalyzeFailed(ErrorDescription),
    /// The submitting future was dropped before it completed
    SubmitAbandoned,
    FetchSucceeded(HistorySnapshot),
    FetchFailed(ErrorDescription),
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::InputRejected(_) => "InputRejected",
            Self::SubmitStarted => "SubmitStarted",
            Self::AnalyzeSucceeded(_) => "AnalyzeSucceeded",
            Self::AnalyzeFailed(_) => "AnalyzeFailed",
            Self::SubmitAbandoned => "SubmitAbandoned",
            Self::FetchSucceeded(_) => "FetchSucceeded",
            Self::FetchFailed(_) => "FetchFailed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal transition: {event} while {phase}")]
pub struct TransitionError {
    pub phase: Phase,
    pub event: &'static str,
}

/// Everything the dashboard renders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub phase: Phase,
    pub last_result: Option<AnalysisResult>,
    pub history: HistorySnapshot,
    pub last_error: Option<ErrorDescription>,
}

impl SessionState {
    /// Apply one event; illegal events leave the state untouched
    pub fn apply(&mut self, event: SessionEvent) -> Result<(), TransitionError> {
        let phase = self.phase;
        let illegal = |event: &SessionEvent| TransitionError {
            phase,
            event: event.name(),
        };

        match event {
            // The in-flight submission owns the outcome while Submitting
            SessionEvent::InputRejected(description) => {
                if phase != Phase::Submitting {
                    self.phase = Phase::Idle;
                    self.last_error = Some(description);
                }
            }
            SessionEvent::SubmitStarted => {
                if phase == Phase::Submitting {
                    return Err(illegal(&SessionEvent::SubmitStarted));
                }
                self.phase = Phase::Submitting;
                self.last_error = None;
            }
            SessionEvent::AnalyzeSucceeded(result) => {
                if phase != Phase::Submitting {
                    return Err(illegal(&SessionEvent::AnalyzeSucceeded(result)));
                }
                self.phase = Phase::Idle;
                self.last_result = Some(result);
            }
            SessionEvent::AnalyzeFailed(description) => {
                if phase != Phase::Submitting {
                    return Err(illegal(&SessionEvent::AnalyzeFailed(description)));
                }
                self.phase = Phase::Error;
                self.last_error = Some(description);
            }
            SessionEvent::SubmitAbandoned => {
                if phase != Phase::Submitting {
                    return Err(illegal(&SessionEvent::SubmitAbandoned));
                }
                self.phase = Phase::Idle;
            }
            SessionEvent::FetchSucceeded(snapshot) => {
                self.history = snapshot;
            }
            SessionEvent::FetchFailed(description) => {
                self.last_error = Some(description);
            }
        }

        trace!(from = %phase, to = %self.phase, "session transition");
        Ok(())
    }

    /// Distribution of the current snapshot, recomputed on every call
    pub fn distribution(&self) -> DistributionCounts {
        aggregate(&self.history)
    }
}

/// Shared handle to the session state.
///
/// Writers replace whole values under the lock, so readers never see a
/// half-applied event.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> SessionState {
        self.inner.read().clone()
    }

    pub fn phase(&self) -> Phase {
        self.inner.read().phase
    }

    pub fn history(&self) -> HistorySnapshot {
        self.inner.read().history.clone()
    }

    pub fn last_result(&self) -> Option<AnalysisResult> {
        self.inner.read().last_result.clone()
    }

    pub fn last_error(&self) -> Option<ErrorDescription> {
        self.inner.read().last_error.clone()
    }

    pub fn distribution(&self) -> DistributionCounts {
        aggregate(&self.history())
    }

    /// Apply an event atomically, reporting illegal transitions
    pub fn dispatch(&self, event: SessionEvent) -> Result<(), TransitionError> {
        self.inner.write().apply(event)
    }

    /// Apply an event that is legal by construction; a rejection is only logged
    pub fn record(&self, event: SessionEvent) {
        if let Err(err) = self.dispatch(event) {
            warn!(error = %err, "dropped session event");
        }
    }
}
