//! Test doubles for the remote scoring service

#[cfg(any(test, feature = "testing"))]
pub mod mocks;

#[cfg(any(test, feature = "testing"))]
pub use mocks::{MockCall, MockReply, MockSentimentApi};
