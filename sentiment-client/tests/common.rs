//! Shared helpers for sentiment-client integration tests

#![allow(dead_code)]

use sentiment_client::{ClientConfig, RequestOrchestrator, ResponseShape, SentimentHttpClient};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Configuration pointing at a mock server
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .base_url(server.uri())
        .analyze_timeout(1)
        .history_timeout(1)
        .build()
        .expect("valid test config")
}

pub fn orchestrator_for(server: &MockServer) -> RequestOrchestrator<SentimentHttpClient> {
    RequestOrchestrator::connect(config_for(server)).expect("client builds")
}

pub fn flat_orchestrator_for(server: &MockServer) -> RequestOrchestrator<SentimentHttpClient> {
    let mut config = config_for(server);
    config.response_shape = ResponseShape::Flat;
    RequestOrchestrator::connect(config).expect("client builds")
}

pub fn entry(text: &str, sentiment: &str, polarity: f64) -> Value {
    json!({ "text": text, "sentiment": sentiment, "polarity": polarity })
}

pub fn wrapped(data: Value) -> Value {
    json!({ "data": data })
}

pub async fn mount_analyze(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(template)
        .mount(server)
        .await;
}

pub async fn mount_history(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(template)
        .mount(server)
        .await;
}

/// History that answers once, then falls through to later mocks
pub async fn mount_history_once(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(template)
        .up_to_n_times(1)
        .with_priority(1)
        .mount(server)
        .await;
}

/// A response slower than the 1s test timeout
pub fn too_slow(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_json(body)
        .set_delay(Duration::from_secs(3))
}

/// Base URL of a local port that was just released, so nothing listens on it
pub fn closed_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    format!("http://127.0.0.1:{port}")
}

/// Requests the mock server received for a path
pub async fn requests_to(server: &MockServer, request_path: &str) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == request_path)
        .collect()
}
