use crate::config::ClientConfig;
use crate::error::Result;
use crate::traits::RequestBuilder;
use crate::types::AnalysisRequest;
use reqwest::{Client, Request};

pub const ANALYZE_PATH: &str = "/analyze";
pub const HISTORY_PATH: &str = "/history";

/// Implementation of RequestBuilder trait
#[derive(Clone)]
pub struct RequestBuilderImpl {
    client: Client,
    config: ClientConfig,
}

impl RequestBuilderImpl {
    /// Create a new request builder
    pub fn new(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Apply the configured headers
    fn add_headers(&self, request_builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let mut rb = request_builder;
        if let Some(headers) = &self.config.headers {
            for (key, value) in headers {
                rb = rb.header(key, value);
            }
        }
        rb
    }
}

impl RequestBuilder for RequestBuilderImpl {
    fn build_analyze(&self, request: &AnalysisRequest) -> Result<Request> {
        let url = self.config.endpoint(ANALYZE_PATH);
        let request_builder = self
            .client
            .post(url)
            .timeout(self.config.analyze_timeout())
            .json(request);

        self.add_headers(request_builder).build().map_err(Into::into)
    }

    fn build_history(&self) -> Result<Request> {
        let url = self.config.endpoint(HISTORY_PATH);
        let request_builder = self
            .client
            .get(url)
            .timeout(self.config.history_timeout());

        self.add_headers(request_builder).build().map_err(Into::into)
    }
}
