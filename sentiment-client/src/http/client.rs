use crate::config::ClientConfig;
use crate::error::{Result, SentimentError};
use crate::http::{RequestBuilderImpl, ResponseConverterImpl, ANALYZE_PATH, HISTORY_PATH};
use crate::traits::{RequestBuilder, ResponseConverter, SentimentApi};
use crate::types::{AnalysisRequest, HttpResponse};
use reqwest::{Client, Request};
use tracing::debug;

/// reqwest-backed client for the scoring service
#[derive(Clone)]
pub struct SentimentHttpClient {
    client: Client,
    request_builder: RequestBuilderImpl,
    response_converter: ResponseConverterImpl,
}

impl SentimentHttpClient {
    /// Create a new HTTP client with configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        // Per-request timeouts are set by the request builder
        let client = Client::builder()
            .user_agent(concat!("sentiment-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let request_builder = RequestBuilderImpl::new(client.clone(), config);
        let response_converter = ResponseConverterImpl::new();

        Ok(Self {
            client,
            request_builder,
            response_converter,
        })
    }

    async fn send(&self, endpoint: &str, request: Request) -> Result<HttpResponse> {
        debug!(endpoint, url = %request.url(), "sending request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| SentimentError::from_request(endpoint, e))?;

        let response = self
            .response_converter
            .convert_response(endpoint, response)
            .await?;
        debug!(endpoint, status = response.status, bytes = response.body.len(), "received response");
        Ok(response)
    }
}

impl SentimentApi for SentimentHttpClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<HttpResponse> {
        let request = self.request_builder.build_analyze(request)?;
        self.send(ANALYZE_PATH, request).await
    }

    async fn history(&self) -> Result<HttpResponse> {
        let request = self.request_builder.build_history()?;
        self.send(HISTORY_PATH, request).await
    }
}
