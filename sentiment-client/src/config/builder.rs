use crate::config::types::{ClientConfig, ResponseShape};
use crate::error::Result;
use std::collections::HashMap;

/// Builder for ClientConfig to improve API ergonomics
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new config builder seeded with defaults
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Set the service base URL
    #[must_use]
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the analyze timeout in seconds
    #[must_use]
    pub fn analyze_timeout(mut self, seconds: u64) -> Self {
        self.config.analyze_timeout_seconds = seconds;
        self
    }

    /// Set the history timeout in seconds
    #[must_use]
    pub fn history_timeout(mut self, seconds: u64) -> Self {
        self.config.history_timeout_seconds = seconds;
        self
    }

    /// Choose the accepted analyze response shape
    #[must_use]
    pub fn response_shape(mut self, shape: ResponseShape) -> Self {
        self.config.response_shape = shape;
        self
    }

    /// Add a header sent with every request
    #[must_use]
    pub fn header<S: Into<String>>(mut self, key: S, value: S) -> Self {
        self.config
            .headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ClientConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
