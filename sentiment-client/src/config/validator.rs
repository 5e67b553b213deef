use crate::config::types::ClientConfig;
use crate::error::{Result, SentimentError};
use crate::traits::ConfigValidator;
use reqwest::header::{HeaderName, HeaderValue};
use std::path::Path;
use url::Url;

/// Configuration validator implementation
pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    type Config = ClientConfig;

    /// Validate configuration (uses enhanced validation with default context)
    fn validate(&self, config: &ClientConfig) -> Result<()> {
        self.validate_with_context(config, "configuration")
    }
}

impl ConfigValidatorImpl {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validation with the config source named in errors
    pub fn validate_with_context<P: AsRef<Path>>(
        &self,
        config: &ClientConfig,
        config_path: P,
    ) -> Result<()> {
        let config_path_str = config_path.as_ref().to_string_lossy();

        let url = Url::parse(&config.base_url).map_err(|e| {
            SentimentError::invalid_config(format!(
                "Invalid base_url '{}' in {}: {}",
                config.base_url, config_path_str, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(SentimentError::invalid_config(format!(
                "base_url in {} must use http or https, got '{}'",
                config_path_str,
                url.scheme()
            )));
        }

        if config.analyze_timeout_seconds == 0 || config.history_timeout_seconds == 0 {
            return Err(SentimentError::invalid_config(format!(
                "Timeouts in {} must be greater than zero",
                config_path_str
            )));
        }

        for (name, value) in config.headers.iter().flatten() {
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                SentimentError::invalid_config(format!(
                    "Invalid header name '{}' in {}: {}",
                    name, config_path_str, e
                ))
            })?;
            HeaderValue::from_str(value).map_err(|e| {
                SentimentError::invalid_config(format!(
                    "Invalid value for header '{}' in {}: {}",
                    name, config_path_str, e
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for ConfigValidatorImpl {
    fn default() -> Self {
        Self::new()
    }
}
