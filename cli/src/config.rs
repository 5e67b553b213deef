use crate::error::{CliError, Result};
use sentiment_client::ClientConfig;
use std::path::Path;
use tracing::{debug, warn};

/// Values given on the command line that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout: Option<u64>,
}

/// Load the configuration file (defaults when it is missing) and apply overrides
pub fn resolve(path: &str, overrides: &Overrides) -> Result<ClientConfig> {
    let path = Path::new(path);
    let mut config = if path.exists() {
        debug!(path = %path.display(), "loading configuration");
        ClientConfig::load_with_validation(path)
            .map_err(|e| CliError::from(e).with_context("Failed to load configuration"))?
    } else {
        warn!(path = %path.display(), "configuration file not found, using defaults");
        ClientConfig::default()
    };

    if let Some(base_url) = &overrides.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(seconds) = overrides.timeout {
        config.analyze_timeout_seconds = seconds;
        config.history_timeout_seconds = seconds;
    }

    config
        .validate()
        .map_err(|e| CliError::from(e).with_context("Invalid command line override"))?;
    Ok(config)
}
