use crate::error::{Result, SentimentError};
use std::path::Path;

/// Generate the default sentiment.toml template
pub fn generate_default_config_template() -> String {
    r#"# Sentiment dashboard configuration

# Where the scoring service listens
base_url = "http://localhost:5000"

# Request timeouts in seconds
analyze_timeout_seconds = 5
history_timeout_seconds = 10

# Success body of POST /analyze:
#   "wrapped" -> { "data": { "text": ..., "sentiment": ..., "polarity": ... } }
#   "flat"    -> { "text": ..., "sentiment": ..., "polarity": ... }
response_shape = "wrapped"

# Headers sent with every request (optional)
[headers]
"Accept" = "application/json"
"#
    .to_string()
}

/// Write the default config file if it is missing (or when `overwrite` is set).
///
/// Returns `true` when a file was written.
pub fn ensure_config_file_exists<P: AsRef<Path>>(path: P, overwrite: bool) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() && !overwrite {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, generate_default_config_template()).map_err(|e| {
        SentimentError::invalid_config(format!("Failed to write {}: {}", path.display(), e))
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientConfig, ResponseShape};
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_and_validates() {
        let config: ClientConfig = toml::from_str(&generate_default_config_template()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.response_shape, ResponseShape::Wrapped);
    }

    #[test]
    fn test_ensure_config_file_exists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("sentiment.toml");

        assert!(ensure_config_file_exists(&path, false).unwrap());
        assert!(path.exists());
        assert!(!ensure_config_file_exists(&path, false).unwrap());
        assert!(ensure_config_file_exists(&path, true).unwrap());
    }
}
