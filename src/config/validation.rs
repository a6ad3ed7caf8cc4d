use crate::config::types::{ApiConfig, ClientConfig, Config, PrefsConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_api_config(&config.api)?;
    validate_client_config(&config.client)?;
    validate_prefs_config(&config.prefs)?;
    Ok(())
}

/// Validates API endpoints and edition identifiers
fn validate_api_config(config: &ApiConfig) -> Result<(), ConfigError> {
    validate_http_url("base-url", &config.base_url)?;

    if let Some(wbw_url) = &config.word_by_word_url {
        validate_http_url("word-by-word-url", wbw_url)?;
    }

    validate_edition("arabic-edition", &config.arabic_edition)?;
    validate_edition("translation-edition", &config.translation_edition)?;
    validate_edition("transliteration-edition", &config.transliteration_edition)?;

    Ok(())
}

/// Validates HTTP client configuration
fn validate_client_config(config: &ClientConfig) -> Result<(), ConfigError> {
    if config.reader_name.is_empty() {
        return Err(ConfigError::Validation(
            "reader-name cannot be empty".to_string(),
        ));
    }

    if !config
        .reader_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "reader-name must contain only alphanumeric characters and hyphens, got '{}'",
            config.reader_name
        )));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates preference persistence configuration
fn validate_prefs_config(config: &PrefsConfig) -> Result<(), ConfigError> {
    if config.path.is_empty() {
        return Err(ConfigError::Validation(
            "prefs path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that a URL parses and uses an HTTP scheme
fn validate_http_url(key: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", key, e)))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must use an http(s) scheme, got '{}'",
            key,
            url.scheme()
        )));
    }

    Ok(())
}

/// Validates an edition identifier (e.g. "en.sahih")
fn validate_edition(key: &str, identifier: &str) -> Result<(), ConfigError> {
    if identifier.is_empty() {
        return Err(ConfigError::Validation(format!("{} cannot be empty", key)));
    }

    if !identifier
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "{} contains invalid characters: '{}'",
            key, identifier
        )));
    }

    Ok(())
}
