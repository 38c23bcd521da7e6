//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject missing or placeholder API keys
//! - Resolve the endpoint host into a base URL
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - The client runs the provider checks again at construction

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::config::schema::{AppConfig, ProviderConfig};

/// Sample values that ship in docs and templates instead of a real key.
const PLACEHOLDER_API_KEYS: &[&str] = &[
    "YOUR_API_KEY_HERE",
    "YOUR_API_KEY",
    "CHANGE_ME",
    "CHANGE_ME_IN_PRODUCTION",
    "CHANGEME",
    "<API-KEY>",
    "<API_KEY>",
];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// True when the key is blank or one of the well-known sample values.
pub fn is_placeholder_api_key(api_key: &str) -> bool {
    let key = api_key.trim();
    key.is_empty()
        || PLACEHOLDER_API_KEYS
            .iter()
            .any(|p| p.eq_ignore_ascii_case(key))
}

/// Turn an endpoint host into the base URL requests are built from.
///
/// Bare authorities get the `https` scheme; full `http(s)://` URLs are taken
/// as given.
pub fn parse_endpoint(endpoint_host: &str) -> Result<Url, String> {
    let host = endpoint_host.trim();
    if host.is_empty() {
        return Err("endpoint host must not be empty".to_string());
    }

    let candidate = if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    };

    let url = Url::parse(&candidate)
        .map_err(|e| format!("invalid endpoint host '{}': {}", host, e))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err(format!("endpoint '{}' has no host", host));
    }
    Ok(url)
}

/// Validate provider settings, returning the resolved base URL.
pub fn validate_provider(config: &ProviderConfig) -> Result<Url, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if is_placeholder_api_key(&config.api_key) {
        errors.push(ValidationError::new(
            "provider.api_key",
            "API key is missing or still a placeholder",
        ));
    }

    let base_url = match parse_endpoint(&config.endpoint_host) {
        Ok(url) => Some(url),
        Err(message) => {
            errors.push(ValidationError::new("provider.endpoint_host", message));
            None
        }
    };

    if config.request_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "provider.request_timeout_secs",
            "must be greater than zero",
        ));
    }
    if config.connect_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "provider.connect_timeout_secs",
            "must be greater than zero",
        ));
    }

    match base_url {
        Some(url) if errors.is_empty() => Ok(url),
        _ => Err(errors),
    }
}

/// Validate the whole configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = match validate_provider(&config.provider) {
        Ok(_) => Vec::new(),
        Err(errors) => errors,
    };

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("unrecognized log level '{}'", config.observability.log_level),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_keys() {
        assert!(is_placeholder_api_key(""));
        assert!(is_placeholder_api_key("   "));
        assert!(is_placeholder_api_key("YOUR_API_KEY_HERE"));
        assert!(is_placeholder_api_key("change_me_in_production"));
        assert!(!is_placeholder_api_key("t-5f3b2c1a-real-key"));
    }

    #[test]
    fn test_parse_endpoint_forms() {
        let url = parse_endpoint("api-eu1.tatum.io").unwrap();
        assert_eq!(url.as_str(), "https://api-eu1.tatum.io/");

        let url = parse_endpoint("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.port(), Some(8080));

        assert!(parse_endpoint("").is_err());
        assert!(parse_endpoint("ftp://example.com").is_err());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.provider.endpoint_host = "ftp://example.com".to_string();
        config.provider.request_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "provider.api_key",
                "provider.endpoint_host",
                "provider.request_timeout_secs"
            ]
        );
    }

    #[test]
    fn test_valid_config() {
        let mut config = AppConfig::default();
        config.provider.api_key = "t-real-key".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_bad_log_level() {
        let mut config = AppConfig::default();
        config.provider.api_key = "t-real-key".to_string();
        config.observability.log_level = "wallet_provider=loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "observability.log_level");
    }
}
