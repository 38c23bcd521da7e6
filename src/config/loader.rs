//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable carrying the provider API key.
pub const API_KEY_ENV_VAR: &str = "TATUM_API_KEY";

/// Environment variable overriding the provider host.
pub const ENDPOINT_ENV_VAR: &str = "TATUM_API_ENDPOINT";

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV_VAR: &str = "WALLET_PROVIDER_LOG_LEVEL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse configuration from a TOML file without validating it.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Apply overrides from a variable lookup (normally `std::env::var`).
///
/// Blank values are ignored so an exported-but-empty variable does not wipe
/// out a key from the file.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(api_key) = present(API_KEY_ENV_VAR) {
        config.provider.api_key = api_key;
    }
    if let Some(host) = present(ENDPOINT_ENV_VAR) {
        config.provider.endpoint_host = host;
    }
    if let Some(level) = present(LOG_LEVEL_ENV_VAR) {
        config.observability.log_level = level;
    }
}

/// Load configuration from an optional TOML file plus the process
/// environment, then validate it.
///
/// `overrides` runs after the environment and before validation, so callers
/// such as command-line flags get the last word.
pub fn load_config<F>(path: Option<&Path>, overrides: F) -> Result<AppConfig, ConfigError>
where
    F: FnOnce(&mut AppConfig),
{
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    overrides(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
