//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client
//! and its command-line front end. All types derive Serde traits for
//! deserialization from config files.

use serde::{Deserialize, Serialize};

/// Default provider host (Tatum EU region).
pub const DEFAULT_ENDPOINT_HOST: &str = "api-eu1.tatum.io";

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Wallet provider connection settings.
    pub provider: ProviderConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Wallet provider connection settings.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Provider host (e.g., "api-eu1.tatum.io") or full base URL.
    pub endpoint_host: String,

    /// API key sent as `x-api-key` on every request.
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Total time allowed for one request/response exchange in seconds.
    pub request_timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Route requests through HTTP(S)_PROXY from the environment.
    pub use_system_proxy: bool,
}

impl ProviderConfig {
    /// Settings for the default host with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Replace the endpoint host.
    pub fn with_endpoint_host(mut self, endpoint_host: impl Into<String>) -> Self {
        self.endpoint_host = endpoint_host.into();
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint_host: DEFAULT_ENDPOINT_HOST.to_string(),
            // Must be supplied through the config file or TATUM_API_KEY.
            api_key: String::new(),
            request_timeout_secs: 30,
            connect_timeout_secs: 5,
            use_system_proxy: true,
        }
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("endpoint_host", &self.endpoint_host)
            .field("api_key", &"[REDACTED]")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("use_system_proxy", &self.use_system_proxy)
            .finish()
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error) or an env-filter directive.
    pub log_level: String,

    /// Record per-operation metrics into a Prometheus recorder.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
        }
    }
}
