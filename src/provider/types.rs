//! Provider error taxonomy and shared result type.

use thiserror::Error;

// Re-export ProviderConfig from config module to avoid duplication
pub use crate::config::schema::ProviderConfig;

/// Errors that can occur while talking to the wallet provider.
#[derive(Debug, Error)]
pub enum WalletProviderError {
    /// Missing or unusable client configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller-supplied input failed a precondition.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Provider answered with a non-success status.
    #[error("Provider returned status {status_code}: {body}")]
    Provider { status_code: u16, body: String },

    /// Response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Connection, DNS or timeout failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl WalletProviderError {
    /// True when the request gave up because a timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, WalletProviderError::Transport(e) if e.is_timeout())
    }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            WalletProviderError::Configuration(_) => "configuration",
            WalletProviderError::Validation(_) => "validation",
            WalletProviderError::Provider { .. } => "provider",
            WalletProviderError::Decode(_) => "decode",
            WalletProviderError::Transport(_) => "transport",
        }
    }
}

/// Result type for provider operations.
pub type WalletProviderResult<T> = Result<T, WalletProviderError>;
