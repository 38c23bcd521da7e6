//! Wallet credentials returned by the provider.
//!
//! # Security
//! - The secret is never logged, printed through `Debug`/`Display`, or serialized
//! - Memory holding the secret is zeroized on drop
//! - Reading the secret requires an explicit `expose_secret()` call

use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

const REDACTED: &str = "[REDACTED]";

/// Private key or mnemonic controlling a wallet.
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct WalletSecret(String);

impl WalletSecret {
    /// Wrap a raw secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Borrow the raw secret.
    ///
    /// The caller takes over responsibility for never persisting it
    /// unencrypted or displaying it again after initial delivery.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for WalletSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTED)
    }
}

impl std::fmt::Display for WalletSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTED)
    }
}

/// A freshly generated wallet: public address plus its secret.
#[derive(Clone, Deserialize)]
pub struct WalletCredential {
    /// Public wallet address.
    pub address: String,
    /// Private key / mnemonic.
    pub secret: WalletSecret,
}

impl WalletCredential {
    /// Get the wallet's address.
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl std::fmt::Debug for WalletCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletCredential")
            .field("address", &self.address)
            .field("secret", &self.secret)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let wallet = WalletCredential {
            address: "ALGO_ADDR".to_string(),
            secret: WalletSecret::new("hunter2 mnemonic words"),
        };
        let rendered = format!("{:?}", wallet);
        assert!(rendered.contains("ALGO_ADDR"));
        assert!(rendered.contains(REDACTED));
        assert!(!rendered.contains("hunter2"));
        assert_eq!(wallet.secret.to_string(), REDACTED);
    }

    #[test]
    fn test_deserialize_from_provider_shape() {
        let wallet: WalletCredential =
            serde_json::from_str(r#"{"address":"A","secret":"S"}"#).unwrap();
        assert_eq!(wallet.address(), "A");
        assert_eq!(wallet.secret.expose_secret(), "S");
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let result = serde_json::from_str::<WalletCredential>(r#"{"address":"A"}"#);
        assert!(result.is_err());
    }
}
