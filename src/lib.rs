//! Client for a hosted ledger/wallet provider API.
//!
//! Creates ledger accounts, generates wallets and fetches IPFS content over
//! the provider's REST interface, with typed errors and redacted secrets.

pub mod config;
pub mod observability;
pub mod provider;

pub use config::{AppConfig, ProviderConfig};
pub use provider::{
    LedgerAccount, LedgerAccountRequest, WalletCredential, WalletProviderClient,
    WalletProviderError, WalletProviderResult,
};
