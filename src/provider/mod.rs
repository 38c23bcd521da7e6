//! Wallet provider integration subsystem.
//!
//! # Data Flow
//! ```text
//! ProviderConfig (host, API key, timeouts)
//!     → client.rs (authenticated HTTP calls with timeouts)
//!     → ledger.rs / wallet.rs (typed responses)
//!     → types.rs (typed errors for every failure category)
//! ```
//!
//! # Security Constraints
//! - API key only from explicit configuration, never read here from the environment
//! - Never log wallet secrets or the API key
//! - Every call has a finite timeout

pub mod client;
pub mod ledger;
pub mod types;
pub mod wallet;

pub use client::WalletProviderClient;
pub use ledger::{Customer, LedgerAccount, LedgerAccountRequest};
pub use types::{ProviderConfig, WalletProviderError, WalletProviderResult};
pub use wallet::{WalletCredential, WalletSecret};
