//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (TATUM_API_KEY, TATUM_API_ENDPOINT, ...)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → ProviderConfig handed to WalletProviderClient::new
//! ```
//!
//! # Design Decisions
//! - The library never reads the environment; only `load_config` does
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use schema::ObservabilityConfig;
pub use schema::ProviderConfig;
