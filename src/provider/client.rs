//! Wallet provider HTTP client.
//!
//! # Responsibilities
//! - Create ledger accounts, generate wallets, fetch IPFS content
//! - Attach the static API key to every request
//! - Enforce connect and request timeouts
//! - Map every failure onto the typed error taxonomy
//!
//! # Design Decisions
//! - Idle pooling is disabled, so each call uses a fresh connection that is
//!   closed on every exit path
//! - No retries: a provider failure is surfaced to the caller immediately
//! - Only immutable state, so the client can be cloned and shared freely

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::time::{Duration, Instant};
use tracing::field::Empty;
use tracing::{Instrument, Span};
use url::Url;
use uuid::Uuid;

use crate::config::validation::validate_provider;
use crate::observability::metrics;
use crate::provider::ledger::{LedgerAccount, LedgerAccountRequest};
use crate::provider::types::{ProviderConfig, WalletProviderError, WalletProviderResult};
use crate::provider::wallet::WalletCredential;

/// Header carrying the provider API key.
pub const API_KEY_HEADER: &str = "x-api-key";

const LEDGER_ACCOUNT_PATH: &[&str] = &["v3", "ledger", "account"];
const WALLET_PATH: &[&str] = &["v3", "algorand", "wallet"];
const IPFS_PATH: &[&str] = &["v3", "ipfs"];

/// Stateless client for the external wallet provider.
#[derive(Clone)]
pub struct WalletProviderClient {
    /// HTTP client with auth headers and timeouts baked in.
    http: Client,
    /// Resolved provider base URL.
    base_url: Url,
    /// Configuration.
    config: ProviderConfig,
}

impl WalletProviderClient {
    /// Create a new provider client.
    ///
    /// Fails with [`WalletProviderError::Configuration`] before any network
    /// activity if the API key is missing or a placeholder, the endpoint host
    /// is unusable, or a timeout is zero.
    pub fn new(config: ProviderConfig) -> WalletProviderResult<Self> {
        let base_url = validate_provider(&config).map_err(|errors| {
            WalletProviderError::Configuration(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        })?;

        let mut api_key = HeaderValue::from_str(config.api_key.trim()).map_err(|_| {
            WalletProviderError::Configuration(
                "API key contains characters not allowed in a header".to_string(),
            )
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(0);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().map_err(|e| {
            WalletProviderError::Configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        tracing::info!(
            base_url = %base_url,
            request_timeout_secs = config.request_timeout_secs,
            "Wallet provider client initialized"
        );

        Ok(Self {
            http,
            base_url,
            config,
        })
    }

    /// Create a ledger (virtual) account for tracking balances.
    pub async fn create_ledger_account(
        &self,
        request: &LedgerAccountRequest,
    ) -> WalletProviderResult<LedgerAccount> {
        const OPERATION: &str = "create_ledger_account";

        if request.currency.trim().is_empty() {
            return Err(reject(OPERATION, "currency must not be empty"));
        }

        let url = self.endpoint(LEDGER_ACCOUNT_PATH, None)?;
        let account: LedgerAccount = self
            .execute(OPERATION, self.http.post(url).json(request))
            .await?;

        tracing::info!(account_id = %account.account_id, "Ledger account created");
        Ok(account)
    }

    /// Generate a new blockchain wallet.
    ///
    /// The returned secret is delivered to the caller only; it is never
    /// logged here and must not be persisted unencrypted.
    pub async fn generate_wallet(&self) -> WalletProviderResult<WalletCredential> {
        let url = self.endpoint(WALLET_PATH, None)?;
        let wallet: WalletCredential = self
            .execute("generate_wallet", self.http.get(url))
            .await?;

        tracing::info!(address = %wallet.address, "Wallet generated");
        Ok(wallet)
    }

    /// Fetch a JSON document from the provider's IPFS gateway.
    pub async fn fetch_content(&self, id: &str) -> WalletProviderResult<Map<String, Value>> {
        const OPERATION: &str = "fetch_content";

        let id = id.trim();
        if id.is_empty() {
            return Err(reject(OPERATION, "content id must not be empty"));
        }

        let url = self.endpoint(IPFS_PATH, Some(id))?;
        let content: Map<String, Value> = self
            .execute(OPERATION, self.http.get(url))
            .await?;

        tracing::info!(content_id = %id, fields = content.len(), "Content retrieved");
        Ok(content)
    }

    /// Get the resolved provider base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Build an endpoint URL under the base URL. `id` is appended as a
    /// single percent-encoded segment.
    fn endpoint(&self, segments: &[&str], id: Option<&str>) -> WalletProviderResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                WalletProviderError::Configuration(format!(
                    "Endpoint '{}' cannot carry a path",
                    self.base_url
                ))
            })?;
            path.pop_if_empty().extend(segments);
            if let Some(id) = id {
                path.push(id);
            }
        }
        Ok(url)
    }

    /// Run one request/response exchange, recording logs and metrics.
    ///
    /// The `provider_request` span carries method, path, status and
    /// elapsed time; status stays empty when no response arrived.
    async fn execute<T>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> WalletProviderResult<T>
    where
        T: DeserializeOwned,
    {
        let started = Instant::now();
        let request = match request.build() {
            Ok(request) => request,
            Err(e) => {
                metrics::record_request(operation, "transport", started);
                return Err(WalletProviderError::Transport(e));
            }
        };

        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "provider_request",
            operation,
            %request_id,
            method = %request.method(),
            path = request.url().path(),
            status = Empty,
            elapsed_ms = Empty
        );

        let result = self.round_trip(request).instrument(span.clone()).await;
        span.record("elapsed_ms", started.elapsed().as_millis() as u64);

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        metrics::record_request(operation, outcome, started);
        result
    }

    async fn round_trip<T>(&self, request: Request) -> WalletProviderResult<T>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("Sending provider request");

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    timeout = e.is_timeout(),
                    error = %e,
                    "Provider request failed"
                );
                return Err(WalletProviderError::Transport(e));
            }
        };

        let status = response.status();
        Span::current().record("status", status.as_u16());
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("Provider returned error status");
            return Err(WalletProviderError::Provider {
                status_code: status.as_u16(),
                body,
            });
        }

        // Body may hold a wallet secret: log its size only.
        tracing::debug!(body_len = body.len(), "Provider response received");

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, "Provider response could not be decoded");
            WalletProviderError::Decode(e)
        })
    }
}

/// Fail a call on bad caller input before anything goes on the wire.
fn reject(operation: &'static str, message: &str) -> WalletProviderError {
    metrics::record_request(operation, "validation", Instant::now());
    WalletProviderError::Validation(message.to_string())
}

impl std::fmt::Debug for WalletProviderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletProviderClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout_secs", &self.config.request_timeout_secs)
            .finish()
    }
}
