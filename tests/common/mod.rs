//! Shared utilities for provider integration tests.

use axum::{
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use futures_util::future::{BoxFuture, FutureExt};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use wallet_provider::{ProviderConfig, WalletProviderClient};

/// API key the mock expects to see on every request.
pub const TEST_API_KEY: &str = "t-66a8d2f1-test-key";

/// One request as seen by the mock provider.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
    pub peer: SocketAddr,
}

type Responder = Arc<dyn Fn() -> BoxFuture<'static, (u16, String)> + Send + Sync>;

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responder: Responder,
}

/// Handle to a running mock provider.
pub struct MockProvider {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockProvider {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn config(&self) -> ProviderConfig {
        provider_config(&self.url())
    }

    pub fn client(&self) -> WalletProviderClient {
        WalletProviderClient::new(self.config()).unwrap()
    }
}

/// Client settings pointing at `url`, bypassing any system proxy.
pub fn provider_config(url: &str) -> ProviderConfig {
    let mut config = ProviderConfig::new(TEST_API_KEY).with_endpoint_host(url);
    config.use_system_proxy = false;
    config
}

/// Start a mock provider that returns a fixed response.
pub async fn start_mock_provider(status: u16, body: &'static str) -> MockProvider {
    start_programmable_provider(move || async move { (status, body.to_string()) }).await
}

/// Start a programmable mock provider with async support.
pub async fn start_programmable_provider<F, Fut>(f: F) -> MockProvider
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));

    let state = MockState {
        requests: requests.clone(),
        responder: Arc::new(move || f().boxed()),
    };
    let app = Router::new().fallback(record).with_state(state);

    tokio::spawn(async move {
        let _ = axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await;
    });

    MockProvider { addr, requests }
}

async fn record(
    State(state): State<MockState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body,
        peer,
    });

    let (status, body) = (state.responder)().await;
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

/// An address with nothing listening on it.
#[allow(dead_code)]
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
