//! Metrics collection and exposition.
//!
//! # Metrics
//! - `wallet_provider_requests_total` (counter): calls by operation, outcome
//! - `wallet_provider_request_duration_seconds` (histogram): latency per operation
//!
//! Outcome is `success` or the error kind (`provider`, `decode`, `transport`,
//! `validation`).

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Install a global Prometheus recorder and return a handle for rendering.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    tracing::debug!("Prometheus recorder installed");
    Ok(handle)
}

/// Record one finished provider call.
pub fn record_request(operation: &'static str, outcome: &'static str, started: Instant) {
    ::metrics::counter!(
        "wallet_provider_requests_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
    ::metrics::histogram!(
        "wallet_provider_request_duration_seconds",
        "operation" => operation
    )
    .record(started.elapsed().as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_request_renders() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        ::metrics::with_local_recorder(&recorder, || {
            record_request("generate_wallet", "success", Instant::now());
            record_request("generate_wallet", "provider", Instant::now());
        });

        let rendered = handle.render();
        assert!(rendered.contains("wallet_provider_requests_total"));
        assert!(rendered.contains("operation=\"generate_wallet\""));
        assert!(rendered.contains("outcome=\"provider\""));
    }
}
