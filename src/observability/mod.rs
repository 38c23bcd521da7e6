//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Provider client produces:
//!     → logging.rs (structured log events, one span per call)
//!     → metrics.rs (request counters, latency histograms)
//!
//! Consumers:
//!     → stderr (human-readable log lines)
//!     → Prometheus text snapshot (optional)
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr so command output on stdout stays machine-readable
//! - Metrics go through the `metrics` facade; without a recorder they are no-ops
//! - Secrets and API keys are never attached to spans or events

pub mod logging;
pub mod metrics;
