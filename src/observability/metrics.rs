//! Metrics collection and exposition.
//!
//! # Metrics
//! - `intent_stage_total` (counter): stage attempts by stage and outcome
//! - `intent_status_fetches_total` (counter): status fetches by outcome
//!
//! # Design Decisions
//! - Low-overhead updates; recording without an installed exporter is a
//!   no-op, so the library records unconditionally

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "failed to install metrics exporter"),
    }
}

/// Count a stage attempt (build, sign, execute).
pub fn record_stage(stage: &'static str, ok: bool) {
    metrics::counter!(
        "intent_stage_total",
        "stage" => stage,
        "outcome" => if ok { "ok" } else { "error" }
    )
    .increment(1);
}

/// Count a status fetch by outcome (found, not_found, error).
pub fn record_status_fetch(outcome: &'static str) {
    metrics::counter!("intent_status_fetches_total", "outcome" => outcome).increment(1);
}
