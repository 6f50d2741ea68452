//! Metrics collection and exposition.
//!
//! # Metrics
//! - `redirect_decisions_total` (counter): decisions by outcome
//!   (`redirect`, `static`, `denied`, `async`, `root`)

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

pub const DECISIONS_TOTAL: &str = "redirect_decisions_total";

/// Count one redirect decision.
pub fn record_decision(outcome: &'static str) {
    metrics::counter!(DECISIONS_TOTAL, "outcome" => outcome).increment(1);
}

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}
