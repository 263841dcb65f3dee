//! Metrics collection and exposition.
//!
//! # Metrics
//! - `mock_requests_total` (counter): requests by method, endpoint, status
//! - `mock_request_duration_seconds` (histogram): handler latency by endpoint
//!
//! Recording is always on and costs nothing without an installed recorder;
//! the Prometheus endpoint only exists when an address is configured.

use std::net::SocketAddr;
use std::time::Instant;

use ::metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(method: &str, endpoint: &'static str, status: u16, start: Instant) {
    counter!(
        "mock_requests_total",
        "method" => method.to_string(),
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .increment(1);

    histogram!("mock_request_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}
