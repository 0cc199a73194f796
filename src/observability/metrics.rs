//! Metrics collection and exposition.
//!
//! # Metrics
//! - `limbo_pending_players` (gauge): players currently waiting in limbo
//! - `limbo_auto_reconnect_enabled` (gauge): 1 when the global toggle is on
//! - `limbo_reconnect_ticks_total` (counter): scheduler ticks by outcome
//! - `limbo_reconnect_attempts_total` (counter): connection attempts by outcome
//! - `limbo_reconnect_attempt_duration_seconds` (histogram): attempt latency

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape endpoint. Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_pending_players(count: usize) {
    gauge!("limbo_pending_players").set(count as f64);
}

pub fn record_auto_reconnect(enabled: bool) {
    gauge!("limbo_auto_reconnect_enabled").set(if enabled { 1.0 } else { 0.0 });
}

pub fn record_tick(outcome: &'static str) {
    counter!("limbo_reconnect_ticks_total", "outcome" => outcome).increment(1);
}

pub fn record_attempt(outcome: &'static str, started: Instant) {
    counter!("limbo_reconnect_attempts_total", "outcome" => outcome).increment(1);
    histogram!("limbo_reconnect_attempt_duration_seconds", "outcome" => outcome)
        .record(started.elapsed().as_secs_f64());
}
