//! Prometheus metrics for bfhl-service.
//!
//! HTTP request metrics come from the shared middleware; this module adds the
//! per-operation counter and owns the exporter handle.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Call once at startup.
pub fn init_metrics() -> anyhow::Result<()> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("failed to install Prometheus recorder: {}", e))?;

    METRICS_HANDLE
        .set(handle)
        .map_err(|_| anyhow::anyhow!("metrics handle already initialized"))?;

    Ok(())
}

pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Count a `/bfhl` dispatch by operation key and outcome.
pub fn record_operation(operation: &'static str, outcome: &'static str) {
    counter!(
        "bfhl_operations_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
}
