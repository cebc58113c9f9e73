//! Metrics recorder
//!
//! The Prometheus recorder becomes the global `metrics` sink. No HTTP
//! listener is started; callers render the snapshot through the returned
//! handle.

use integration_rp5::extractor::EXTRACTION_DURATION_METRIC;
use metrics::Unit;
use metrics_exporter_prometheus::{
    BuildError, PrometheusBuilder, PrometheusHandle, PrometheusRecorder,
};

/// Recorder that is not installed globally, for `metrics::with_local_recorder`
#[must_use]
pub fn build_recorder() -> PrometheusRecorder {
    PrometheusBuilder::new().build_recorder()
}

/// Install the global metrics recorder
///
/// # Errors
///
/// Returns an error if a global recorder is already installed.
pub fn install_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    describe_metrics();
    Ok(handle)
}

fn describe_metrics() {
    metrics::describe_histogram!(
        EXTRACTION_DURATION_METRIC,
        Unit::Seconds,
        "Time spent extracting weather from an RP5 city page"
    );
}
