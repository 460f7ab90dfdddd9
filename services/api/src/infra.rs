use health_risk::config::ProfilerConfig;
use health_risk::workflows::assessment::{PlainTextRecognizer, RiskProfilerService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The recognizer is built once per process and shared by every request.
pub(crate) fn build_profiler(config: &ProfilerConfig) -> RiskProfilerService<PlainTextRecognizer> {
    RiskProfilerService::new(Arc::new(PlainTextRecognizer), config)
}
