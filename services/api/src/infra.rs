use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared handles injected into every request via `Extension`.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

impl AppState {
    pub(crate) fn new(metrics: PrometheusHandle) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
        }
    }

    pub(crate) fn mark_ready(&self) {
        self.readiness.store(true, Ordering::Release);
    }

    pub(crate) fn is_ready(&self) -> bool {
        self.readiness.load(Ordering::Acquire)
    }
}
