// Dashboard service - Use case for loading one dashboard view
use crate::application::acquisition::acquire;
use crate::application::reconciler::settle;
use crate::application::telemetry_source::TelemetrySource;
use crate::domain::dashboard::FetchLifecycle;
use std::sync::Arc;

/// Optional panels a page variant shows. Weather and the 7-day chart are always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardFeatures {
    /// Fetch `/api/predict` and show tomorrow's forecast
    pub prediction: bool,
    /// Show the latest discharge reading from the weather response
    pub latest_discharge: bool,
}

impl Default for DashboardFeatures {
    fn default() -> Self {
        Self {
            prediction: true,
            latest_discharge: true,
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn TelemetrySource>,
    features: DashboardFeatures,
}

impl DashboardService {
    pub fn new(source: Arc<dyn TelemetrySource>, features: DashboardFeatures) -> Self {
        Self { source, features }
    }

    /// Run one acquisition and reconcile it. Never returns `Loading`.
    pub async fn load(&self) -> FetchLifecycle {
        tracing::debug!(features = ?self.features, "Loading dashboard");
        let outcome = acquire(self.source.as_ref(), self.features).await;
        settle(outcome, self.features)
    }
}
