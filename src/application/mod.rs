// Application layer - Acquisition and reconciliation use cases
pub mod acquisition;
pub mod dashboard_service;
pub mod error;
pub mod reconciler;
pub mod telemetry_source;
pub mod view_session;
