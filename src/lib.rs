//! River discharge and weather dashboard.
//!
//! Fetches the latest weather, the last seven days of river discharge and
//! tomorrow's discharge forecast from a telemetry backend, reconciles them
//! into one view model and serves it as JSON or plain text.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
