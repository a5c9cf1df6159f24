// Source trait for backend telemetry
use crate::application::error::FetchError;
use crate::infrastructure::payloads::{
    DischargeSeriesResponse, PredictionResponse, WeatherResponse,
};
use async_trait::async_trait;

/// One method per backend endpoint. Each call is a single GET with no parameters.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Latest weather measurements plus the latest derived discharge value
    async fn latest_weather(&self) -> Result<WeatherResponse, FetchError>;

    /// Discharge samples for the last seven days, oldest first
    async fn discharge_7day(&self) -> Result<DischargeSeriesResponse, FetchError>;

    /// Next-day discharge forecast
    async fn prediction(&self) -> Result<PredictionResponse, FetchError>;
}
