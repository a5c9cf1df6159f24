// Concurrent, all-or-nothing fetch of every endpoint a page needs
use crate::application::dashboard_service::DashboardFeatures;
use crate::application::error::FetchError;
use crate::application::telemetry_source::TelemetrySource;
use crate::infrastructure::payloads::{
    DischargeSeriesResponse, PredictionResponse, WeatherResponse,
};

/// Decoded bodies of one successful acquisition, in request order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AcquiredPayloads {
    pub weather: WeatherResponse,
    pub discharge: DischargeSeriesResponse,
    /// Present only when the page requested the prediction endpoint.
    pub prediction: Option<PredictionResponse>,
}

/// Issue every request at once and wait for all of them to settle.
///
/// Any failure fails the whole acquisition; the first one in request order
/// is returned and the rest are logged.
pub async fn acquire(
    source: &dyn TelemetrySource,
    features: DashboardFeatures,
) -> Result<AcquiredPayloads, FetchError> {
    let (weather, discharge, prediction) = tokio::join!(
        source.latest_weather(),
        source.discharge_7day(),
        async {
            if features.prediction {
                source.prediction().await.map(Some)
            } else {
                Ok(None)
            }
        },
    );

    for err in [
        weather.as_ref().err(),
        discharge.as_ref().err(),
        prediction.as_ref().err(),
    ]
    .into_iter()
    .flatten()
    {
        tracing::warn!(
            endpoint = %err.endpoint(),
            kind = err.kind(),
            "Request failed: {}",
            err
        );
    }

    Ok(AcquiredPayloads {
        weather: weather?,
        discharge: discharge?,
        prediction: prediction?,
    })
}
