// HTTP telemetry source for the dashboard backend
use crate::application::error::{Endpoint, FetchError};
use crate::application::telemetry_source::TelemetrySource;
use crate::infrastructure::config::BackendSettings;
use crate::infrastructure::payloads::{
    DischargeSeriesResponse, PredictionResponse, WeatherResponse,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpTelemetrySource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTelemetrySource {
    pub fn new(settings: &BackendSettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    #[tracing::instrument(skip_all, fields(endpoint = %endpoint))]
    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, FetchError> {
        let url = self.endpoint_url(endpoint);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                endpoint,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %body, "Backend returned error status");
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| FetchError::Transport {
            endpoint,
            message: e.to_string(),
        })?;

        tracing::debug!(bytes = bytes.len(), "Backend response received");

        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode {
            endpoint,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl TelemetrySource for HttpTelemetrySource {
    async fn latest_weather(&self) -> Result<WeatherResponse, FetchError> {
        self.get_json(Endpoint::LatestWeather).await
    }

    async fn discharge_7day(&self) -> Result<DischargeSeriesResponse, FetchError> {
        self.get_json(Endpoint::DischargeSeries).await
    }

    async fn prediction(&self) -> Result<PredictionResponse, FetchError> {
        self.get_json(Endpoint::Prediction).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let source = HttpTelemetrySource::new(&BackendSettings {
            base_url: "http://localhost:5000/".to_string(),
            timeout_secs: Some(5),
        })
        .unwrap();

        assert_eq!(
            source.endpoint_url(Endpoint::DischargeSeries),
            "http://localhost:5000/api/river_discharge_7day"
        );
    }
}
