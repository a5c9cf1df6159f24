// Maps acquired payloads into the unified dashboard model
use crate::application::acquisition::AcquiredPayloads;
use crate::application::dashboard_service::DashboardFeatures;
use crate::application::error::FetchError;
use crate::domain::dashboard::{DashboardModel, FetchLifecycle};
use crate::domain::discharge::{Alignment, DischargeSeries, SERIES_LEN};
use crate::domain::reading::Reading;
use crate::domain::weather::WeatherSnapshot;
use crate::infrastructure::payloads::WeatherFields;

/// Build the whole model from one acquisition. Pure: equal inputs give equal models.
pub fn reconcile(payloads: &AcquiredPayloads, features: DashboardFeatures) -> DashboardModel {
    let weather = payloads
        .weather
        .latest_weather_data
        .as_ref()
        .map(snapshot_from)
        .unwrap_or_default();

    let (discharge, alignment) = DischargeSeries::align(&payloads.discharge.river_discharge_7day);
    if alignment != Alignment::Exact {
        tracing::warn!(
            samples = payloads.discharge.river_discharge_7day.len(),
            expected = SERIES_LEN,
            ?alignment,
            "Discharge series length mismatch"
        );
    }

    let latest_discharge = features
        .latest_discharge
        .then(|| Reading::from(payloads.weather.latest_river_discharge));

    let prediction = payloads
        .prediction
        .as_ref()
        .map(|p| Reading::from(p.predictions_tomorrow));

    DashboardModel {
        weather,
        latest_discharge,
        discharge,
        prediction,
    }
}

/// Final lifecycle state for an acquisition outcome.
pub fn settle(
    outcome: Result<AcquiredPayloads, FetchError>,
    features: DashboardFeatures,
) -> FetchLifecycle {
    match outcome {
        Ok(payloads) => FetchLifecycle::Ready(reconcile(&payloads, features)),
        Err(e) => {
            tracing::error!(
                endpoint = %e.endpoint(),
                kind = e.kind(),
                "Dashboard acquisition failed: {}",
                e
            );
            FetchLifecycle::failed()
        }
    }
}

fn snapshot_from(fields: &WeatherFields) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature: fields.temperature_2m.into(),
        humidity: fields.relative_humidity_2m.into(),
        dew_point: fields.dew_point_2m.into(),
        pressure: fields.pressure_msl.into(),
        cloud_cover: fields.cloud_cover.into(),
        wind_speed: fields.wind_speed_10m.into(),
        soil_temperature: fields.soil_temperature_0cm.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::Endpoint;
    use crate::domain::dashboard::FETCH_ERROR_MESSAGE;
    use crate::domain::weather::WeatherField;
    use crate::infrastructure::payloads::{
        DischargeSeriesResponse, PredictionResponse, WeatherResponse,
    };

    const ALL: DashboardFeatures = DashboardFeatures {
        prediction: true,
        latest_discharge: true,
    };

    fn scenario() -> AcquiredPayloads {
        AcquiredPayloads {
            weather: WeatherResponse {
                latest_weather_data: Some(WeatherFields {
                    temperature_2m: Some(31.5),
                    relative_humidity_2m: Some(72.0),
                    dew_point_2m: Some(25.8),
                    pressure_msl: Some(1007.9),
                    cloud_cover: Some(64.0),
                    wind_speed_10m: Some(9.3),
                    soil_temperature_0cm: Some(30.2),
                }),
                latest_river_discharge: Some(120.0),
            },
            discharge: DischargeSeriesResponse {
                river_discharge_7day: [100.0, 105.0, 110.0, 108.0, 115.0, 118.0, 120.0]
                    .into_iter()
                    .map(Some)
                    .collect(),
            },
            prediction: Some(PredictionResponse {
                predictions_tomorrow: Some(125.0),
            }),
        }
    }

    #[test]
    fn test_reconcile_maps_values_unchanged() {
        let model = reconcile(&scenario(), ALL);

        assert_eq!(model.weather.temperature, Reading::new(31.5));
        assert_eq!(model.weather.humidity, Reading::new(72.0));
        assert_eq!(model.weather.dew_point, Reading::new(25.8));
        assert_eq!(model.weather.pressure, Reading::new(1007.9));
        assert_eq!(model.weather.cloud_cover, Reading::new(64.0));
        assert_eq!(model.weather.wind_speed, Reading::new(9.3));
        assert_eq!(model.weather.soil_temperature, Reading::new(30.2));
        assert_eq!(model.latest_discharge, Some(Reading::new(120.0)));
        assert_eq!(model.prediction, Some(Reading::new(125.0)));
        assert_eq!(
            model.discharge.values(),
            vec![
                Some(100.0),
                Some(105.0),
                Some(110.0),
                Some(108.0),
                Some(115.0),
                Some(118.0),
                Some(120.0)
            ]
        );
    }

    #[test]
    fn test_missing_weather_field_only_affects_that_field() {
        let mut payloads = scenario();
        if let Some(fields) = payloads.weather.latest_weather_data.as_mut() {
            fields.cloud_cover = None;
        }

        let model = reconcile(&payloads, ALL);

        for (field, reading) in model.weather.fields() {
            if field == WeatherField::CloudCover {
                assert!(!reading.is_available());
            } else {
                assert!(reading.is_available(), "{field:?} should be populated");
            }
        }
    }

    #[test]
    fn test_missing_weather_object_gives_sentinels() {
        let mut payloads = scenario();
        payloads.weather.latest_weather_data = None;

        let model = reconcile(&payloads, ALL);

        assert!(model.weather.fields().all(|(_, r)| !r.is_available()));
        assert_eq!(model.latest_discharge, Some(Reading::new(120.0)));
    }

    #[test]
    fn test_short_series_does_not_fail() {
        let mut payloads = scenario();
        payloads.discharge.river_discharge_7day = vec![Some(115.0), Some(118.0), Some(120.0)];

        let model = reconcile(&payloads, ALL);

        assert_eq!(model.discharge.samples().len(), 7);
        assert_eq!(model.discharge.samples()[6], Reading::new(120.0));
        assert!(!model.discharge.samples()[0].is_available());
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let payloads = scenario();
        assert_eq!(reconcile(&payloads, ALL), reconcile(&payloads, ALL));
    }

    #[test]
    fn test_features_hide_optional_panels() {
        let mut payloads = scenario();
        payloads.prediction = None;

        let model = reconcile(
            &payloads,
            DashboardFeatures {
                prediction: false,
                latest_discharge: false,
            },
        );

        assert_eq!(model.latest_discharge, None);
        assert_eq!(model.prediction, None);
    }

    #[test]
    fn test_missing_prediction_value_is_sentinel() {
        let mut payloads = scenario();
        payloads.prediction = Some(PredictionResponse::default());

        let model = reconcile(&payloads, ALL);
        assert_eq!(model.prediction, Some(Reading::not_available()));
    }

    #[test]
    fn test_settle_success_is_ready() {
        let lifecycle = settle(Ok(scenario()), ALL);
        assert!(matches!(lifecycle, FetchLifecycle::Ready(_)));
    }

    #[test]
    fn test_settle_failure_surfaces_generic_message() {
        let lifecycle = settle(
            Err(FetchError::Decode {
                endpoint: Endpoint::DischargeSeries,
                message: "missing field `river_discharge_7day`".to_string(),
            }),
            ALL,
        );
        assert_eq!(lifecycle, FetchLifecycle::Error(FETCH_ERROR_MESSAGE.to_string()));
    }
}
