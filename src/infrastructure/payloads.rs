// Wire shapes returned by the telemetry backend
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `GET /api/weather/latest`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeatherResponse {
    #[serde(default)]
    pub latest_weather_data: Option<WeatherFields>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub latest_river_discharge: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeatherFields {
    #[serde(default, deserialize_with = "lenient_number")]
    pub temperature_2m: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub relative_humidity_2m: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub dew_point_2m: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pressure_msl: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub cloud_cover: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub wind_speed_10m: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub soil_temperature_0cm: Option<f64>,
}

/// `GET /api/river_discharge_7day`. The array itself is required.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DischargeSeriesResponse {
    #[serde(deserialize_with = "lenient_samples")]
    pub river_discharge_7day: Vec<Option<f64>>,
}

/// `GET /api/predict`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PredictionResponse {
    #[serde(default, deserialize_with = "lenient_number")]
    pub predictions_tomorrow: Option<f64>,
}

/// Any non-numeric value (including `null`) becomes `None` for this field only.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64))
}

fn lenient_samples<'de, D>(deserializer: D) -> Result<Vec<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values.iter().map(Value::as_f64).collect())
}
