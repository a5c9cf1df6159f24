// Mapper from the dashboard model to render-ready panels
use crate::domain::dashboard::{Dashboard, DashboardModel, FetchLifecycle};
use crate::domain::discharge::{DischargeSeries, DAY_LABELS};
use crate::domain::panel::{ChartData, SeriesData, TileData};
use serde::Serialize;

const DISCHARGE_UNIT: &str = "m³/s";

/// Body returned by the JSON dashboard route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PageResponse {
    Loading,
    Ready { dashboard: Dashboard },
    Error { message: String },
}

impl PageResponse {
    pub fn from_lifecycle(lifecycle: &FetchLifecycle, title: &str) -> Self {
        match lifecycle {
            FetchLifecycle::Loading => Self::Loading,
            FetchLifecycle::Ready(model) => Self::Ready {
                dashboard: dashboard_from_model(model, title),
            },
            FetchLifecycle::Error(message) => Self::Error {
                message: message.clone(),
            },
        }
    }
}

pub fn dashboard_from_model(model: &DashboardModel, title: &str) -> Dashboard {
    let weather = model
        .weather
        .fields()
        .map(|(field, reading)| TileData::new(field.key(), field.title(), field.unit(), reading))
        .collect();

    let latest_discharge = model.latest_discharge.map(|reading| {
        TileData::new(
            "latest_river_discharge",
            "River Discharge (Latest)",
            DISCHARGE_UNIT,
            reading,
        )
    });

    let prediction = model.prediction.map(|reading| {
        TileData::new(
            "predictions_tomorrow",
            "River Discharge Tomorrow",
            DISCHARGE_UNIT,
            reading,
        )
    });

    Dashboard {
        title: title.to_string(),
        weather,
        latest_discharge,
        prediction,
        chart: discharge_chart(&model.discharge),
    }
}

fn discharge_chart(series: &DischargeSeries) -> ChartData {
    ChartData {
        id: "river_discharge_7day".to_string(),
        title: "River Discharge Over the Last 7 Days".to_string(),
        unit: Some(DISCHARGE_UNIT.to_string()),
        labels: DAY_LABELS.iter().map(|l| l.to_string()).collect(),
        series: vec![SeriesData {
            id: "river_discharge".to_string(),
            name: format!("River Discharge ({DISCHARGE_UNIT})"),
            border_color: "rgba(75, 192, 192, 1)".to_string(),
            background_color: "rgba(75, 192, 192, 0.2)".to_string(),
            fill: true,
            values: series.values(),
        }],
    }
}
