// Dashboard domain models
use serde::Serialize;

use super::discharge::DischargeSeries;
use super::panel::{ChartData, TileData};
use super::reading::Reading;
use super::weather::WeatherSnapshot;

/// Message surfaced to the viewer for every acquisition failure.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching data. Please try again later.";

/// Unified view model built from one successful acquisition.
///
/// `latest_discharge` and `prediction` are `None` when the page variant
/// does not show them, and hold a [`Reading`] (possibly the sentinel)
/// otherwise.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardModel {
    pub weather: WeatherSnapshot,
    pub latest_discharge: Option<Reading>,
    pub discharge: DischargeSeries,
    pub prediction: Option<Reading>,
}

/// Tri-state flag gating what the view renders.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchLifecycle {
    Loading,
    Ready(DashboardModel),
    Error(String),
}

impl FetchLifecycle {
    pub fn failed() -> Self {
        Self::Error(FETCH_ERROR_MESSAGE.to_string())
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready(_) => "ready",
            Self::Error(_) => "error",
        }
    }
}

/// Page as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub weather: Vec<TileData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_discharge: Option<TileData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<TileData>,
    pub chart: ChartData,
}
