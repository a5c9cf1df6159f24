// Render-ready panel models
use serde::Serialize;

use super::reading::Reading;

/// A single text readout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileData {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub value: Reading,
    /// `value` formatted for display, `N/A` when missing.
    pub display: String,
}

impl TileData {
    pub fn new(id: &str, title: &str, unit: &str, value: Reading) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: unit.to_string(),
            display: value.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
    /// One entry per chart label; `null` marks a missing sample.
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub unit: Option<String>,
    pub labels: Vec<String>,
    pub series: Vec<SeriesData>,
}
