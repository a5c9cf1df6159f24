// Plain-text rendering of a dashboard view
use crate::domain::dashboard::{Dashboard, FetchLifecycle};
use crate::domain::panel::TileData;
use crate::domain::reading::NOT_AVAILABLE;
use crate::presentation::view_mapper::dashboard_from_model;

pub const LOADING_TEXT: &str = "Loading data...";

pub fn render_text(lifecycle: &FetchLifecycle, title: &str) -> String {
    match lifecycle {
        FetchLifecycle::Loading => format!("{LOADING_TEXT}\n"),
        FetchLifecycle::Error(message) => format!("{message}\n"),
        FetchLifecycle::Ready(model) => render_dashboard(&dashboard_from_model(model, title)),
    }
}

fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut lines = vec![
        dashboard.title.clone(),
        "=".repeat(dashboard.title.chars().count()),
    ];

    let chart = &dashboard.chart;
    let unit = chart.unit.as_deref().unwrap_or_default();
    lines.push(String::new());
    lines.push(chart.title.clone());
    if let Some(series) = chart.series.first() {
        for (label, value) in chart.labels.iter().zip(&series.values) {
            lines.push(match value {
                Some(v) => format!("  {label:<12} {v} {unit}"),
                None => format!("  {label:<12} {NOT_AVAILABLE}"),
            });
        }
    }

    lines.push(String::new());
    lines.push("Weather Data".to_string());
    lines.extend(dashboard.weather.iter().map(tile_line));
    lines.extend(dashboard.latest_discharge.iter().map(tile_line));

    if let Some(tile) = &dashboard.prediction {
        lines.push(String::new());
        lines.push(tile.title.clone());
        lines.push(format!("  {} {}", tile.display, tile.unit));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn tile_line(tile: &TileData) -> String {
    let label = format!("{}:", tile.title);
    format!("  {label:<26} {} {}", tile.display, tile.unit)
}
