//! Inline-SVG chart components for dashboard cards.

pub mod bar_chart;
pub mod line_chart;
pub mod scale;

pub use bar_chart::GroupedBarChart;
pub use line_chart::LineChart;

use leptos::prelude::*;

/// Primary (blue) series colour.
pub const SERIES_BLUE: &str = "#2563eb";
/// Secondary (red) series colour.
pub const SERIES_RED: &str = "#dc2626";

// Shared chart geometry: a 640x256 viewBox scaled to the card width.
pub(crate) const VIEW_WIDTH: f64 = 640.0;
pub(crate) const VIEW_HEIGHT: f64 = 256.0;
pub(crate) const MARGIN_TOP: f64 = 12.0;
pub(crate) const MARGIN_RIGHT: f64 = 16.0;
pub(crate) const MARGIN_BOTTOM: f64 = 32.0;
pub(crate) const MARGIN_LEFT: f64 = 40.0;

/// One named run of values, one value per category or time slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: &str, color: &'static str, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            color,
            values,
        }
    }
}

/// Largest value across all series; the y axis spans 0 to this.
pub(crate) fn max_value(series: &[Series]) -> f64 {
    series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0, f64::max)
}

/// Legend row under a chart: one swatch + name per series.
#[component]
pub fn ChartLegend(entries: Vec<(String, &'static str)>) -> impl IntoView {
    view! {
        <div class="chart__legend">
            {entries
                .into_iter()
                .map(|(name, color)| view! {
                    <span class="chart__legend-item">
                        <span class="chart__legend-swatch" style=format!("background: {color};")></span>
                        {name}
                    </span>
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_value_across_series() {
        let series = vec![
            Series::new("a", SERIES_BLUE, vec![1.0, 245.0, 3.0]),
            Series::new("b", SERIES_RED, vec![78.0, 65.0]),
        ];
        assert_eq!(max_value(&series), 245.0);
    }

    #[test]
    fn test_max_value_of_empty_input_is_zero() {
        assert_eq!(max_value(&[]), 0.0);
    }
}
