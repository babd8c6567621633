use super::scale::{BandScale, LinearScale};
use super::{
    max_value, ChartLegend, Series, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP,
    VIEW_HEIGHT, VIEW_WIDTH,
};
use crate::shared::format::format_tick;
use leptos::prelude::*;

/// Multi-series line chart over shared, evenly spaced x positions.
///
/// All series plot against one y axis spanning 0 to the overall maximum,
/// so small-magnitude series hug the baseline.
#[component]
pub fn LineChart(
    /// Time labels along the x axis, one per sample.
    labels: Vec<String>,
    /// One value per label in each series.
    series: Vec<Series>,
) -> impl IntoView {
    let baseline = VIEW_HEIGHT - MARGIN_BOTTOM;
    let y = LinearScale::new((0.0, max_value(&series)), (baseline, MARGIN_TOP));
    let x = BandScale::new(labels.len(), (MARGIN_LEFT, VIEW_WIDTH - MARGIN_RIGHT), 0.0);

    let grid = y
        .ticks(5)
        .into_iter()
        .map(|t| {
            let ty = y.scale(t);
            view! {
                <line
                    class="chart__grid"
                    x1=format!("{MARGIN_LEFT:.1}")
                    y1=format!("{ty:.1}")
                    x2=format!("{:.1}", VIEW_WIDTH - MARGIN_RIGHT)
                    y2=format!("{ty:.1}")
                    stroke-dasharray="3 3"
                />
                <text
                    class="chart__tick"
                    x=format!("{:.1}", MARGIN_LEFT - 6.0)
                    y=format!("{:.1}", ty + 3.0)
                    text-anchor="end"
                >
                    {format_tick(t)}
                </text>
            }
        })
        .collect_view();

    let lines = series
        .iter()
        .map(|s| {
            let points: Vec<(f64, f64)> = s
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| (x.center(i), y.scale(*v)))
                .collect();

            let markers = points
                .iter()
                .map(|(px, py)| {
                    view! {
                        <circle
                            class="chart__marker"
                            cx=format!("{px:.1}")
                            cy=format!("{py:.1}")
                            r="3"
                            fill=s.color
                        />
                    }
                })
                .collect_view();

            view! {
                <polyline
                    class="chart__line"
                    points=polyline_points(&points)
                    fill="none"
                    stroke=s.color
                    stroke-width="2"
                />
                {markers}
            }
        })
        .collect_view();

    let labels_view = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <text
                    class="chart__label"
                    x=format!("{:.1}", x.center(i))
                    y=format!("{:.1}", baseline + 16.0)
                    text-anchor="middle"
                >
                    {label.clone()}
                </text>
            }
        })
        .collect_view();

    let legend: Vec<(String, &'static str)> =
        series.iter().map(|s| (s.name.clone(), s.color)).collect();

    view! {
        <div class="chart">
            <svg
                class="chart__svg"
                viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
                role="img"
            >
                {grid}
                {lines}
                <line
                    class="chart__axis"
                    x1=format!("{MARGIN_LEFT:.1}")
                    y1=format!("{baseline:.1}")
                    x2=format!("{:.1}", VIEW_WIDTH - MARGIN_RIGHT)
                    y2=format!("{baseline:.1}")
                />
                {labels_view}
            </svg>
            <ChartLegend entries=legend />
        </div>
    }
}

/// SVG `points` attribute for a polyline, one decimal of precision.
fn polyline_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(px, py)| format!("{px:.1},{py:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_points_format() {
        let points = vec![(40.0, 220.0), (190.0, 12.5)];
        assert_eq!(polyline_points(&points), "40.0,220.0 190.0,12.5");
        assert_eq!(polyline_points(&[]), "");
    }
}
