use super::scale::{BandScale, LinearScale};
use super::{
    max_value, ChartLegend, Series, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP,
    VIEW_HEIGHT, VIEW_WIDTH,
};
use crate::shared::format::format_tick;
use leptos::prelude::*;

/// Grouped vertical bar chart: one group of bars per category, one bar
/// per series inside the group.
#[component]
pub fn GroupedBarChart(
    /// Category labels along the x axis.
    categories: Vec<String>,
    /// One value per category in each series.
    series: Vec<Series>,
) -> impl IntoView {
    let baseline = VIEW_HEIGHT - MARGIN_BOTTOM;
    let y = LinearScale::new((0.0, max_value(&series)), (baseline, MARGIN_TOP));
    let x = BandScale::new(
        categories.len(),
        (MARGIN_LEFT, VIEW_WIDTH - MARGIN_RIGHT),
        0.3,
    );

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

    let bar_w = x.inner_width() / series.len().max(1) as f64;
    let bars = series
        .iter()
        .enumerate()
        .flat_map(|(j, s)| {
            let color = s.color;
            s.values.iter().enumerate().map(move |(i, v)| {
                let top = y.scale(*v);
                let bx = x.center(i) - x.inner_width() / 2.0 + bar_w * j as f64;
                view! {
                    <rect
                        class="chart__bar"
                        x=format!("{bx:.1}")
                        y=format!("{top:.1}")
                        width=format!("{:.1}", bar_w - 1.0)
                        height=format!("{:.1}", baseline - top)
                        fill=color
                    />
                }
            })
        })
        .collect_view();

    let labels = categories
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
                {bars}
                <line
                    class="chart__axis"
                    x1=format!("{MARGIN_LEFT:.1}")
                    y1=format!("{baseline:.1}")
                    x2=format!("{:.1}", VIEW_WIDTH - MARGIN_RIGHT)
                    y2=format!("{baseline:.1}")
                />
                {labels}
            </svg>
            <ChartLegend entries=legend />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_slots_fill_the_band() {
        // two series inside a 4-category band: bars sit side by side
        let x = BandScale::new(4, (MARGIN_LEFT, VIEW_WIDTH - MARGIN_RIGHT), 0.3);
        let bar_w = x.inner_width() / 2.0;
        let left = x.center(0) - x.inner_width() / 2.0;
        assert!(left > MARGIN_LEFT);
        assert!(left + 2.0 * bar_w <= x.center(0) + x.inner_width() / 2.0 + 1e-9);
    }
}
