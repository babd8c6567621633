use crate::dashboards::d410_flood_prevention::data::{
    current_sample, risk_levels, vulnerable_areas,
};
use crate::shared::components::charts::{
    GroupedBarChart, LineChart, Series, SERIES_BLUE, SERIES_RED,
};
use crate::shared::components::{Alert, CardAnimated};
use crate::shared::format::format_tick;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use contracts::dashboards::d410_flood_prevention::AlertSeverity;
use leptos::prelude::*;

/// Static flood-prevention dashboard: alert banner, two chart cards and
/// three recommendation cards over the fixed sample datasets.
#[component]
pub fn FloodPreventionDashboard() -> impl IntoView {
    let areas = vulnerable_areas();
    let samples = risk_levels();
    let current = current_sample();
    let severity = AlertSeverity::for_risk(current.risk);

    let area_names: Vec<String> = areas.iter().map(|a| a.area.clone()).collect();
    let property_series = vec![
        Series::new(
            "Affected Properties",
            SERIES_BLUE,
            areas.iter().map(|a| f64::from(a.affected_properties)).collect(),
        ),
        Series::new(
            "Infrastructure Risk",
            SERIES_RED,
            areas.iter().map(|a| a.infrastructure_vulnerability).collect(),
        ),
    ];

    let time_labels: Vec<String> = samples.iter().map(|s| s.time.clone()).collect();
    let trend_series = vec![
        Series::new(
            "Risk Level",
            SERIES_BLUE,
            samples.iter().map(|s| s.risk).collect(),
        ),
        Series::new(
            "Predicted Depth (m)",
            SERIES_RED,
            samples.iter().map(|s| s.predicted_depth).collect(),
        ),
    ];

    view! {
        <PageFrame page_id="d410_flood_prevention--dashboard" category="dashboard">
            <div class="page__header">
                <h2 class="page__title">{icon("droplets")}"Flood Prevention Dashboard"</h2>
            </div>

            <div class="dashboard-grid dashboard-grid--cols-2">
                <Alert
                    severity=severity
                    icon_name="alert-triangle"
                    title="High Flood Risk Alert - Immediate Action Required"
                >
                    <p>{format!("Current Risk Level: {}%", format_tick(current.risk))}</p>
                    <p>{format!("Predicted Flood Depth: {}m", format_tick(current.predicted_depth))}</p>
                    <p>{format!("Active Sensors: {}", current.active_sensors)}</p>
                </Alert>

                <CardAnimated>
                    <div class="card__title">{icon("home")}"Property Impact Analysis"</div>
                    <GroupedBarChart categories=area_names series=property_series />
                </CardAnimated>
            </div>

            <CardAnimated delay_ms=80>
                <div class="card__title">{icon("timer")}"24-Hour Risk Trend Analysis"</div>
                <LineChart labels=time_labels series=trend_series />
            </CardAnimated>

            <div class="dashboard-grid dashboard-grid--cols-3">
                <RecommendationCard
                    title="Emergency Services"
                    tone="blue"
                    delay_ms=160
                    items=vec![
                        "Deploy response teams to South Beach",
                        "Prepare evacuation routes",
                        "Monitor infrastructure stress points",
                    ]
                />
                <RecommendationCard
                    title="Property Owners"
                    tone="green"
                    delay_ms=240
                    items=vec![
                        "Move vehicles to higher ground",
                        "Deploy flood barriers",
                        "Secure outdoor equipment",
                    ]
                />
                <RecommendationCard
                    title="Infrastructure Teams"
                    tone="purple"
                    delay_ms=320
                    items=vec![
                        "Check drainage systems",
                        "Monitor pump stations",
                        "Inspect sea walls",
                    ]
                />
            </div>
        </PageFrame>
    }
}

/// Tinted card with a checklist for one response group.
#[component]
fn RecommendationCard(
    #[prop(into)] title: String,
    /// Tint: "blue", "green" or "purple".
    tone: &'static str,
    #[prop(optional)] delay_ms: u32,
    items: Vec<&'static str>,
) -> impl IntoView {
    view! {
        <CardAnimated class=format!("recommendation recommendation--{tone}") delay_ms=delay_ms>
            <div class="recommendation__title">{title}</div>
            <ul class="recommendation__list">
                {items
                    .into_iter()
                    .map(|item| view! { <li>{item}</li> })
                    .collect_view()}
            </ul>
        </CardAnimated>
    }
}
