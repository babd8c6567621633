use crate::dashboards::FloodPreventionDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <FloodPreventionDashboard />
    }
}
