use crate::shared::icons::icon;
use contracts::dashboards::d410_flood_prevention::AlertSeverity;
use leptos::prelude::*;

/// Banner for urgent notices. The severity drives the colour variant:
/// `Destructive` renders the red emergency style, `Default` the neutral one.
#[component]
pub fn Alert(
    /// Visual urgency of the banner
    severity: AlertSeverity,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Bold first line of the banner
    #[prop(into)]
    title: String,
    /// Detail lines below the title
    children: Children,
) -> impl IntoView {
    let class = match severity {
        AlertSeverity::Destructive => "alert alert--destructive",
        AlertSeverity::Default => "alert",
    };

    view! {
        <div class=class role="alert">
            <div class="alert__icon">{icon(&icon_name)}</div>
            <div class="alert__body">
                <div class="alert__title">{title}</div>
                <div class="alert__content">{children()}</div>
            </div>
        </div>
    }
}
