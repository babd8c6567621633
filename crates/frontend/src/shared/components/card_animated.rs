//! CardAnimated — wrapper over the Thaw Card with an appear animation.
//!
//! Drop-in replacement for `<Card attr:style="...">`. The animation is
//! defined in `styles.css` (`@keyframes card-appear`).
//!
//! # Example
//! ```text
//! // Staggered cascade for a card row
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=80>  // card 2
//! <CardAnimated delay_ms=160> // card 3
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Wrapper over the Thaw [`Card`] with the `card-appear` animation.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds (for stagger effects).
    #[prop(optional)]
    delay_ms: u32,
    /// Additional CSS classes forwarded to the card.
    #[prop(optional, into)]
    class: String,
    /// Additional inline styles, appended after the animation.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card class=class attr:style=full_style>
            {children()}
        </Card>
    }
}
