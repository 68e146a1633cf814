//! Hero phone mockup cycling through the static app screens.

#[cfg(test)]
#[path = "phone_mockup_test.rs"]
mod phone_mockup_test;

use leptos::prelude::*;

use crate::content::{BRAND_ICON, BRAND_NAME, PHONE_SCREENS, PhoneScreen, screen_at, stagger_delay_css};
use crate::state::carousel::Carousel;

#[must_use]
pub fn dot_class(active: bool) -> &'static str {
    if active { "dot active" } else { "dot" }
}

#[component]
pub fn PhoneMockup(carousel: RwSignal<Carousel>) -> impl IntoView {
    view! {
        <div class="phone-container">
            <div class="phone-glow motion-glow-in"></div>

            <div class="phone-mockup motion-float">
                <div class="phone-frame browser-frame">
                    <div class="browser-controls">
                        <span class="control-dot red"></span>
                        <span class="control-dot yellow"></span>
                        <span class="control-dot green"></span>
                    </div>

                    <div class="phone-screen">
                        <div class="app-header">
                            <span class="app-logo">{format!("{BRAND_ICON} {BRAND_NAME}")}</span>
                        </div>

                        <div class="app-content">
                            // Re-rendered per index so the entrance animation replays.
                            {move || view! { <ScreenCard screen=screen_at(carousel.get().index()) /> }}

                            <div class="screen-dots">
                                {(0..PHONE_SCREENS.len())
                                    .map(|i| view! { <div class=move || dot_class(carousel.get().is_active(i))></div> })
                                    .collect_view()}
                            </div>

                            <button class="phone-button motion-press">{BRAND_NAME}</button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ScreenCard(screen: &'static PhoneScreen) -> impl IntoView {
    view! {
        <div class="summary-card motion-rise-in">
            <h3 class="card-title">{screen.title}</h3>
            {screen
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| view! { <div class="card-item motion-slide-in" style=stagger_delay_css(i)>{*item}</div> })
                .collect_view()}
        </div>
    }
}
