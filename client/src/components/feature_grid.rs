//! Feature-card grid below the hero.

#[cfg(test)]
#[path = "feature_grid_test.rs"]
mod feature_grid_test;

use leptos::prelude::*;

use crate::content::{FEATURE_CARDS, FeatureCard, stagger_delay_css};

/// Inline style for a card: its custom properties plus the entrance stagger.
#[must_use]
pub fn feature_card_style(card: &FeatureCard, index: usize) -> String {
    format!("{} {}", card.style.to_css(), stagger_delay_css(index))
}

#[component]
pub fn FeatureGrid() -> impl IntoView {
    view! {
        <section class="features-section">
            <div class="features-container">
                <h2 class="features-heading motion-rise-in">
                    "Everything you need to make "
                    <span class="highlight">"smart decisions"</span>
                </h2>

                <div class="features-grid">
                    {FEATURE_CARDS
                        .iter()
                        .enumerate()
                        .map(|(index, card)| view! { <FeatureCardView card=card index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCardView(card: &'static FeatureCard, index: usize) -> impl IntoView {
    view! {
        <div class="feature-card motion-rise-in" style=feature_card_style(card, index)>
            <div class="feature-icon-wrapper motion-wiggle">
                <span class="feature-icon">{card.icon}</span>
            </div>
            <h3 class="feature-title">{card.title}</h3>
            <p class="feature-desc">{card.description}</p>
        </div>
    }
}
