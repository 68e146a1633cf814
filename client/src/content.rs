//! Static marketing content for the welcome page.
//!
//! DESIGN
//! ======
//! Screens and feature cards are hand-authored tables. Components only read
//! them; ordering here is the rendering order.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::num::NonZeroUsize;

/// Product name shown in the navbar, the phone header, and the phone button.
pub const BRAND_NAME: &str = "CoverageCompass";
/// Glyph shown next to the brand name.
pub const BRAND_ICON: &str = "🏥";

/// One display state of the hero phone mockup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhoneScreen {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const PHONE_SCREENS: &[PhoneScreen] = &[
    PhoneScreen {
        title: "Coverage Summary",
        items: &["📊 Deductibles & Limits", "💰 Out-of-Pocket Max", "🏥 Network Status"],
    },
    PhoneScreen {
        title: "Smart Recommendations",
        items: &["✓ Vision Care Needed", "✓ Dental Coverage Gap", "✓ Disability Insurance"],
    },
    PhoneScreen {
        title: "Cost Analysis",
        items: &["💵 Monthly Premium", "📈 Savings Potential", "⚡ Quick Wins"],
    },
];

/// Number of phone screens. The table is non-empty, so this never fails.
#[must_use]
pub fn screen_count() -> NonZeroUsize {
    NonZeroUsize::new(PHONE_SCREENS.len()).unwrap_or(NonZeroUsize::MIN)
}

/// Screen for a carousel index. Out-of-range indices wrap.
#[must_use]
pub fn screen_at(index: usize) -> &'static PhoneScreen {
    &PHONE_SCREENS[index % PHONE_SCREENS.len()]
}

/// Per-card visual parameters, rendered as CSS custom properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardStyle {
    pub background: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
    pub hover_shadow: &'static str,
    pub glow: &'static str,
    pub icon_background: &'static str,
    pub icon_shadow: &'static str,
}

impl CardStyle {
    /// Inline `style` attribute value declaring the card's custom properties.
    #[must_use]
    pub fn to_css(&self) -> String {
        [
            ("--card-background", self.background),
            ("--card-border", self.border),
            ("--card-shadow", self.shadow),
            ("--card-hover-shadow", self.hover_shadow),
            ("--card-glow", self.glow),
            ("--icon-background", self.icon_background),
            ("--icon-shadow", self.icon_shadow),
        ]
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub style: CardStyle,
}

pub const FEATURE_CARDS: &[FeatureCard] = &[
    FeatureCard {
        icon: "📊",
        title: "Coverage Summary",
        description: "See deductibles, out-of-pocket, and gaps at a glance",
        style: CardStyle {
            background: "rgba(247, 250, 255, 0.94)",
            border: "rgba(37, 99, 235, 0.18)",
            shadow: "0 24px 50px rgba(37, 99, 235, 0.12)",
            hover_shadow: "0 32px 70px rgba(37, 99, 235, 0.16)",
            glow: "linear-gradient(135deg, rgba(37, 99, 235, 0.35), rgba(59, 130, 246, 0.25))",
            icon_background: "linear-gradient(135deg, rgba(37, 99, 235, 0.18), rgba(59, 130, 246, 0.24))",
            icon_shadow: "0 16px 32px rgba(37, 99, 235, 0.18)",
        },
    },
    FeatureCard {
        icon: "🤖",
        title: "Smart Recommendations",
        description: "AI-backed prioritized action items to reduce risk",
        style: CardStyle {
            background: "rgba(248, 247, 255, 0.94)",
            border: "rgba(124, 58, 237, 0.18)",
            shadow: "0 24px 50px rgba(124, 58, 237, 0.12)",
            hover_shadow: "0 32px 70px rgba(124, 58, 237, 0.18)",
            glow: "linear-gradient(135deg, rgba(124, 58, 237, 0.35), rgba(236, 72, 153, 0.25))",
            icon_background: "linear-gradient(135deg, rgba(124, 58, 237, 0.18), rgba(147, 51, 234, 0.24))",
            icon_shadow: "0 16px 32px rgba(124, 58, 237, 0.2)",
        },
    },
    FeatureCard {
        icon: "📈",
        title: "Charts & Insights",
        description: "Beautiful charts that explain tradeoffs and savings",
        style: CardStyle {
            background: "rgba(241, 252, 255, 0.94)",
            border: "rgba(8, 145, 178, 0.18)",
            shadow: "0 24px 50px rgba(8, 145, 178, 0.12)",
            hover_shadow: "0 32px 70px rgba(8, 145, 178, 0.18)",
            glow: "linear-gradient(135deg, rgba(8, 145, 178, 0.35), rgba(56, 189, 248, 0.25))",
            icon_background: "linear-gradient(135deg, rgba(8, 145, 178, 0.18), rgba(6, 182, 212, 0.24))",
            icon_shadow: "0 16px 32px rgba(8, 145, 178, 0.2)",
        },
    },
    FeatureCard {
        icon: "👤",
        title: "Personalized Analysis",
        description: "Tailored to your lifestyle and financial goals",
        style: CardStyle {
            background: "rgba(241, 253, 249, 0.94)",
            border: "rgba(5, 150, 105, 0.18)",
            shadow: "0 24px 50px rgba(5, 150, 105, 0.12)",
            hover_shadow: "0 32px 70px rgba(5, 150, 105, 0.18)",
            glow: "linear-gradient(135deg, rgba(5, 150, 105, 0.35), rgba(34, 197, 94, 0.25))",
            icon_background: "linear-gradient(135deg, rgba(5, 150, 105, 0.18), rgba(16, 185, 129, 0.24))",
            icon_shadow: "0 16px 32px rgba(5, 150, 105, 0.2)",
        },
    },
];

/// Entrance stagger between consecutive list entries.
pub const STAGGER_MS: u64 = 100;

/// Inline `animation-delay` for the `index`-th entry of a staggered list.
#[must_use]
pub fn stagger_delay_css(index: usize) -> String {
    format!("animation-delay: {}ms;", index as u64 * STAGGER_MS)
}
