use super::*;

#[test]
fn feature_card_style_appends_stagger_after_custom_properties() {
    let style = feature_card_style(&FEATURE_CARDS[2], 2);
    assert!(style.starts_with("--card-background: rgba(241, 252, 255, 0.94);"));
    assert!(style.ends_with("animation-delay: 200ms;"));
}

#[test]
fn feature_card_styles_follow_table_order() {
    let styles = FEATURE_CARDS
        .iter()
        .enumerate()
        .map(|(i, card)| feature_card_style(card, i))
        .collect::<Vec<_>>();
    assert_eq!(styles.len(), 4);
    for (i, style) in styles.iter().enumerate() {
        assert!(style.contains(FEATURE_CARDS[i].style.border));
        assert!(style.ends_with(&format!("animation-delay: {}ms;", i * 100)));
    }
}

#[cfg(feature = "ssr")]
#[test]
fn rendered_grid_lists_every_card_in_table_order() {
    use leptos::tachys::view::RenderHtml;

    let html = Owner::new().with(|| view! { <FeatureGrid /> }.to_html());

    assert_eq!(html.matches("class=\"feature-card ").count(), FEATURE_CARDS.len());
    let positions = FEATURE_CARDS
        .iter()
        .map(|card| {
            let title = card.title.replace('&', "&amp;");
            html.find(&title).unwrap_or_else(|| panic!("missing {title}"))
        })
        .collect::<Vec<_>>();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(html.contains("smart decisions"));
}
