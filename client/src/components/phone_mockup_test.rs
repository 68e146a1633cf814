use super::*;

#[test]
fn dot_class_marks_only_active_dot() {
    assert_eq!(dot_class(true), "dot active");
    assert_eq!(dot_class(false), "dot");
}

#[test]
fn displayed_screen_follows_carousel_index() {
    use crate::content::{PHONE_SCREENS, screen_at, screen_count};
    use crate::state::carousel::Carousel;

    let mut carousel = Carousel::new(screen_count());
    for step in 0..7 {
        assert_eq!(screen_at(carousel.index()), &PHONE_SCREENS[step % PHONE_SCREENS.len()]);
        let active = (0..carousel.screen_count()).filter(|&i| carousel.is_active(i)).count();
        assert_eq!(active, 1);
        carousel.advance();
    }
}

#[cfg(feature = "ssr")]
#[test]
fn rendered_mockup_shows_only_the_active_screen() {
    use crate::content::screen_count;
    use leptos::tachys::view::RenderHtml;

    let html = Owner::new().with(|| {
        let carousel = RwSignal::new(Carousel::new(screen_count()));
        carousel.update(Carousel::advance);
        view! { <PhoneMockup carousel=carousel /> }.to_html()
    });

    assert!(html.contains("Smart Recommendations"));
    assert!(html.contains("Vision Care Needed"));
    assert!(!html.contains("Coverage Summary"));
    assert!(!html.contains("Cost Analysis"));
    assert_eq!(html.matches("class=\"dot").count(), PHONE_SCREENS.len());
    assert_eq!(html.matches("class=\"dot active\"").count(), 1);
}
