use super::*;

fn three() -> Carousel {
    Carousel::new(NonZeroUsize::new(3).expect("non-zero"))
}

// =============================================================
// Carousel
// =============================================================

#[test]
fn carousel_starts_at_zero() {
    let carousel = three();
    assert_eq!(carousel.index(), 0);
    assert!(carousel.is_active(0));
    assert!(!carousel.is_active(1));
}

#[test]
fn carousel_advances_and_wraps() {
    let mut carousel = three();
    let mut seen = Vec::new();
    for _ in 0..7 {
        carousel.advance();
        seen.push(carousel.index());
    }
    assert_eq!(seen, vec![1, 2, 0, 1, 2, 0, 1]);
}

#[test]
fn carousel_index_stays_in_range_for_any_tick_count() {
    for len in 1..=5 {
        let mut carousel = Carousel::new(NonZeroUsize::new(len).expect("non-zero"));
        for ticks in 0..(len * 4 + 1) {
            assert!(carousel.index() < carousel.screen_count(), "len {len} ticks {ticks}");
            assert_eq!(carousel.index(), ticks % len);
            carousel.advance();
        }
    }
}

#[test]
fn single_screen_carousel_never_moves() {
    let mut carousel = Carousel::new(NonZeroUsize::MIN);
    carousel.advance();
    carousel.advance();
    assert_eq!(carousel.index(), 0);
}

#[test]
fn exactly_one_index_is_active() {
    let mut carousel = three();
    for _ in 0..5 {
        let active = (0..carousel.screen_count()).filter(|i| carousel.is_active(*i)).count();
        assert_eq!(active, 1);
        carousel.advance();
    }
}

#[test]
fn screen_interval_is_three_seconds() {
    assert_eq!(SCREEN_INTERVAL, Duration::from_secs(3));
}

// =============================================================
// CarouselTicker
// =============================================================

#[test]
fn live_ticker_advances_carousel() {
    let ticker = CarouselTicker::new();
    let mut carousel = three();
    assert!(ticker.tick(&mut carousel));
    assert_eq!(carousel.index(), 1);
}

#[test]
fn cancelled_ticker_no_longer_changes_index() {
    let ticker = CarouselTicker::new();
    let mut carousel = three();
    ticker.tick(&mut carousel);
    ticker.cancel();
    for _ in 0..4 {
        assert!(!ticker.tick(&mut carousel));
    }
    assert_eq!(carousel.index(), 1);
}

#[test]
fn cancel_is_visible_through_clones() {
    let ticker = CarouselTicker::new();
    let task_side = ticker.clone();
    ticker.cancel();
    assert!(!task_side.is_alive());
}
