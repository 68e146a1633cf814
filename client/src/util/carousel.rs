//! Screen carousel timer wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hero mockup rotates screens while mounted. The timer task runs only in
//! the browser and stops at component cleanup.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use leptos::prelude::*;

use crate::state::carousel::{Carousel, CarouselTicker};

/// Advance `carousel` every `SCREEN_INTERVAL` until the owning component is
/// cleaned up. Returns the ticker so callers can also stop it early.
pub fn install_carousel(carousel: RwSignal<Carousel>) -> CarouselTicker {
    let ticker = CarouselTicker::new();

    #[cfg(feature = "hydrate")]
    {
        let task_ticker = ticker.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(crate::state::carousel::SCREEN_INTERVAL).await;
                if !task_ticker.is_alive() {
                    break;
                }
                if carousel
                    .try_update(|c| {
                        task_ticker.tick(c);
                    })
                    .is_none()
                {
                    break;
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = carousel;
    }

    let cleanup_ticker = ticker.clone();
    on_cleanup(move || cleanup_ticker.cancel());
    ticker
}
