//! Hero mockup screen carousel.
//!
//! DESIGN
//! ======
//! `Carousel` is the pure index model; `CarouselTicker` gates ticks behind a
//! liveness flag so a timer task outliving its component cannot advance it.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Time each screen stays on display.
pub const SCREEN_INTERVAL: Duration = Duration::from_millis(3000);

/// Active-screen index over a fixed, non-empty screen sequence.
///
/// The index is always `< len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: NonZeroUsize,
}

impl Carousel {
    #[must_use]
    pub fn new(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn screen_count(&self) -> usize {
        self.len.get()
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// Move to the next screen, wrapping to zero after the last.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len.get();
    }
}

/// Cancellation handle shared by the timer task and the component cleanup.
#[derive(Clone, Debug)]
pub struct CarouselTicker {
    alive: Arc<AtomicBool>,
}

impl Default for CarouselTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselTicker {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Advance `carousel` unless cancelled. Returns whether it advanced.
    pub fn tick(&self, carousel: &mut Carousel) -> bool {
        if !self.is_alive() {
            return false;
        }
        carousel.advance();
        true
    }
}
