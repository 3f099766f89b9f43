//! Testimonial carousel: slide index, autoplay, and swipe handling.
//!
//! DESIGN
//! ======
//! Autoplay is modeled as an `epoch` counter rather than a timer handle.
//! Every navigation bumps the epoch; the component restarts its interval
//! whenever the epoch or the pause flag changes. That gives "autoplay
//! restarts after any navigation" without the state owning a browser timer.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Delay between automatic advances.
pub const AUTOPLAY_MS: u32 = 5000;

/// Horizontal travel a touch must exceed to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left; show the next slide.
    Next,
    /// Finger moved right; show the previous slide.
    Previous,
}

/// Classify a touch that started at `start_x` and ended at `end_x`.
#[must_use]
pub fn classify_swipe(start_x: f64, end_x: f64) -> Option<Swipe> {
    if end_x < start_x - SWIPE_THRESHOLD_PX {
        Some(Swipe::Next)
    } else if end_x > start_x + SWIPE_THRESHOLD_PX {
        Some(Swipe::Previous)
    } else {
        None
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Carousel {
    index: usize,
    len: usize,
    paused: bool,
    epoch: u64,
    touch_start_x: Option<f64>,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, ..Self::default() }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Changes whenever the autoplay interval should restart.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether an autoplay interval should be running right now.
    #[must_use]
    pub fn autoplay_active(&self) -> bool {
        !self.paused && self.len > 1
    }

    /// Jump to slide `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.index = index;
        self.epoch += 1;
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.go_to((self.index + 1) % self.len);
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.go_to((self.index + self.len - 1) % self.len);
        }
    }

    /// One autoplay interval elapsed.
    pub fn autoplay_tick(&mut self) {
        if self.autoplay_active() {
            self.next();
        }
    }

    /// Pointer entered the track.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Pointer left the track.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn touch_start(&mut self, x: f64) {
        self.touch_start_x = Some(x);
        self.pause();
    }

    /// Finish a touch at `x`: navigate on a swipe, then resume autoplay.
    pub fn touch_end(&mut self, x: f64) -> Option<Swipe> {
        let swipe = self.touch_start_x.take().and_then(|start| classify_swipe(start, x));
        match swipe {
            Some(Swipe::Next) => self.next(),
            Some(Swipe::Previous) => self.prev(),
            None => {}
        }
        self.resume();
        swipe
    }
}
