//! Scroll position readings and the thresholds that depend on them.
//!
//! Reads are browser-only; SSR and native tests see a page scrolled to the
//! top with nothing to scroll.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Navbar switches to its compact style past this offset.
pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 100.0;

/// The scroll-to-top control appears past this offset.
pub const SCROLL_TOP_VISIBLE_AFTER_PX: f64 = 2000.0;

/// One reading of the document's scroll state, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// How far down the page the reader is, in percent `[0, 100]`.
    /// A page that cannot scroll reports 0.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let scrollable = self.scroll_height - self.client_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
    }

    #[must_use]
    pub fn navbar_scrolled(&self) -> bool {
        self.scroll_y > NAVBAR_SCROLLED_AFTER_PX
    }

    #[must_use]
    pub fn scroll_top_visible(&self) -> bool {
        self.scroll_y > SCROLL_TOP_VISIBLE_AFTER_PX
    }
}

/// Read the current scroll state from the window.
pub fn read() -> ScrollMetrics {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ScrollMetrics::default();
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let (scroll_height, client_height) = window
            .document()
            .and_then(|d| d.document_element())
            .map_or((0.0, 0.0), |el| (f64::from(el.scroll_height()), f64::from(el.client_height())));
        ScrollMetrics { scroll_y, scroll_height, client_height }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ScrollMetrics::default()
    }
}

/// Current viewport size `(inner_width, inner_height)` in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (width, height)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (0.0, 0.0)
    }
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
