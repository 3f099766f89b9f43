//! Page chrome state: preloader, navbar, and scroll-to-top control.
//!
//! DESIGN
//! ======
//! Everything here is derived from two inputs: time since mount (preloader)
//! and the latest scroll reading. Keeping it in one struct lets a single
//! window scroll listener update all of it in one signal write.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::scroll::ScrollMetrics;

/// How long the preloader covers the page after mount.
pub const PRELOADER_MS: u32 = 2500;

#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub preloader_visible: bool,
    pub menu_open: bool,
    /// Navbar compact style.
    pub scrolled: bool,
    pub scroll_top_visible: bool,
    /// Reading progress in percent, `[0, 100]`.
    pub scroll_progress: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            preloader_visible: true,
            menu_open: false,
            scrolled: false,
            scroll_top_visible: false,
            scroll_progress: 0.0,
        }
    }
}

impl UiState {
    pub fn hide_preloader(&mut self) {
        self.preloader_visible = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Nav link followed; the mobile menu folds away.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn apply_scroll(&mut self, metrics: ScrollMetrics) {
        self.scrolled = metrics.navbar_scrolled();
        self.scroll_top_visible = metrics.scroll_top_visible();
        self.scroll_progress = metrics.progress_percent();
    }
}
