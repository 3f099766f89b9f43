#![allow(clippy::float_cmp)]

use super::*;

fn metrics(scroll_y: f64) -> ScrollMetrics {
    ScrollMetrics { scroll_y, scroll_height: 4200.0, client_height: 1000.0 }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_shows_preloader_only() {
    let ui = UiState::default();
    assert!(ui.preloader_visible);
    assert!(!ui.menu_open);
    assert!(!ui.scrolled);
    assert!(!ui.scroll_top_visible);
    assert_eq!(ui.scroll_progress, 0.0);
}

#[test]
fn hide_preloader_is_idempotent() {
    let mut ui = UiState::default();
    ui.hide_preloader();
    ui.hide_preloader();
    assert!(!ui.preloader_visible);
}

// =============================================================
// Menu
// =============================================================

#[test]
fn toggle_menu_flips() {
    let mut ui = UiState::default();
    ui.toggle_menu();
    assert!(ui.menu_open);
    ui.toggle_menu();
    assert!(!ui.menu_open);
}

#[test]
fn close_menu_from_either_state() {
    let mut ui = UiState::default();
    ui.close_menu();
    assert!(!ui.menu_open);
    ui.toggle_menu();
    ui.close_menu();
    assert!(!ui.menu_open);
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn apply_scroll_near_top() {
    let mut ui = UiState::default();
    ui.apply_scroll(metrics(50.0));
    assert!(!ui.scrolled);
    assert!(!ui.scroll_top_visible);
}

#[test]
fn apply_scroll_mid_page() {
    let mut ui = UiState::default();
    ui.apply_scroll(metrics(1600.0));
    assert!(ui.scrolled);
    assert!(!ui.scroll_top_visible);
    assert_eq!(ui.scroll_progress, 50.0);
}

#[test]
fn apply_scroll_deep_then_back_to_top() {
    let mut ui = UiState::default();
    ui.apply_scroll(metrics(3200.0));
    assert!(ui.scroll_top_visible);
    assert_eq!(ui.scroll_progress, 100.0);

    ui.apply_scroll(metrics(0.0));
    assert!(!ui.scrolled);
    assert!(!ui.scroll_top_visible);
    assert_eq!(ui.scroll_progress, 0.0);
}
