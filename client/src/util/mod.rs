//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (scroll metrics,
//! viewport size, intersection observers) and small numeric helpers from
//! component logic to improve reuse and testability.

pub mod counter;
pub mod observe;
pub mod scroll;

/// `aria-expanded` / `aria-hidden` attribute value for a boolean.
#[must_use]
pub fn aria(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
