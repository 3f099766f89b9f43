//! One-shot visibility triggers built on `IntersectionObserver`.
//!
//! Reveal animations and stat counters both start the first time their
//! element scrolls into view and never again. [`OnceGate`] carries that
//! rule; [`once_visible`] wires it to the browser.

#[cfg(test)]
#[path = "observe_test.rs"]
mod observe_test;

/// Fraction of a section that must be visible before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Reveal triggers slightly before the section's bottom edge enters.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Fraction of the stats block that must be visible before counting.
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Lets exactly one intersecting observation through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnceGate {
    fired: bool,
}

impl OnceGate {
    /// Returns `true` only for the first observation that intersects.
    pub fn pass(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Run `on_visible` once, the first time `element` crosses `threshold`.
///
/// The observer disconnects itself after firing. Its callback closure is
/// leaked on purpose: page sections live as long as the page.
///
/// # Errors
///
/// Returns the browser's error if the observer cannot be constructed.
#[cfg(feature = "hydrate")]
pub fn once_visible(
    element: &web_sys::Element,
    threshold: f64,
    root_margin: Option<&str>,
    on_visible: impl FnOnce() + 'static,
) -> Result<(), wasm_bindgen::JsValue> {
    use std::cell::RefCell;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    let gate = RefCell::new(OnceGate::default());
    let on_visible = RefCell::new(Some(on_visible));
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if gate.borrow_mut().pass(intersecting) {
                observer.disconnect();
                if let Some(run) = on_visible.borrow_mut().take() {
                    run();
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);
    callback.forget();
    Ok(())
}
