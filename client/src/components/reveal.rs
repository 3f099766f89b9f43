//! Scroll-reveal wrapper: content animates in the first time it is seen.

use leptos::prelude::*;

/// Wraps `children` in an element tagged for reveal. The `aos-animate`
/// class is added on first intersection and never removed.
#[component]
pub fn Reveal(
    /// Animation name read by the stylesheet.
    #[prop(default = "fade-up")]
    effect: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let shown = RwSignal::new(false);
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        use crate::util::observe::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, once_visible};

        let Some(el) = node_ref.get() else {
            return;
        };
        if let Err(err) = once_visible(&el, REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), move || shown.set(true)) {
            log::warn!("reveal observer unavailable: {err:?}");
            shown.set(true);
        }
    });

    view! {
        <div class=class data-aos=effect class:aos-animate=move || shown.get() node_ref=node_ref>
            {children()}
        </div>
    }
}
