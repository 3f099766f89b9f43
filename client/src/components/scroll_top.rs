//! Scroll-to-top button with a reading progress bar.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::scroll;

#[component]
pub fn ScrollTop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let visible = move || ui.with(|u| u.scroll_top_visible);

    view! {
        <div
            id="scroll-to-top"
            class="scroll-to-top"
            class:visible=visible
            role="button"
            aria-label="Scroll to top"
            style:opacity=move || if visible() { "1" } else { "0" }
            style:transform=move || if visible() { "translateY(0)" } else { "translateY(20px)" }
            on:click=move |_| scroll::scroll_to_top()
        >
            <i class="fas fa-chevron-up"></i>
            <div
                class="progress-bar"
                style:height=move || format!("{:.1}%", ui.with(|u| u.scroll_progress))
            ></div>
        </div>
    }
}
