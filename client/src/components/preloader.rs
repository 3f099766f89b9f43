//! Full-page preloader, hidden shortly after the page mounts.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn Preloader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::ui::PRELOADER_MS;
        gloo_timers::callback::Timeout::new(PRELOADER_MS, move || {
            ui.try_update(UiState::hide_preloader);
        })
        .forget();
    }

    view! {
        <div
            id="preloader"
            class="preloader"
            style:display=move || if ui.with(|u| u.preloader_visible) { "flex" } else { "none" }
        >
            <div class="loader"></div>
        </div>
    }
}
