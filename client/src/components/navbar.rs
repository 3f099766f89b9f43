//! Top navigation bar with the mobile hamburger menu.

use leptos::prelude::*;

use crate::content::{BRAND, NAV_LINKS};
use crate::state::ui::UiState;
use crate::util::aria;

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = move || ui.with(|u| u.menu_open);

    view! {
        <nav class="navbar" class:scrolled=move || ui.with(|u| u.scrolled)>
            <div class="nav-container">
                <a href="#home" class="logo">{BRAND}</a>
                <ul id="navMenu" class="nav-menu" class:active=menu_open>
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <li>
                                    <a href={*href} class="nav-link" on:click=move |_| ui.update(UiState::close_menu)>
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <button
                    id="hamburger"
                    class="hamburger"
                    class:active=menu_open
                    aria-label="Toggle navigation"
                    aria-expanded=move || aria(menu_open())
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}
