//! Portfolio grid of expandable project cards.
//!
//! Only one card is open at a time; see `state::portfolio`. Opening a card
//! scrolls it to the middle of the viewport.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::PORTFOLIO;
use crate::state::portfolio::Portfolio;
use crate::util::aria;

#[cfg(feature = "hydrate")]
fn bring_into_view(card_ref: NodeRef<leptos::html::Article>) {
    let Some(card) = card_ref.get_untracked() else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Center);
    card.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(not(feature = "hydrate"))]
fn bring_into_view(_card_ref: NodeRef<leptos::html::Article>) {}

#[component]
pub fn PortfolioSection() -> impl IntoView {
    let portfolio = expect_context::<RwSignal<Portfolio>>();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let click = window_event_listener(leptos::ev::click, move |ev| {
            if portfolio.with_untracked(|p| p.open_card().is_none()) {
                return;
            }
            let inside_card = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(".portfolio-card").ok().flatten())
                .is_some();
            portfolio.update(|p| p.handle_pointer(inside_card));
        });
        on_cleanup(move || click.remove());
    }

    let cards = PORTFOLIO
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let card_ref = NodeRef::<leptos::html::Article>::new();
            let is_open = move || portfolio.with(|p| p.is_open(i));

            let toggle = move || {
                if portfolio.try_update(|p| p.toggle(i)).unwrap_or(false) {
                    bring_into_view(card_ref);
                }
            };

            view! {
                <article
                    class="portfolio-card"
                    class:open=is_open
                    tabindex="0"
                    aria-expanded=move || aria(is_open())
                    node_ref=card_ref
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        let key = ev.key();
                        if !portfolio.try_update(|p| p.handle_key(i, &key)).unwrap_or(false) {
                            return;
                        }
                        if key != "Escape" {
                            ev.prevent_default();
                        }
                        if portfolio.with_untracked(|p| p.is_open(i)) {
                            bring_into_view(card_ref);
                        }
                    }
                >
                    <span class="portfolio-category">{project.category}</span>
                    <h3>{project.title}</h3>
                    <p class="portfolio-summary">{project.summary}</p>
                    <button
                        class="portfolio-toggle"
                        aria-expanded=move || aria(is_open())
                        on:click=move |ev| {
                            ev.stop_propagation();
                            toggle();
                        }
                    >
                        {move || if is_open() { "Hide Details" } else { "View Details" }}
                    </button>
                    <div class="portfolio-details" aria-hidden=move || aria(!is_open())>
                        <button
                            class="close-portfolio"
                            aria-label="Close details"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                portfolio.update(|p| p.close(i));
                            }
                        >
                            <i class="fas fa-times"></i>
                        </button>
                        <p>{project.details}</p>
                    </div>
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="portfolio" class="portfolio">
            <Reveal>
                <h2 class="section-title">"Our Work"</h2>
            </Reveal>
            <div class="portfolio-grid">{cards}</div>
        </section>
    }
}
