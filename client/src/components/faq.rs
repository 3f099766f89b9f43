//! FAQ accordion.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::FAQS;
use crate::state::faq::Faq;
use crate::util::aria;

/// Extra room below an open answer, in pixels.
const ANSWER_PADDING_PX: i32 = 24;

/// `max-height` for an open answer, sized to its content.
#[cfg(feature = "hydrate")]
fn open_height(answer_ref: NodeRef<leptos::html::Div>) -> String {
    answer_ref
        .get()
        .map(|el| format!("{}px", el.scroll_height() + ANSWER_PADDING_PX))
        .unwrap_or_default()
}

#[cfg(not(feature = "hydrate"))]
fn open_height(_answer_ref: NodeRef<leptos::html::Div>) -> String {
    String::new()
}

#[component]
pub fn FaqSection() -> impl IntoView {
    let faq = expect_context::<RwSignal<Faq>>();
    // Bumped on window resize so open answers re-measure.
    let resized = RwSignal::new(0_u32);

    #[cfg(feature = "hydrate")]
    {
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            resized.update(|n| *n = n.wrapping_add(1));
        });
        on_cleanup(move || resize.remove());
    }

    let items = FAQS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let answer_ref = NodeRef::<leptos::html::Div>::new();
            let is_open = move || faq.with(|f| f.is_open(i));
            let max_height = move || {
                resized.track();
                if is_open() { open_height(answer_ref) } else { String::new() }
            };

            view! {
                <div class="faq-item" class:open=is_open data-faq="">
                    <button
                        class="faq-question"
                        aria-expanded=move || aria(is_open())
                        on:click=move |_| {
                            faq.update(|f| {
                                f.toggle(i);
                            });
                        }
                    >
                        <span>{item.question}</span>
                        <i class="fas fa-chevron-down"></i>
                    </button>
                    <div
                        class="faq-answer"
                        aria-hidden=move || aria(!is_open())
                        style:max-height=max_height
                        node_ref=answer_ref
                    >
                        <p>{item.answer}</p>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="faq" class="faq">
            <Reveal>
                <h2 class="section-title">"Frequently Asked Questions"</h2>
            </Reveal>
            <div class="faq-list">{items}</div>
        </section>
    }
}
