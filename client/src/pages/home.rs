//! The single landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Assembles every section in page order and owns the one window scroll
//! listener that feeds `UiState` (navbar style, scroll-to-top visibility,
//! and reading progress).

use leptos::prelude::*;

use crate::components::{
    chat_widget::ChatWidget, contact_form::ContactSection, faq::FaqSection, hero::Hero, navbar::Navbar,
    portfolio::PortfolioSection, preloader::Preloader, reveal::Reveal, scroll_top::ScrollTop,
    testimonials::Testimonials,
};
use crate::content::{BRAND, CONTACT_EMAIL, SERVICES};
#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll;

        let ui = expect_context::<RwSignal<UiState>>();
        // Pages restored mid-scroll need the chrome right before any scroll event.
        Effect::new(move || ui.update(|u| u.apply_scroll(scroll::read())));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            ui.update(|u| u.apply_scroll(scroll::read()));
        });
        on_cleanup(move || handle.remove());
    }

    let services = SERVICES
        .iter()
        .map(|s| {
            view! {
                <Reveal class="service-card">
                    <i class=format!("fas {}", s.icon)></i>
                    <h3>{s.title}</h3>
                    <p>{s.summary}</p>
                </Reveal>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Preloader/>
        <Navbar/>
        <main>
            <Hero/>

            <section id="about" class="about">
                <Reveal>
                    <h2 class="section-title">"About Us"</h2>
                    <p class="section-subtitle">
                        {BRAND}
                        " is a team of engineers, researchers, and designers building AI that works for \
                         African businesses and the people they serve."
                    </p>
                </Reveal>
            </section>

            <section id="services" class="services">
                <Reveal>
                    <h2 class="section-title">"What We Do"</h2>
                </Reveal>
                <div class="services-grid">{services}</div>
            </section>

            <PortfolioSection/>
            <Testimonials/>
            <FaqSection/>
            <ContactSection/>
        </main>

        <footer class="footer">
            <p>{format!("© {BRAND}. All rights reserved.")}</p>
            <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
        </footer>

        <ScrollTop/>
        <ChatWidget/>
    }
}
