//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::{BRAND, FAQS, TESTIMONIALS};
use crate::pages::home::HomePage;
use crate::state::{
    carousel::Carousel, chat::ChatState, contact::ContactForm, faq::Faq, portfolio::Portfolio, ui::UiState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every interactive section keeps its state in a context-provided signal
/// so the page and the floating widgets can share it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(ChatState::default()));
    provide_context(RwSignal::new(Portfolio::default()));
    provide_context(RwSignal::new(Carousel::new(TESTIMONIALS.len())));
    provide_context(RwSignal::new(Faq::new(FAQS.len())));
    provide_context(RwSignal::new(ContactForm::default()));

    view! {
        <Stylesheet id="site" href="/css/style.css"/>
        <Title text=BRAND/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
