//! Contact form. Submissions are logged to the console, not sent.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::CONTACT_EMAIL;
use crate::state::contact::ContactForm;

/// Field names read from the form on submit.
const FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

#[cfg(feature = "hydrate")]
fn log_fields(form_ref: NodeRef<leptos::html::Form>) {
    let Some(form) = form_ref.get_untracked() else {
        return;
    };
    match web_sys::FormData::new_with_form(&form) {
        Ok(data) => {
            let fields: Vec<(&str, String)> = FIELDS
                .iter()
                .map(|name| (*name, data.get(name).as_string().unwrap_or_default()))
                .collect();
            log::info!("contact form submitted: {fields:?}");
        }
        Err(err) => log::warn!("contact form unreadable: {err:?}"),
    }
}

#[cfg(feature = "hydrate")]
fn schedule_confirmation(form: RwSignal<ContactForm>) {
    use crate::state::contact::{SENDING_MS, SENT_MS};
    use gloo_timers::callback::Timeout;

    Timeout::new(SENDING_MS, move || {
        form.try_update(ContactForm::sent);
        Timeout::new(SENT_MS, move || {
            form.try_update(ContactForm::restore);
        })
        .forget();
    })
    .forget();
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactForm>>();
    let form_ref = NodeRef::<leptos::html::Form>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move |previous: Option<u64>| {
        let seq = form.with(|f| f.reset_seq);
        if crate::state::contact::reset_due(previous, seq) {
            if let Some(el) = form_ref.get_untracked() {
                el.reset();
            }
        }
        seq
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(ContactForm::submit).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            log_fields(form_ref);
            schedule_confirmation(form);
        }
    };

    view! {
        <section id="contact" class="contact">
            <Reveal>
                <h2 class="section-title">"Get in Touch"</h2>
                <p class="section-subtitle">
                    "Tell us about your project, or email us at "
                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                </p>
            </Reveal>
            <form id="contactForm" class="contact-form" node_ref=form_ref on:submit=on_submit>
                <input type="text" name={FIELDS[0]} placeholder="Your Name" required/>
                <input type="email" name={FIELDS[1]} placeholder="Your Email" required/>
                <input type="text" name={FIELDS[2]} placeholder="Subject"/>
                <textarea name={FIELDS[3]} rows="5" placeholder="Your Message" required></textarea>
                <button type="submit" class="btn btn-primary" disabled=move || form.with(ContactForm::button_disabled)>
                    {move || form.with(ContactForm::button_label)}
                </button>
            </form>
        </section>
    }
}
