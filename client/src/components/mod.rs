//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page and forward DOM events to the section
//! controllers in `state`, read from Leptos context providers. Browser-only
//! wiring (timers, observers, window listeners) sits behind the `hydrate`
//! feature so the same components render on the server.

pub mod chat_widget;
pub mod contact_form;
pub mod faq;
pub mod hero;
pub mod navbar;
pub mod portfolio;
pub mod preloader;
pub mod reveal;
pub mod scroll_top;
pub mod stats;
pub mod testimonials;
