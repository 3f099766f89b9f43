//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page section owns one plain state struct. `app.rs` wraps them in
//! `RwSignal`s and provides them via context; components read and update
//! them through their methods so every transition is testable natively.

pub mod carousel;
pub mod chat;
pub mod contact;
pub mod faq;
pub mod portfolio;
pub mod ui;
