//! Chat widget state and the submit cycle.
//!
//! DESIGN
//! ======
//! `ChatState` is the whole widget: panel visibility, the input field, and the
//! transcript. Every transition is a plain method so the widget can be tested
//! without a DOM; the Leptos component only forwards events and renders.
//!
//! A submit is split in two around the network call: [`ChatState::begin`]
//! records the user's message and locks the widget, [`ChatState::finish`]
//! applies the outcome and unlocks it. [`submit`] runs both halves against
//! any [`ChatTransport`] through a [`ChatStore`].
//!
//! CONCURRENCY
//! ===========
//! One exchange at a time. While an exchange is outstanding every trigger
//! (form submit, quick-reply button, programmatic call) is ignored, so the
//! transcript never holds more than one typing indicator and replies always
//! follow the message they answer.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;

use crate::net::chat::{ChatError, ChatTransport, exchange};

/// Shown in place of a reply whenever an exchange fails for any reason.
pub const FALLBACK_REPLY: &str = "I apologize, but I'm having trouble connecting right now. \
     Please try again in a moment or contact us directly at hello@aitechafrica.com";

/// Who (or what) a transcript entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    User,
    Bot,
    /// Placeholder shown while waiting for a reply.
    Typing,
}

/// A single transcript row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub id: u64,
    pub kind: EntryKind,
    pub text: String,
}

impl ChatEntry {
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.kind == EntryKind::User
    }
}

/// An accepted message waiting on the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingExchange {
    pub id: u64,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub open: bool,
    pub input: String,
    pub input_disabled: bool,
    pub entries: Vec<ChatEntry>,
    /// Bumped whenever the input should take focus.
    pub focus_seq: u64,
    in_flight: Option<u64>,
    next_id: u64,
}

impl ChatState {
    /// Flip panel visibility. Opening requests input focus.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.focus_seq += 1;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Escape closes an open panel. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.open && key == "Escape" {
            self.close();
            return true;
        }
        false
    }

    /// A pointer press landed somewhere on the page. Presses outside both the
    /// panel and its toggle close an open panel.
    pub fn handle_pointer(&mut self, inside_panel: bool, inside_toggle: bool) -> bool {
        if self.open && !inside_panel && !inside_toggle {
            self.close();
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Transcript without the typing placeholder.
    pub fn messages(&self) -> impl Iterator<Item = &ChatEntry> {
        self.entries.iter().filter(|e| e.kind != EntryKind::Typing)
    }

    #[must_use]
    pub fn typing_count(&self) -> usize {
        self.entries.iter().filter(|e| e.kind == EntryKind::Typing).count()
    }

    /// Accept `raw` for sending.
    ///
    /// Returns `None` without touching any state when `raw` is blank or an
    /// exchange is already outstanding. Otherwise appends the user entry
    /// (untrimmed), clears and disables the input, and appends the typing
    /// indicator.
    pub fn begin(&mut self, raw: &str) -> Option<PendingExchange> {
        if raw.trim().is_empty() || self.is_busy() {
            return None;
        }

        self.push(EntryKind::User, raw.to_owned());
        self.input.clear();
        self.input_disabled = true;
        let id = self.push(EntryKind::Typing, String::new());
        self.in_flight = Some(id);

        Some(PendingExchange { id, message: raw.to_owned() })
    }

    /// Apply the outcome of exchange `id`.
    ///
    /// Removes the typing indicator, appends the reply (or the fallback on
    /// any error), then re-enables and refocuses the input. Outcomes for an
    /// exchange that is not the outstanding one are ignored.
    pub fn finish(&mut self, id: u64, outcome: Result<String, ChatError>) {
        if self.in_flight != Some(id) {
            return;
        }
        self.in_flight = None;
        self.entries.retain(|e| e.kind != EntryKind::Typing);

        let text = outcome.unwrap_or_else(|_| FALLBACK_REPLY.to_owned());
        self.push(EntryKind::Bot, text);

        self.input_disabled = false;
        self.focus_seq += 1;
    }

    fn push(&mut self, kind: EntryKind, text: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ChatEntry { id, kind, text });
        id
    }
}

/// Somewhere a [`ChatState`] lives: a reactive signal in the app, a plain
/// cell in tests.
pub trait ChatStore {
    /// Run `f` against the state. Returns `None` if the state is gone (for a
    /// signal, when its owner has been disposed).
    fn apply<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R>;
}

impl ChatStore for RwSignal<ChatState> {
    fn apply<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl ChatStore for std::cell::RefCell<ChatState> {
    fn apply<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one full submit cycle for `raw`.
///
/// Returns `false` when the message was not accepted (blank input or an
/// exchange already outstanding). Failures are logged and surface in the
/// transcript as [`FALLBACK_REPLY`]; nothing is retried.
pub async fn submit<S, T>(store: &S, transport: &T, raw: &str) -> bool
where
    S: ChatStore + ?Sized,
    T: ChatTransport + ?Sized,
{
    let Some(Some(pending)) = store.apply(|chat| chat.begin(raw)) else {
        return false;
    };

    let outcome = exchange(transport, pending.message).await;
    if let Err(err) = &outcome {
        log::warn!("chat exchange failed: {err}");
    }

    store.apply(|chat| chat.finish(pending.id, outcome));
    true
}
