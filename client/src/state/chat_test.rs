use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::executor::block_on;

use super::*;
use crate::net::types::{ChatReply, ChatRequest};

// =============================================================
// Helpers
// =============================================================

/// Stub endpoint. Optionally watches the store while the request is in
/// flight so tests can observe intermediate state.
struct Stub<'a> {
    result: Result<ChatReply, ChatError>,
    calls: Cell<usize>,
    watch: Option<&'a RefCell<ChatState>>,
    observed: RefCell<Vec<ChatState>>,
}

impl<'a> Stub<'a> {
    fn replying(text: &str) -> Self {
        Self::with(Ok(ChatReply::text(text)))
    }

    fn failing(err: ChatError) -> Self {
        Self::with(Err(err))
    }

    fn with(result: Result<ChatReply, ChatError>) -> Self {
        Self { result, calls: Cell::new(0), watch: None, observed: RefCell::new(Vec::new()) }
    }

    fn watching(mut self, store: &'a RefCell<ChatState>) -> Self {
        self.watch = Some(store);
        self
    }
}

impl ChatTransport for Stub<'_> {
    async fn send(&self, _request: ChatRequest) -> Result<ChatReply, ChatError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(store) = self.watch {
            self.observed.borrow_mut().push(store.borrow().clone());
        }
        YieldOnce(false).await;
        self.result.clone()
    }
}

/// Returns `Pending` once (waking itself) so concurrent futures interleave.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            return Poll::Ready(());
        }
        self.0 = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

fn transcript(state: &ChatState) -> Vec<(String, bool)> {
    state.messages().map(|e| (e.text.clone(), e.is_user())).collect()
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn starts_closed_and_idle() {
    let state = ChatState::default();
    assert!(!state.open);
    assert!(!state.is_busy());
    assert!(!state.input_disabled);
    assert!(state.entries.is_empty());
}

#[test]
fn toggle_opens_and_requests_focus() {
    let mut state = ChatState::default();
    state.toggle();
    assert!(state.open);
    assert_eq!(state.focus_seq, 1);
}

#[test]
fn toggle_closing_does_not_request_focus() {
    let mut state = ChatState::default();
    state.toggle();
    state.toggle();
    assert!(!state.open);
    assert_eq!(state.focus_seq, 1);
}

#[test]
fn close_is_unconditional() {
    let mut state = ChatState::default();
    state.close();
    assert!(!state.open);
    state.toggle();
    state.close();
    assert!(!state.open);
}

#[test]
fn escape_closes_only_when_open() {
    let mut state = ChatState::default();
    assert!(!state.handle_key("Escape"));
    state.toggle();
    assert!(!state.handle_key("Enter"));
    assert!(state.open);
    assert!(state.handle_key("Escape"));
    assert!(!state.open);
}

#[test]
fn outside_pointer_closes_open_panel() {
    let mut state = ChatState::default();
    state.toggle();
    assert!(!state.handle_pointer(true, false));
    assert!(!state.handle_pointer(false, true));
    assert!(state.open);
    assert!(state.handle_pointer(false, false));
    assert!(!state.open);
}

#[test]
fn outside_pointer_ignored_when_closed() {
    let mut state = ChatState::default();
    assert!(!state.handle_pointer(false, false));
}

// =============================================================
// begin / finish
// =============================================================

#[test]
fn blank_input_is_a_no_op() {
    for raw in ["", " ", "   ", "\t", "\n", " \t\r\n "] {
        let mut state = ChatState { input: raw.to_owned(), ..ChatState::default() };
        assert_eq!(state.begin(raw), None, "accepted {raw:?}");
        assert!(state.entries.is_empty());
        assert_eq!(state.input, raw);
        assert!(!state.input_disabled);
    }
}

#[test]
fn begin_records_message_and_locks_input() {
    let mut state = ChatState { input: "  Hi ".into(), ..ChatState::default() };
    let pending = state.begin("  Hi ").unwrap();
    assert_eq!(pending.message, "  Hi ");
    assert_eq!(state.entries.len(), 2);
    assert_eq!(state.entries[0].kind, EntryKind::User);
    assert_eq!(state.entries[0].text, "  Hi ");
    assert_eq!(state.entries[1].kind, EntryKind::Typing);
    assert!(state.input.is_empty());
    assert!(state.input_disabled);
    assert!(state.is_busy());
}

#[test]
fn begin_while_busy_is_rejected() {
    let mut state = ChatState::default();
    state.begin("first").unwrap();
    assert_eq!(state.begin("second"), None);
    assert_eq!(state.typing_count(), 1);
    assert_eq!(transcript(&state), vec![("first".to_owned(), true)]);
}

#[test]
fn finish_success_appends_reply_verbatim() {
    let mut state = ChatState::default();
    let pending = state.begin("Hi").unwrap();
    state.finish(pending.id, Ok("<b>Hello!</b>".into()));
    assert_eq!(state.typing_count(), 0);
    assert_eq!(transcript(&state), vec![("Hi".to_owned(), true), ("<b>Hello!</b>".to_owned(), false)]);
}

#[test]
fn finish_failure_appends_fallback() {
    let mut state = ChatState::default();
    let pending = state.begin("Hi").unwrap();
    state.finish(pending.id, Err(ChatError::Status(500)));
    assert_eq!(transcript(&state), vec![("Hi".to_owned(), true), (FALLBACK_REPLY.to_owned(), false)]);
}

#[test]
fn finish_unlocks_and_refocuses_in_both_branches() {
    for outcome in [Ok("ok".to_owned()), Err(ChatError::Transport("offline".into()))] {
        let mut state = ChatState::default();
        let focus_before = state.focus_seq;
        let pending = state.begin("Hi").unwrap();
        state.finish(pending.id, outcome);
        assert!(!state.input_disabled);
        assert!(!state.is_busy());
        assert_eq!(state.focus_seq, focus_before + 1);
    }
}

#[test]
fn finish_for_stale_exchange_is_ignored() {
    let mut state = ChatState::default();
    let pending = state.begin("Hi").unwrap();
    state.finish(pending.id + 100, Ok("late".into()));
    assert!(state.is_busy());
    assert_eq!(state.typing_count(), 1);

    state.finish(pending.id, Ok("on time".into()));
    state.finish(pending.id, Ok("duplicate".into()));
    assert_eq!(state.messages().count(), 2);
}

#[test]
fn entry_ids_are_unique() {
    let mut state = ChatState::default();
    for n in 0..5 {
        let pending = state.begin(&format!("msg {n}")).unwrap();
        state.finish(pending.id, Ok(format!("reply {n}")));
    }
    let mut ids = state.entries.iter().map(|e| e.id).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), state.entries.len());
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_success_scenario() {
    let store = RefCell::new(ChatState::default());
    let stub = Stub::replying("Hello!");
    assert!(block_on(submit(&store, &stub, "Hi")));

    let state = store.borrow();
    assert_eq!(transcript(&state), vec![("Hi".to_owned(), true), ("Hello!".to_owned(), false)]);
    assert!(!state.input_disabled);
    assert_eq!(stub.calls.get(), 1);
}

#[test]
fn submit_http_500_scenario() {
    let store = RefCell::new(ChatState::default());
    let stub = Stub::failing(ChatError::Status(500));
    assert!(block_on(submit(&store, &stub, "Hi")));

    let state = store.borrow();
    assert_eq!(transcript(&state), vec![("Hi".to_owned(), true), (FALLBACK_REPLY.to_owned(), false)]);
    assert!(!state.input_disabled);
}

#[test]
fn submit_missing_reply_uses_fallback() {
    let store = RefCell::new(ChatState::default());
    let stub = Stub::with(Ok(ChatReply::default()));
    block_on(submit(&store, &stub, "Hi"));
    assert_eq!(store.borrow().messages().last().map(|e| e.text.as_str()), Some(FALLBACK_REPLY));
}

#[test]
fn submit_blank_makes_no_call() {
    let store = RefCell::new(ChatState::default());
    let stub = Stub::replying("unused");
    for raw in ["", "   ", "\t\n"] {
        assert!(!block_on(submit(&store, &stub, raw)));
    }
    assert_eq!(stub.calls.get(), 0);
    assert!(store.borrow().entries.is_empty());
}

#[test]
fn submit_shows_one_indicator_and_locked_input_while_in_flight() {
    let store = RefCell::new(ChatState::default());
    let stub = Stub::replying("Hello!").watching(&store);
    block_on(submit(&store, &stub, "Hi"));

    let observed = stub.observed.borrow();
    assert_eq!(observed.len(), 1);
    assert_eq!(observed[0].typing_count(), 1);
    assert!(observed[0].input_disabled);
    assert_eq!(store.borrow().typing_count(), 0);
}

#[test]
fn overlapping_submits_are_rejected() {
    let store = RefCell::new(ChatState::default());
    let stub = Stub::replying("Hello!").watching(&store);

    let (first, second) = block_on(async {
        futures::join!(submit(&store, &stub, "typed"), submit(&store, &stub, "quick reply"))
    });

    assert!(first);
    assert!(!second);
    assert_eq!(stub.calls.get(), 1);
    assert!(stub.observed.borrow().iter().all(|s| s.typing_count() <= 1));
    assert_eq!(
        transcript(&store.borrow()),
        vec![("typed".to_owned(), true), ("Hello!".to_owned(), false)]
    );
}

#[test]
fn sequential_submits_keep_order() {
    let store = RefCell::new(ChatState::default());
    let stub = Stub::replying("ack");
    block_on(async {
        submit(&store, &stub, "one").await;
        submit(&store, &stub, "two").await;
    });
    assert_eq!(
        transcript(&store.borrow()),
        vec![
            ("one".to_owned(), true),
            ("ack".to_owned(), false),
            ("two".to_owned(), true),
            ("ack".to_owned(), false),
        ]
    );
}

#[test]
fn repeated_failures_keep_showing_fallback() {
    let store = RefCell::new(ChatState::default());
    let stub = Stub::failing(ChatError::Timeout(30_000));
    block_on(async {
        for _ in 0..3 {
            submit(&store, &stub, "anyone?").await;
        }
    });
    let state = store.borrow();
    assert_eq!(state.messages().filter(|e| e.text == FALLBACK_REPLY).count(), 3);
    assert!(!state.input_disabled);
}
