//! Floating chat assistant: toggle button, panel, transcript, and input.
//!
//! SYSTEM CONTEXT
//! ==============
//! All state transitions go through `ChatState`; this component forwards
//! clicks, keys, and form submits and renders the transcript. Replies are
//! rendered as text nodes, never as markup.
//!
//! Escape and outside clicks are window listeners, removed on cleanup.

use leptos::prelude::*;

use crate::content::{CHAT_GREETING, QUICK_REPLIES};
use crate::net::chat::HttpTransport;
use crate::state::chat::{ChatEntry, ChatState, EntryKind, submit};
use crate::util::aria;

/// Start a submit cycle for `raw` against the site's chat endpoint.
fn send(chat: RwSignal<ChatState>, raw: String) {
    leptos::task::spawn_local(async move {
        submit(&chat, &HttpTransport::default(), &raw).await;
    });
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry in view.
    Effect::new(move |_: Option<usize>| {
        let count = chat.with(|c| c.entries.len());
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
        count
    });

    Effect::new(move |last: Option<u64>| {
        let seq = chat.with(|c| c.focus_seq);
        if last.is_some_and(|prev| prev != seq) {
            #[cfg(feature = "hydrate")]
            {
                if let Some(el) = input_ref.get_untracked() {
                    if let Err(err) = el.focus() {
                        log::debug!("chat input focus failed: {err:?}");
                    }
                }
            }
        }
        seq
    });

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            if chat.with_untracked(|c| c.open) {
                chat.update(|c| {
                    c.handle_key(&ev.key());
                });
            }
        });

        let click = window_event_listener(leptos::ev::click, move |ev| {
            if !chat.with_untracked(|c| c.open) {
                return;
            }
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
                return;
            };
            let inside_panel = panel_ref.get_untracked().is_some_and(|el| el.contains(Some(&target)));
            let inside_toggle = toggle_ref.get_untracked().is_some_and(|el| el.contains(Some(&target)));
            chat.update(|c| {
                c.handle_pointer(inside_panel, inside_toggle);
            });
        });

        on_cleanup(move || {
            keydown.remove();
            click.remove();
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        send(chat, chat.with_untracked(|c| c.input.clone()));
    };

    let is_open = move || chat.with(|c| c.open);

    view! {
        <div class="chatbot">
            <button
                id="chatbot-toggle"
                class="chatbot-toggle"
                class:active=is_open
                aria-label="Open chat assistant"
                node_ref=toggle_ref
                on:click=move |_| chat.update(ChatState::toggle)
            >
                <i class="fas fa-comments"></i>
            </button>

            <div
                id="chatbot-window"
                class="chatbot-window"
                class:open=is_open
                aria-hidden=move || aria(!is_open())
                node_ref=panel_ref
            >
                <div class="chatbot-header">
                    <span class="chatbot-title">"AI Assistant"</span>
                    <button
                        id="chatbot-close"
                        class="chatbot-close"
                        aria-label="Close chat"
                        on:click=move |_| chat.update(ChatState::close)
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                <div id="chatbot-messages" class="chatbot-messages" node_ref=messages_ref>
                    <div class="chat-message bot-message">
                        <div class="message-avatar"><i class="fas fa-robot"></i></div>
                        <div class="message-content"><p>{CHAT_GREETING}</p></div>
                    </div>
                    {move || chat.with(|c| c.entries.iter().map(entry_view).collect::<Vec<_>>())}
                </div>

                <div class="quick-replies">
                    {QUICK_REPLIES
                        .iter()
                        .map(|(label, message)| {
                            view! {
                                <button
                                    class="quick-reply"
                                    data-message={*message}
                                    on:click=move |_| send(chat, (*message).to_owned())
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <form id="chatbot-form" class="chatbot-form" on:submit=on_submit>
                    <input
                        id="chatbot-input"
                        type="text"
                        placeholder="Type your message..."
                        autocomplete="off"
                        node_ref=input_ref
                        disabled=move || chat.with(|c| c.input_disabled)
                        prop:value=move || chat.with(|c| c.input.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            chat.update(|c| c.input = value);
                        }
                    />
                    <button type="submit" class="chatbot-send" aria-label="Send message">
                        <i class="fas fa-paper-plane"></i>
                    </button>
                </form>
            </div>
        </div>
    }
}

fn entry_view(entry: &ChatEntry) -> AnyView {
    match entry.kind {
        EntryKind::Typing => view! {
            <div class="chat-message bot-message typing">
                <div class="message-avatar"><i class="fas fa-robot"></i></div>
                <div class="message-content">
                    <div class="typing-indicator"><span></span><span></span><span></span></div>
                </div>
            </div>
        }
        .into_any(),
        EntryKind::User | EntryKind::Bot => {
            let is_user = entry.is_user();
            let text = entry.text.clone();
            view! {
                <div class="chat-message" class:user-message=is_user class:bot-message={!is_user}>
                    <div class="message-avatar">
                        <i class="fas" class:fa-user=is_user class:fa-robot={!is_user}></i>
                    </div>
                    <div class="message-content"><p>{text}</p></div>
                </div>
            }
            .into_any()
        }
    }
}
