//! Chat transport: the seam between the widget and `POST /api/chat`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` timeout.
//! Server-side (SSR) and native tests: [`HttpTransport`] always reports
//! [`ChatError::Unavailable`]; tests drive the widget through stub
//! [`ChatTransport`] implementations instead.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (network, status, body, missing reply, timeout) is a
//! distinct [`ChatError`] so it can be logged precisely, but the widget shows
//! the same fallback text for all of them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::future::Future;
use std::time::Duration;

use super::types::{ChatReply, ChatRequest};

/// Default chat endpoint, relative to the page origin.
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Default time allowed for one exchange before it counts as failed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors produced by a chat exchange.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("chat request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("chat response error: status {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("chat response parse failed: {0}")]
    Parse(String),

    /// The response parsed but carried no `reply`.
    #[error("chat response missing reply")]
    MissingReply,

    /// No response within the configured timeout.
    #[error("chat request timed out after {0} ms")]
    Timeout(u32),

    /// Called outside the browser.
    #[error("chat is not available on the server")]
    Unavailable,
}

/// Where and how long to talk to the chat endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { endpoint: CHAT_ENDPOINT.to_owned(), timeout: DEFAULT_TIMEOUT }
    }
}

impl ChatConfig {
    /// Timeout in whole milliseconds, saturating at `u32::MAX`.
    #[must_use]
    pub fn timeout_ms(&self) -> u32 {
        u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX)
    }
}

/// Sends one chat message and resolves with the decoded response body.
pub trait ChatTransport {
    fn send(&self, request: ChatRequest) -> impl Future<Output = Result<ChatReply, ChatError>>;
}

/// Run one exchange and extract the reply text.
///
/// # Errors
///
/// Propagates transport failures and maps a missing `reply` to
/// [`ChatError::MissingReply`].
pub async fn exchange<T: ChatTransport + ?Sized>(transport: &T, message: String) -> Result<String, ChatError> {
    let body = transport.send(ChatRequest { message }).await?;
    body.reply.ok_or(ChatError::MissingReply)
}

/// Browser transport posting JSON to [`ChatConfig::endpoint`].
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    config: ChatConfig,
}

impl HttpTransport {
    #[must_use]
    pub fn new(config: ChatConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    #[cfg(feature = "hydrate")]
    async fn post(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        let resp = gloo_net::http::Request::post(&self.config.endpoint)
            .json(request)
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ChatError::Status(resp.status()));
        }
        resp.json::<ChatReply>()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))
    }
}

impl ChatTransport for HttpTransport {
    fn send(&self, request: ChatRequest) -> impl Future<Output = Result<ChatReply, ChatError>> {
        async move {
            #[cfg(feature = "hydrate")]
            {
                use futures::future::{Either, select};

                let timeout_ms = self.config.timeout_ms();
                let call = std::pin::pin!(self.post(&request));
                let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(timeout_ms));
                match select(call, timer).await {
                    Either::Left((result, _)) => result,
                    Either::Right(((), _)) => Err(ChatError::Timeout(timeout_ms)),
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                drop(request);
                Err(ChatError::Unavailable)
            }
        }
    }
}
