//! Wire types for `POST /api/chat`.
//!
//! DESIGN
//! ======
//! The reply field is optional on the wire so a success response without it
//! deserializes cleanly and can be reported as its own failure instead of a
//! generic parse error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Request body: `{"message": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body: `{"reply": "..."}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
}

impl ChatReply {
    #[must_use]
    pub fn text(reply: impl Into<String>) -> Self {
        Self { reply: Some(reply.into()) }
    }
}
