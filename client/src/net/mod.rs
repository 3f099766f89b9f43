//! Networking for the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the `/api/chat` wire schema and `chat` owns the transport
//! seam plus the browser HTTP implementation behind it.

pub mod chat;
pub mod types;
