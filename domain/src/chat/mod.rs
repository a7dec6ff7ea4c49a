//! Chat conversation types
//!
//! - [`entities`] — what the client sends (`ChatMessage`, `ChatRequest`)
//! - [`reply`] — what the bridge answers (`ChatReply`) and its
//!   application-level outcome (`AppResult`)

pub mod entities;
pub mod reply;
