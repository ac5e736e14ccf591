//! Presentation layer for chat sessions.
//!
//! - [`markdown`]: turns bot replies into markup.
//! - [`chat_loop`]: the line-oriented interaction loop that dispatches user
//!   input to [`crate::commands`] and sends messages through
//!   [`crate::core::session`].
//!
//! Ownership boundary: this layer presents and captures interaction state, while
//! [`crate::core`] owns domain logic and backend coordination.

pub mod chat_loop;
pub mod markdown;
