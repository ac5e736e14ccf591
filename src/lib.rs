//! Podium is a terminal client for a speech-coaching chat server.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`ui::markdown`] renders the server's Markdown replies into markup
//!   through a fixed sequence of pure text stages.
//! - [`core`] owns configuration, the HTTP chat client, the message model,
//!   and the chat session with its one-request-at-a-time send gate.
//! - [`commands`] implements slash-command parsing and execution used by the
//!   chat loop.
//! - [`api`] defines the JSON request and reply payloads.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which dispatches into [`ui::chat_loop`] for
//! interactive sessions.

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;
pub mod utils;
