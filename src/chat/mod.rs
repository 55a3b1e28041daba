//! Interactive chat mode.
//!
//! Provides a REPL-style interface around the chat widget, with slash
//! commands for the language selector and request mode.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::ChatSession;
