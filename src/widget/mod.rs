//! The chat widget controller.
//!
//! A [`ChatWidget`] reads the input field and the language selection from its
//! [`ChatView`], appends the user's message to an append-only [`ChatLog`],
//! posts it to a [`Collaborator`](crate::client::Collaborator) and renders the
//! reply. User text only ever goes through the safe render path; collaborator
//! replies go through the trusted one.

mod controller;
mod log;
mod message;
/// Safe (literal) and trusted (markup) rendering.
pub mod render;
mod view;

pub use controller::{
    ChatWidget, Key, Modifiers, PendingTurn, TurnId, TurnOutcome, UiEvent, WidgetError,
};
pub use log::ChatLog;
pub use message::{
    EMPTY_REPLY_FALLBACK, FAILURE_FALLBACK, Message, RenderMode, Sender, TrustedMarkup,
};
pub use view::{ChatView, TerminalView};
