use thiserror::Error;

use super::log::ChatLog;
use super::message::{EMPTY_REPLY_FALLBACK, FAILURE_FALLBACK, Message, TrustedMarkup};
use super::view::ChatView;
use crate::client::{ChatReply, ChatRequest, Collaborator, RequestMode, TransportError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Chat widget listeners are already bound")]
    AlreadyInitialized,
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };

    pub const fn any(self) -> bool {
        self.shift || self.ctrl || self.alt
    }
}

/// Keys the input listener distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// Events delivered to the bound listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SendClicked,
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Identifies one user turn. Increases monotonically per widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TurnId(u64);

impl TurnId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A submitted message whose reply has not been rendered yet.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    id: TurnId,
    request: ChatRequest,
}

impl PendingTurn {
    pub const fn id(&self) -> TurnId {
        self.id
    }

    pub const fn request(&self) -> &ChatRequest {
        &self.request
    }
}

/// How a send attempt or event ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The event was not a send trigger, or listeners are not bound.
    Ignored,
    /// The trimmed input was empty. Nothing was appended or sent.
    Skipped,
    /// Another turn is outstanding. Nothing was appended or sent.
    Busy,
    /// The reply was rendered as markup.
    Answered,
    /// The collaborator replied without content; the fallback was rendered.
    EmptyAnswer,
    /// The request failed; the fallback was rendered.
    Failed,
    /// The reply belonged to a turn that is no longer outstanding.
    Stale,
}

/// Controller wiring an input field and a send control to a chat log.
///
/// Owns its view and collaborator handles; the log is only mutated through
/// `&mut self`, so appends are serialized.
pub struct ChatWidget<V, C> {
    view: V,
    collaborator: C,
    log: ChatLog,
    mode: RequestMode,
    bound: bool,
    last_turn: u64,
    outstanding: Option<TurnId>,
}

impl<V: ChatView, C: Collaborator> ChatWidget<V, C> {
    pub fn new(view: V, collaborator: C) -> Self {
        Self {
            view,
            collaborator,
            log: ChatLog::new(),
            mode: RequestMode::Text,
            bound: false,
            last_turn: 0,
            outstanding: None,
        }
    }

    /// Binds the send-control and key-down listeners. Only the first call binds.
    pub fn initialize(&mut self) -> Result<(), WidgetError> {
        if self.bound {
            return Err(WidgetError::AlreadyInitialized);
        }
        self.bound = true;
        tracing::debug!("chat widget listeners bound");
        Ok(())
    }

    pub const fn is_initialized(&self) -> bool {
        self.bound
    }

    /// Routes a UI event to the bound listeners.
    pub async fn handle_event(&mut self, event: UiEvent) -> TurnOutcome {
        if !self.bound {
            return TurnOutcome::Ignored;
        }

        match event {
            UiEvent::SendClicked => self.send_message().await,
            UiEvent::KeyDown {
                key: Key::Enter,
                modifiers,
            } if !modifiers.any() => self.send_message().await,
            UiEvent::KeyDown {
                key: Key::Enter,
                modifiers,
            } if modifiers.shift => {
                self.view.insert_newline();
                TurnOutcome::Ignored
            }
            UiEvent::KeyDown { .. } => TurnOutcome::Ignored,
        }
    }

    /// Appends a message to the log and shows it at the bottom of the view.
    pub fn append_message(&mut self, message: Message) {
        let appended = self.log.push(message);
        self.view.append(appended);
        self.view.scroll_to_bottom();
    }

    /// Renders every log entry into the view again, oldest first.
    pub fn redraw_log(&mut self) {
        for message in &self.log {
            self.view.append(message);
        }
        self.view.scroll_to_bottom();
    }

    /// Runs one full turn: submit, wait for the collaborator, render the reply.
    pub async fn send_message(&mut self) -> TurnOutcome {
        let turn = match self.begin_turn() {
            Ok(turn) => turn,
            Err(outcome) => return outcome,
        };
        let result = self.dispatch(&turn).await;
        self.complete_turn(turn.id(), result)
    }

    /// Reads the input, appends the user message and clears the input.
    ///
    /// Returns `Err(Skipped)` for blank input and `Err(Busy)` while another
    /// turn is outstanding; neither has side effects.
    pub fn begin_turn(&mut self) -> Result<PendingTurn, TurnOutcome> {
        if self.outstanding.is_some() {
            tracing::debug!("send ignored: a reply is still outstanding");
            return Err(TurnOutcome::Busy);
        }

        let message = self.view.input_value();
        let language = self.view.selected_language();
        if message.trim().is_empty() {
            return Err(TurnOutcome::Skipped);
        }

        self.append_message(Message::user(message.clone()));
        self.view.clear_input();

        self.last_turn += 1;
        let id = TurnId(self.last_turn);
        self.outstanding = Some(id);
        self.view.set_send_enabled(false);

        Ok(PendingTurn {
            id,
            request: ChatRequest {
                message,
                language,
                mode: self.mode,
            },
        })
    }

    /// Sends the turn's request to the collaborator.
    pub async fn dispatch(&self, turn: &PendingTurn) -> Result<ChatReply, TransportError> {
        tracing::info!(turn = turn.id.get(), "dispatching message");
        self.collaborator.get_response(&turn.request).await
    }

    /// Renders the reply (or a fallback) for the outstanding turn.
    pub fn complete_turn(
        &mut self,
        id: TurnId,
        result: Result<ChatReply, TransportError>,
    ) -> TurnOutcome {
        if self.outstanding != Some(id) {
            tracing::debug!(turn = id.get(), "dropping reply for a stale turn");
            return TurnOutcome::Stale;
        }
        self.outstanding = None;

        let outcome = match result {
            Ok(reply) => match reply.into_answer() {
                Some(answer) => {
                    let markup = TrustedMarkup::from_collaborator(answer);
                    self.append_message(Message::bot_markup(markup));
                    TurnOutcome::Answered
                }
                None => {
                    self.append_message(Message::bot_plain(EMPTY_REPLY_FALLBACK));
                    TurnOutcome::EmptyAnswer
                }
            },
            Err(e) => {
                tracing::error!(turn = id.get(), error = %e, "error sending message");
                self.append_message(Message::bot_plain(FAILURE_FALLBACK));
                TurnOutcome::Failed
            }
        };

        self.view.set_send_enabled(true);
        outcome
    }

    pub const fn is_awaiting_reply(&self) -> bool {
        self.outstanding.is_some()
    }

    pub const fn log(&self) -> &ChatLog {
        &self.log
    }

    pub const fn collaborator(&self) -> &C {
        &self.collaborator
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub const fn mode(&self) -> RequestMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RequestMode) {
        self.mode = mode;
    }
}
