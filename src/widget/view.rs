//! The surfaces the widget writes to: input field, language selector, log
//! container and send control.

use std::io::{self, IsTerminal, Write};

use super::message::Message;
use super::render;
use crate::ui::{Spinner, Style};

/// Handles to the view elements a [`ChatWidget`](super::ChatWidget) drives.
pub trait ChatView {
    /// Current contents of the input field.
    fn input_value(&self) -> String;

    /// Empties the input field.
    fn clear_input(&mut self);

    /// Default key behaviour for Shift+Enter: a newline in the input field.
    fn insert_newline(&mut self);

    /// Value of the language selection control.
    fn selected_language(&self) -> String;

    /// Adds a rendered entry to the log container.
    fn append(&mut self, message: &Message);

    /// Makes the newest entry fully visible.
    fn scroll_to_bottom(&mut self);

    /// Enables or disables the send control.
    fn set_send_enabled(&mut self, enabled: bool);
}

/// A [`ChatView`] printing the log to a terminal (or any writer).
///
/// The input field is a buffer filled from the prompt line; the log
/// container is the writer itself.
pub struct TerminalView<W: Write> {
    out: W,
    input: String,
    language: String,
    send_enabled: bool,
    show_spinner: bool,
    spinner: Option<Spinner>,
    styled: bool,
}

impl TerminalView<io::Stdout> {
    /// A view on stdout. On a terminal it is styled (unless `NO_COLOR` is
    /// set) and shows a spinner while a reply is outstanding.
    pub fn stdout(language: impl Into<String>) -> Self {
        let interactive = io::stdout().is_terminal();
        let mut view = Self::new(io::stdout(), language);
        view.show_spinner = interactive;
        view.styled = interactive && std::env::var_os("NO_COLOR").is_none();
        view
    }
}

impl<W: Write> TerminalView<W> {
    /// A view on an arbitrary writer, without spinner or ANSI styling.
    pub fn new(out: W, language: impl Into<String>) -> Self {
        Self {
            out,
            input: String::new(),
            language: language.into(),
            send_enabled: true,
            show_spinner: false,
            spinner: None,
            styled: false,
        }
    }

    /// Replaces the input field contents, as typing would.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Changes the language selection.
    pub fn select_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub const fn is_send_enabled(&self) -> bool {
        self.send_enabled
    }

    pub const fn writer(&self) -> &W {
        &self.out
    }

    /// Writes a message the same way [`ChatView::append`] does.
    pub fn print_message(&mut self, message: &Message) -> io::Result<()> {
        let spans = render::render(message);
        let (label, body) = if self.styled {
            (
                Style::sender(message.sender()),
                render::to_ansi(&spans),
            )
        } else {
            (format!("{}:", message.sender()), render::to_plain(&spans))
        };
        writeln!(self.out, "{label} {body}")
    }
}

impl<W: Write> ChatView for TerminalView<W> {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn insert_newline(&mut self) {
        self.input.push('\n');
    }

    fn selected_language(&self) -> String {
        self.language.clone()
    }

    fn append(&mut self, message: &Message) {
        // The spinner line must be gone before the entry lands.
        self.spinner = None;
        if let Err(e) = self.print_message(message) {
            tracing::warn!(error = %e, "failed to write chat entry");
        }
    }

    fn scroll_to_bottom(&mut self) {
        if let Err(e) = self.out.flush() {
            tracing::warn!(error = %e, "failed to flush chat log");
        }
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        self.send_enabled = enabled;
        self.spinner =
            (!enabled && self.show_spinner).then(|| Spinner::start("Waiting for reply..."));
    }
}
