//! Chat messages and the plain/markup trust split.

use std::fmt;

/// Reply shown when the collaborator answered without usable content.
pub const EMPTY_REPLY_FALLBACK: &str = "Sorry, I couldn't process that.";

/// Reply shown when the request failed or the body could not be parsed.
pub const FAILURE_FALLBACK: &str = "Sorry, something went wrong.";

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Label printed in front of the message body.
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Bot => "Bot",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a message body is interpreted when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Literal text. Markup is shown verbatim.
    PlainText,
    /// Formatted content produced by the collaborator.
    Markup,
}

/// Markup that may be interpreted by the trusted render path.
///
/// There is no public constructor: values only come out of a collaborator
/// reply, so user input can never be rendered as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    pub(crate) const fn from_collaborator(markup: String) -> Self {
        Self(markup)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Body {
    Plain(String),
    Markup(TrustedMarkup),
}

/// A single entry of the chat log. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    sender: Sender,
    body: Body,
}

impl Message {
    /// A message typed by the user. Always plain text.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            body: Body::Plain(text.into()),
        }
    }

    /// A bot message rendered as literal text (fallbacks, notices).
    pub fn bot_plain(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            body: Body::Plain(text.into()),
        }
    }

    /// A bot reply whose content is interpreted as markup.
    pub const fn bot_markup(markup: TrustedMarkup) -> Self {
        Self {
            sender: Sender::Bot,
            body: Body::Markup(markup),
        }
    }

    pub const fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        match &self.body {
            Body::Plain(text) => text,
            Body::Markup(markup) => markup.as_str(),
        }
    }

    pub const fn render_mode(&self) -> RenderMode {
        match self.body {
            Body::Plain(_) => RenderMode::PlainText,
            Body::Markup(_) => RenderMode::Markup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_plain_even_with_tags() {
        let message = Message::user("<b>bold?</b>");
        assert_eq!(message.sender(), Sender::User);
        assert_eq!(message.render_mode(), RenderMode::PlainText);
        assert_eq!(message.text(), "<b>bold?</b>");
    }

    #[test]
    fn test_bot_markup_keeps_content() {
        let markup = TrustedMarkup::from_collaborator("<b>hi</b>".to_string());
        let message = Message::bot_markup(markup);
        assert_eq!(message.sender(), Sender::Bot);
        assert_eq!(message.render_mode(), RenderMode::Markup);
        assert_eq!(message.text(), "<b>hi</b>");
    }

    #[test]
    fn test_sender_labels() {
        assert_eq!(Sender::User.to_string(), "You");
        assert_eq!(Sender::Bot.to_string(), "Bot");
    }
}
