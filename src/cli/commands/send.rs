use anyhow::Result;

use super::ClientOptions;
use crate::client::{HttpCollaborator, RequestMode};
use crate::input::{InputReader, MessageSource};
use crate::widget::{ChatWidget, TerminalView, TurnOutcome, UiEvent};

pub struct SendOptions {
    pub message: Option<String>,
    pub file: Option<String>,
    pub image: bool,
}

impl SendOptions {
    fn source(&self) -> MessageSource<'_> {
        match (&self.message, &self.file) {
            (Some(message), _) => MessageSource::Arg(message),
            (None, Some(path)) => MessageSource::File(path),
            (None, None) => MessageSource::Stdin,
        }
    }
}

/// Sends one message through the widget and prints both log entries.
pub async fn run_send(client: &ClientOptions, options: &SendOptions) -> Result<TurnOutcome> {
    let config = client.resolve()?;
    let message = InputReader::read(options.source())?;

    let mut view = TerminalView::stdout(config.language.clone());
    view.set_input(message);

    let mut widget = ChatWidget::new(view, HttpCollaborator::new(&config.endpoint));
    if options.image {
        widget.set_mode(RequestMode::Image);
    }
    widget.initialize()?;

    Ok(widget.handle_event(UiEvent::SendClicked).await)
}

/// Exit code for a finished one-shot turn.
pub const fn outcome_exit_code(outcome: TurnOutcome) -> exitcode::ExitCode {
    match outcome {
        TurnOutcome::Failed => exitcode::UNAVAILABLE,
        _ => exitcode::OK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_prefers_message_argument() {
        let options = SendOptions {
            message: Some("hi".to_string()),
            file: None,
            image: false,
        };
        assert_eq!(options.source(), MessageSource::Arg("hi"));
    }

    #[test]
    fn test_source_falls_back_to_stdin() {
        let options = SendOptions {
            message: None,
            file: None,
            image: false,
        };
        assert_eq!(options.source(), MessageSource::Stdin);

        let options = SendOptions {
            message: None,
            file: Some("msg.txt".to_string()),
            image: false,
        };
        assert_eq!(options.source(), MessageSource::File("msg.txt"));
    }

    #[test]
    fn test_outcome_exit_code() {
        assert_eq!(outcome_exit_code(TurnOutcome::Answered), exitcode::OK);
        assert_eq!(outcome_exit_code(TurnOutcome::EmptyAnswer), exitcode::OK);
        assert_eq!(outcome_exit_code(TurnOutcome::Failed), exitcode::UNAVAILABLE);
    }
}
