use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::io::Stdout;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::client::{HttpCollaborator, RequestMode};
use crate::config::ResolvedConfig;
use crate::language::validate_language;
use crate::ui::is_prompt_cancelled;
use crate::widget::{ChatView, ChatWidget, Key, Modifiers, TerminalView, UiEvent};

/// An interactive chat session in the terminal.
///
/// The prompt line acts as the input field; pressing Enter delivers an
/// Enter key-down to the widget, which submits the message.
pub struct ChatSession {
    url: String,
    widget: ChatWidget<TerminalView<Stdout>, HttpCollaborator>,
}

impl ChatSession {
    pub fn new(config: &ResolvedConfig) -> Self {
        let collaborator = HttpCollaborator::new(&config.endpoint);
        let url = collaborator.url().to_string();
        let view = TerminalView::stdout(config.language.clone());
        Self {
            url,
            widget: ChatWidget::new(view, collaborator),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.widget.initialize()?;
        ui::print_header(&self.url);

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type a message, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => {
                    if let Input::Command(cmd) = parse_input(&line) {
                        if !self.handle_command(cmd) {
                            break;
                        }
                        continue;
                    }
                    ui::erase_prompt_line();
                    self.submit(line).await;
                }
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn submit(&mut self, line: String) {
        self.widget.view_mut().set_input(line);
        let outcome = self
            .widget
            .handle_event(UiEvent::KeyDown {
                key: Key::Enter,
                modifiers: Modifiers::NONE,
            })
            .await;
        tracing::debug!(?outcome, "turn finished");
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(
                    &self.url,
                    &self.widget.view().selected_language(),
                    self.widget.mode(),
                );
            }
            SlashCommand::Help => ui::print_help(),
            SlashCommand::History => {
                if self.widget.log().is_empty() {
                    ui::print_notice("No messages yet");
                } else {
                    self.widget.redraw_log();
                }
            }
            SlashCommand::Lang(value) => self.set_language(value.as_deref()),
            SlashCommand::Mode(value) => self.set_mode(value.as_deref()),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        true
    }

    fn set_language(&mut self, value: Option<&str>) {
        let Some(lang) = value else {
            ui::print_error("Usage: /lang <code>");
            return;
        };

        if let Err(e) = validate_language(lang) {
            ui::print_error(&e.to_string());
            return;
        }

        self.widget.view_mut().select_language(lang);
        ui::print_notice(&format!("Language set to {lang}"));
    }

    fn set_mode(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            ui::print_error("Usage: /mode text|image");
            return;
        };

        match value.parse::<RequestMode>() {
            Ok(mode) => {
                self.widget.set_mode(mode);
                ui::print_notice(&format!("Mode set to {}", mode.as_str()));
            }
            Err(e) => ui::print_error(&e),
        }
    }
}
