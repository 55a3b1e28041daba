//! Colour palette for botline's terminal output.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::widget::Sender;

/// Named colours for the pieces of botline's output.
pub struct Style;

impl Style {
    /// Titles such as "Current defaults" or "Available commands".
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.bold())
    }

    /// Chat log label; user and bot entries get distinct colours.
    pub fn sender(sender: Sender) -> String {
        let label = format!("{sender}:");
        match sender {
            Sender::User => format!("{}", label.cyan().bold()),
            Sender::Bot => format!("{}", label.magenta().bold()),
        }
    }

    /// Setting names in `/config` and `configure --show`.
    pub fn label<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Setting values: endpoint, language, mode.
    pub fn value<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    /// Paths, URLs, language names and the version in the banner.
    pub fn secondary<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    pub fn success<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    pub fn error<T: Display>(text: T) -> String {
        format!("{}", text.red().bold())
    }

    /// Slash commands in `/help`.
    pub fn command<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    /// Codes in `botline languages`.
    pub fn code<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }
}
