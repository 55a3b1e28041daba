//! Chat mode UI components.

use std::io::{self, IsTerminal, Write};

use crate::client::RequestMode;
use crate::language::language_name;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(url: &str) {
    println!(
        "{} {} - {}",
        Style::header("botline"),
        Style::secondary(format!("v{VERSION}")),
        Style::secondary(url)
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(url: &str, language: &str, mode: RequestMode) {
    println!("{}", Style::header("Configuration"));
    println!("  {}  {}", Style::label("endpoint"), Style::secondary(url));
    println!(
        "  {}  {} {}",
        Style::label("language"),
        Style::value(language),
        Style::secondary(language_name(language).unwrap_or_default())
    );
    println!("  {}      {}", Style::label("mode"), Style::value(mode.as_str()));
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let rows = [
        ("/config", "Show current configuration"),
        ("/help", "Show this help"),
        ("/history", "Print the conversation so far"),
        ("/lang <code>", "Change the reply language"),
        ("/mode text|image", "Switch between text and image replies"),
        ("/quit", "Exit chat mode"),
    ];
    for (command, description) in rows {
        println!(
            "  {}  {}",
            Style::command(format!("{command:<17}")),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_notice(message: &str) {
    println!("{} {message}", Style::success("✓"));
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

/// Removes the echoed prompt line; the chat log prints the message itself.
pub fn erase_prompt_line() {
    let mut stdout = io::stdout();
    if stdout.is_terminal() {
        let _ = write!(stdout, "\x1b[1A\x1b[2K");
        let _ = stdout.flush();
    }
}
