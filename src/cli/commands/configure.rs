//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::{Select, Text};

use super::ClientOptions;
use crate::config::{BotlineConfig, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, validate_endpoint};
use crate::language::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
use crate::ui::{Style, unless_cancelled};

/// Runs the configure command to edit the default endpoint and language.
pub fn run_configure(options: &ClientOptions) -> Result<()> {
    let manager = options.config_manager()?;
    unless_cancelled(|| run_configure_inner(&manager))?;
    Ok(())
}

/// Prints the config file location, its contents and the effective values.
pub fn show_configure(options: &ClientOptions) -> Result<()> {
    let manager = options.config_manager()?;
    let config = manager.load_or_default()?;
    let resolved = options.resolve()?;

    println!(
        "{} {}",
        Style::label("Config file:"),
        Style::secondary(manager.config_path().display())
    );
    println!();
    print_current_defaults(&config);

    println!("{}", Style::header("Effective settings"));
    println!("  {}  {}", Style::label("endpoint"), Style::value(&resolved.endpoint));
    println!("  {}  {}", Style::label("language"), Style::value(&resolved.language));
    println!("  {}       {}", Style::label("url"), Style::secondary(resolved.response_url()));
    Ok(())
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config);

    let endpoint = prompt_endpoint(config.botline.endpoint.as_deref())?;
    let language = select_language(config.botline.language.as_deref())?;

    config.botline = BotlineConfig {
        endpoint: Some(endpoint),
        language: Some(language),
    };
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        config
            .botline
            .endpoint
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("language"),
        config
            .botline
            .language
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!();
}

fn prompt_endpoint(default: Option<&str>) -> Result<String> {
    let endpoint = Text::new("Chatbot server URL:")
        .with_default(default.unwrap_or(DEFAULT_ENDPOINT))
        .with_help_message("Base URL; requests go to <url>/get-response/")
        .with_validator(|input: &str| {
            Ok(match validate_endpoint(input.trim()) {
                Ok(()) => inquire::validator::Validation::Valid,
                Err(e) => inquire::validator::Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()?;

    Ok(endpoint.trim().to_string())
}

fn select_language(default: Option<&str>) -> Result<String> {
    // Build options with format "code - Name"
    let options: Vec<String> = SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name)| format!("{code} - {name}"))
        .collect();

    let default_code = default.unwrap_or(DEFAULT_LANGUAGE);
    let default_index = SUPPORTED_LANGUAGES
        .iter()
        .position(|(code, _)| *code == default_code)
        .unwrap_or(0);

    let selection = Select::new("Default language:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    let code = selection.split(" - ").next().unwrap_or(&selection);
    Ok(code.to_string())
}
