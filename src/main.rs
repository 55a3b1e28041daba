use anyhow::Result;
use clap::Parser;

use botline::cli::commands::send::{SendOptions, outcome_exit_code};
use botline::cli::commands::{ClientOptions, chat, configure, send};
use botline::cli::{Args, Command, exit_code};
use botline::language::print_languages;
use botline::logging;
use botline::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", Style::error("Error:"));
            exit_code(&e)
        }
    };

    std::process::exit(code);
}

async fn run(args: Args) -> Result<exitcode::ExitCode> {
    let client = ClientOptions {
        endpoint: args.endpoint,
        language: args.language,
        config: args.config,
    };

    match args.command {
        None | Some(Command::Chat) => {
            chat::run_chat(&client).await?;
        }
        Some(Command::Send {
            message,
            file,
            image,
        }) => {
            let options = SendOptions {
                message,
                file,
                image,
            };
            let outcome = send::run_send(&client, &options).await?;
            return Ok(outcome_exit_code(outcome));
        }
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            if show {
                configure::show_configure(&client)?;
            } else {
                configure::run_configure(&client)?;
            }
        }
    }

    Ok(exitcode::OK)
}
