use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "botline")]
#[command(about = "Terminal chat client for chatbot servers")]
#[command(version)]
pub struct Args {
    /// Chatbot server base URL (the part before /get-response/)
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Reply language code (e.g., en, hi, ta)
    #[arg(short = 'l', long, global = true)]
    pub language: Option<String>,

    /// Config file to use instead of ~/.config/botline/config.toml
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat session (default)
    Chat,
    /// Send one message and print the reply
    Send {
        /// Message to send (reads stdin if neither a message nor --file is given)
        message: Option<String>,

        /// Read the message from a file
        #[arg(short = 'f', long, conflicts_with = "message")]
        file: Option<String>,

        /// Ask for an image instead of a text reply
        #[arg(long)]
        image: bool,
    },
    /// List supported language codes
    Languages,
    /// Configure default endpoint and language
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
