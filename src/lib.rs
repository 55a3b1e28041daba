//! # botline - Terminal Chat Client
//!
//! `botline` talks to a chatbot server exposing a single `POST /get-response/`
//! endpoint. Each message is sent with the selected reply language; the
//! server's reply is rendered into a scrolling chat log.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive session against a local server
//! botline --endpoint http://localhost:8000
//!
//! # One message, reply in Hindi
//! botline send --language hi "What is the groundwater level in Pune?"
//!
//! # From stdin
//! echo "rainfall in Chennai" | botline send
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/botline/config.toml`:
//!
//! ```toml
//! [botline]
//! endpoint = "http://localhost:8000"
//! language = "en"
//! ```

/// Interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Client for the collaborator endpoint.
pub mod client;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Reading one-shot messages from arguments, files and stdin.
pub mod input;

/// Supported reply languages.
pub mod language;

/// Diagnostic logging setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;

/// The chat widget controller, its log, views and renderers.
pub mod widget;
