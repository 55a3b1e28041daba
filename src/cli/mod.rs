//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

use crate::config::ConfigError;
use crate::input::InputError;

/// Maps an error to the process exit code (sysexits conventions).
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    if err.downcast_ref::<InputError>().is_some() {
        exitcode::USAGE
    } else if err.downcast_ref::<ConfigError>().is_some() {
        exitcode::CONFIG
    } else {
        exitcode::SOFTWARE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_for_input_error() {
        let err = anyhow::Error::new(InputError::Empty);
        assert_eq!(exit_code(&err), exitcode::USAGE);
    }

    #[test]
    fn test_exit_code_for_config_error() {
        let err = anyhow::Error::new(ConfigError::InvalidLanguage("bad".to_string()));
        assert_eq!(exit_code(&err), exitcode::CONFIG);
    }

    #[test]
    fn test_exit_code_for_context_wrapped_error() {
        let err = anyhow::Error::new(InputError::Empty).context("while reading message");
        assert_eq!(exit_code(&err), exitcode::USAGE);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let err = anyhow::anyhow!("terminal went away");
        assert_eq!(exit_code(&err), exitcode::SOFTWARE);
    }
}
