//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations so the
//! config file lives in the same place on Linux and macOS.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "botline";

/// Returns the configuration directory for botline.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/botline` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/botline` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME").filter(|xdg| !xdg.is_empty()) {
        Some(xdg) => Ok(PathBuf::from(xdg).join(APP_DIR)),
        None => Ok(dirs::home_dir()
            .context("Failed to determine home directory")?
            .join(".config")
            .join(APP_DIR)),
    }
}
