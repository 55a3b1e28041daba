//! Subcommand implementations.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// One-shot send command handler.
pub mod send;

/// Global options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub endpoint: Option<String>,
    pub language: Option<String>,
    pub config: Option<PathBuf>,
}

impl ClientOptions {
    pub fn config_manager(&self) -> Result<ConfigManager> {
        match &self.config {
            Some(path) => Ok(ConfigManager::with_path(path)),
            None => ConfigManager::new(),
        }
    }

    /// Merges the CLI options with the config file and built-in defaults.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let config_file = self.config_manager()?.load_or_default()?;
        let options = ResolveOptions {
            endpoint: self.endpoint.clone(),
            language: self.language.clone(),
        };
        let resolved = resolve_config(&options, &config_file)?;
        tracing::debug!(endpoint = %resolved.endpoint, language = %resolved.language, "resolved configuration");
        Ok(resolved)
    }
}
