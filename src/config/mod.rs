//! Configuration file management.

mod manager;

pub use manager::{
    BotlineConfig, ConfigError, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, ResolveOptions,
    ResolvedConfig, resolve_config, validate_endpoint,
};
