#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use botline::config::{
    BotlineConfig, ConfigError, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, ResolveOptions,
    resolve_config,
};
use tempfile::TempDir;

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        botline: BotlineConfig {
            endpoint: Some("http://config.local:8000".to_string()),
            language: Some("hi".to_string()),
        },
    }
}

#[test]
fn test_cli_endpoint_overrides_config_endpoint() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        endpoint: Some("http://cli.local:9000".to_string()),
        language: None,
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.endpoint, "http://cli.local:9000");
    assert_eq!(resolved.language, "hi");
}

#[test]
fn test_cli_language_overrides_config_language() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        endpoint: None,
        language: Some("ta".to_string()),
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.endpoint, "http://config.local:8000");
    assert_eq!(resolved.language, "ta");
}

#[test]
fn test_config_values_used_when_cli_silent() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.endpoint, "http://config.local:8000");
    assert_eq!(resolved.language, "hi");
    assert_eq!(
        resolved.response_url(),
        "http://config.local:8000/get-response/"
    );
}

#[test]
fn test_builtin_defaults_when_nothing_set() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(resolved.language, "en");
}

#[test]
fn test_invalid_cli_language_is_rejected_even_with_valid_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        endpoint: None,
        language: Some("klingon".to_string()),
    };

    let err = resolve_config(&options, &config).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidLanguage(_))
    ));
}

#[test]
fn test_invalid_config_endpoint_is_rejected() {
    let config = ConfigFile {
        botline: BotlineConfig {
            endpoint: Some("not a url".to_string()),
            language: None,
        },
    };

    let err = resolve_config(&ResolveOptions::default(), &config).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidEndpoint { .. })
    ));
}

#[test]
fn test_cli_endpoint_masks_bad_config_endpoint() {
    let config = ConfigFile {
        botline: BotlineConfig {
            endpoint: Some("not a url".to_string()),
            language: None,
        },
    };
    let options = ResolveOptions {
        endpoint: Some("https://bot.example.com/".to_string()),
        language: None,
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(
        resolved.response_url(),
        "https://bot.example.com/get-response/"
    );
}

#[test]
fn test_saved_config_feeds_resolution() {
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(temp_dir.path().join("config.toml"));
    manager.save(&make_config_with_defaults()).unwrap();

    let loaded = manager.load_or_default().unwrap();
    let resolved = resolve_config(&ResolveOptions::default(), &loaded).unwrap();

    assert_eq!(resolved.endpoint, "http://config.local:8000");
    assert_eq!(resolved.language, "hi");
}

#[test]
fn test_partial_config_falls_back_per_field() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[botline]\nlanguage = \"bn\"\n").unwrap();

    let loaded = ConfigManager::with_path(&path).load_or_default().unwrap();
    let resolved = resolve_config(&ResolveOptions::default(), &loaded).unwrap();

    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(resolved.language, "bn");
}
