use super::data::Config;
use super::defaults::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use super::io::ConfigError;
use super::settings::SettingError;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, Config::default());
}

#[test]
fn test_config_persistence_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config
        .set_key("base-url", "https://coach.example.com")
        .expect("set base-url");
    config.set_key("timeout", "15").expect("set timeout");
    config
        .save_to_path(&config_path)
        .expect("Failed to save config");

    let loaded = Config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded.base_url.as_deref(), Some("https://coach.example.com"));
    assert_eq!(loaded.timeout(), Duration::from_secs(15));

    let mut loaded = loaded;
    loaded.unset_key("timeout").expect("unset timeout");
    loaded
        .save_to_path(&config_path)
        .expect("Failed to save config");
    let reloaded = Config::load_from_path(&config_path).expect("Failed to reload config");
    assert_eq!(reloaded.timeout_secs, None);
    assert_eq!(reloaded.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
}

#[test]
fn test_invalid_toml_reports_parse_error_with_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "base_url = [unterminated").expect("write bad config");

    let err = Config::load_from_path(&config_path).expect_err("bad TOML should fail");
    let config_err = err
        .downcast_ref::<ConfigError>()
        .expect("error should be a ConfigError");
    assert!(matches!(config_err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("Failed to parse config at "));
}

#[test]
fn test_base_url_precedence() {
    let config = Config {
        base_url: Some("http://from-file:1".to_string()),
        ..Default::default()
    };

    assert_eq!(
        config.resolve_base_url_with_env(Some("http://cli:1"), Some("http://env:1".into())),
        "http://cli:1"
    );
    assert_eq!(
        config.resolve_base_url_with_env(None, Some("http://env:1".into())),
        "http://env:1"
    );
    assert_eq!(
        config.resolve_base_url_with_env(None, None),
        "http://from-file:1"
    );
    assert_eq!(
        Config::default().resolve_base_url_with_env(None, None),
        DEFAULT_BASE_URL
    );
}

#[test]
fn test_endpoint_defaults_to_chat() {
    let config = Config::default();
    assert_eq!(config.endpoint_or_default(), "chat");

    let config = Config {
        endpoint: Some("/api/chat".to_string()),
        ..Default::default()
    };
    assert_eq!(
        config.chat_url(Some("http://localhost:8080/")),
        "http://localhost:8080/api/chat"
    );
}

#[test]
fn test_set_key_validation() {
    let mut config = Config::default();

    assert_eq!(
        config.set_key("colour", "blue"),
        Err(SettingError::UnknownKey("colour".to_string()))
    );
    assert_eq!(
        config.set_key("timeout", "soon"),
        Err(SettingError::InvalidTimeout("soon".to_string()))
    );
    assert_eq!(
        config.set_key("timeout", "0"),
        Err(SettingError::InvalidTimeout("0".to_string()))
    );
    assert_eq!(
        config.set_key("endpoint", "  "),
        Err(SettingError::MissingValue("endpoint"))
    );

    config.set_key("LOG_FILE", "talk.log").expect("keys are case-insensitive");
    assert_eq!(config.log_file.as_deref(), Some("talk.log"));
}

#[test]
fn test_describe_lists_every_key() {
    let config = Config {
        endpoint: Some("chat".to_string()),
        ..Default::default()
    };
    let text = config.describe();
    assert!(text.contains("base-url: (unset, using http://127.0.0.1:5000)"));
    assert!(text.contains("endpoint: chat"));
    assert!(text.contains("timeout: (unset, using 60s)"));
    assert!(text.contains("log-file: (unset)"));
}
