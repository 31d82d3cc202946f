use repo_viewer::config::{Config, ConfigError, ConfigStore};
use repo_viewer::model::Period;
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.github.api_base_url, "https://api.github.com");
    assert!(config.github.token.is_none());
    assert_eq!(config.github.per_page, 30);
    assert_eq!(config.github.timeout_seconds, 15);
    assert!(config.github.user_agent.starts_with("repo-viewer/"));
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.default_period, Period::Day);
    assert!(!config.ui.uppercase_strings);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("repo-viewer/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let (_dir, path) = write_config(
        r#"
[github]
token = "ghp_example"
per_page = 50

[ui]
default_period = "month"
"#,
    );

    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.github.token.as_deref(), Some("ghp_example"));
    assert_eq!(config.github.per_page, 50);
    assert_eq!(config.github.api_base_url, "https://api.github.com");
    assert_eq!(config.ui.default_period, Period::Month);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[github\nper_page = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_unknown_period_is_a_parse_error() {
    let (_dir, path) = write_config("[ui]\ndefault_period = \"week\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_validation_rejects_bad_values() {
    let cases = [
        ("[github]\napi_base_url = \"ftp://example.com\"\n", "api_base_url"),
        ("[github]\nper_page = 0\n", "per_page"),
        ("[github]\nper_page = 101\n", "per_page"),
        ("[github]\ntimeout_seconds = 0\n", "timeout_seconds"),
        ("[ui]\ntick_rate_ms = 0\n", "tick_rate_ms"),
    ];

    for (content, field) in cases {
        let (_dir, path) = write_config(content);
        match Config::load_from(&path) {
            Err(ConfigError::ValidationError { message }) => {
                assert!(message.contains(field), "{message} should mention {field}");
            }
            other => panic!("expected validation error for {field}, got {other:?}"),
        }
    }
}

#[test]
fn test_store_reload_replaces_config() {
    let (_dir, path) = write_config("[github]\nper_page = 10\n");
    let store = ConfigStore::new(Config::load_from(&path).expect("valid"), path.clone());
    assert_eq!(store.get().github.per_page, 10);
    assert_eq!(store.path(), path.as_path());

    fs::write(&path, "[github]\nper_page = 20\n").expect("rewrite");
    store.reload().expect("reload");
    assert_eq!(store.get().github.per_page, 20);
}

#[test]
fn test_store_reload_failure_keeps_old_config() {
    let (_dir, path) = write_config("[github]\nper_page = 10\n");
    let store = ConfigStore::new(Config::load_from(&path).expect("valid"), path.clone());

    fs::write(&path, "[github]\nper_page = 500\n").expect("rewrite");
    assert!(store.reload().is_err());
    assert_eq!(store.get().github.per_page, 10);
}
