use crate::{Config, DEFAULT_BASE_URL};

use tempfile::TempDir;

#[test]
fn test_defaults_when_no_config_file() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(dir.path()).unwrap();

    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert!(config.logging.file.is_none());
    config.validate().unwrap();
}

#[test]
fn test_load_from_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("nested").join(".td");

    Config::load_from(&nested).unwrap();
    assert!(nested.exists());
}

#[test]
fn test_load_toml_values() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
[api]
base_url = "https://tasks.example.com/api"

[logging]
level = "debug"
file = "td.log"
"#,
    )
    .unwrap();

    let config = Config::load_from(dir.path()).unwrap();
    assert_eq!(config.api.base_url, "https://tasks.example.com/api");
    assert_eq!(*config.logging.level, log::LevelFilter::Debug);
    assert_eq!(config.logging.file.as_deref(), Some("td.log"));
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
[logging]
level = "warn"
"#,
    )
    .unwrap();

    let config = Config::load_from(dir.path()).unwrap();
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(*config.logging.level, log::LevelFilter::Warn);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "api = not toml").unwrap();

    assert!(Config::load_from(dir.path()).is_err());
}
