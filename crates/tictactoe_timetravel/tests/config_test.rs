//! Tests for configuration loading and command-line overrides.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_timetravel::{AppConfig, Cli, SortOrder};

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
    assert_eq!(config.log_filter(), "info");
    assert_eq!(*config.tick_rate_ms(), 100);
    assert_eq!(*config.sort_order(), SortOrder::Ascending);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("tictactoe.toml");
    std::fs::write(&path, "tick_rate_ms = 50\nsort_order = \"descending\"\n").expect("write config");

    let config = AppConfig::from_file(&path).expect("valid config");
    assert_eq!(*config.tick_rate_ms(), 50);
    assert_eq!(*config.sort_order(), SortOrder::Descending);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_empty_file_is_default() {
    let config = AppConfig::from_toml("").expect("empty config");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_toml_is_rejected() {
    let err = AppConfig::from_toml("sort_order = \"sideways\"").unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_zero_tick_rate_is_rejected() {
    let err = AppConfig::from_toml("tick_rate_ms = 0").unwrap_err();
    assert!(err.message.contains("tick_rate_ms"));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_cli_overrides_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("tictactoe.toml");
    std::fs::write(&path, "log_file = \"from_file.log\"\n").expect("write config");

    let cli = Cli::parse_from([
        "tictactoe",
        "--config",
        path.to_str().expect("utf-8 path"),
        "--log-file",
        "override.log",
        "--descending",
    ]);
    let config = cli.resolve_config().expect("resolved config");
    assert_eq!(config.log_file(), &PathBuf::from("override.log"));
    assert_eq!(*config.sort_order(), SortOrder::Descending);
}

#[test]
fn test_cli_without_config_uses_defaults() {
    let cli = Cli::parse_from(["tictactoe"]);
    assert_eq!(cli.resolve_config().expect("defaults"), AppConfig::default());
}
