// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::path::{Path, PathBuf};

use dotload::config::Config;
use dotload::config::loader::ConfigLoader;
use dotload::error::Result;
use dotload::logging::LogLevel;

fn parse(content: &str) -> Result<Config> {
    Config::builder().add_toml_str(content).build()
}

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty() {
    let config = parse("").unwrap();

    assert_eq!(config.global.log_level, LogLevel::WARN);
    assert_eq!(config.load.files, vec![PathBuf::from(".env")]);
    assert!(!config.load.override_existing);
}

#[test]
fn config_parse_full() {
    let toml = r#"
[global]
log_level = 5
log_file = "dotload.log"

[load]
files = [".env", ".env.local", "secrets/.env"]
override = true
"#;
    let config = parse(toml).unwrap();

    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "global": { "log_level": 5, "log_file": "dotload.log" },
            "load": {
                "files": [".env", ".env.local", "secrets/.env"],
                "override": true,
            },
        })
    );
}

#[test]
fn config_default_serializes_without_log_file() {
    let value = serde_json::to_value(Config::default()).unwrap();
    assert!(value["global"].get("log_file").is_none());
}

#[test]
fn config_parse_invalid_toml() {
    let err = parse("[load\nfiles = 1").unwrap_err();
    assert!(err.to_string().starts_with("failed to parse config file"));
}

#[test]
fn config_parse_wrong_type() {
    assert!(parse("[load]\noverride = \"yes please\"").is_err());
}

#[test]
fn config_parse_unknown_section() {
    assert!(parse("[paths]\nprefix = \"/build\"").is_err());
}

// =============================================================================
// Files and layering
// =============================================================================

#[test]
fn config_dotenv_files_keep_absolute_paths() {
    let config = parse("[load]\nfiles = [\"/etc/app.env\", \"local.env\"]").unwrap();

    assert_eq!(
        config.dotenv_files(Path::new("/srv/app")),
        vec![
            PathBuf::from("/etc/app.env"),
            PathBuf::from("/srv/app/local.env"),
        ]
    );
}

#[test]
fn config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dotload.toml");
    std::fs::write(&path, "[global]\nlog_level = 3\n").unwrap();

    let config = Config::builder().add_toml_file(&path).build().unwrap();
    assert_eq!(config.global.log_level, LogLevel::INFO);
}

#[test]
fn config_later_files_win() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let ci = dir.path().join("ci.toml");
    std::fs::write(&base, "[load]\nfiles = [\"base.env\"]\noverride = false\n").unwrap();
    std::fs::write(&ci, "[load]\noverride = true\n").unwrap();

    let loader = ConfigLoader::new().add_toml_file(&base).add_toml_file(&ci);
    assert_eq!(loader.loaded_files(), [base.clone(), ci.clone()]);

    let config = loader.build().unwrap();
    assert_eq!(config.load.files, vec![PathBuf::from("base.env")]);
    assert!(config.load.override_existing);
}
