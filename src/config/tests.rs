// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::error::Result;
use crate::logging::LogLevel;
use std::path::{Path, PathBuf};

fn parse(content: &str) -> Result<Config> {
    Config::builder().add_toml_str(content).build()
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.global.log_level, LogLevel::WARN);
    assert!(config.global.log_file.is_none());
    assert_eq!(config.load.files, vec![PathBuf::from(".env")]);
    assert!(!config.load.override_existing);
}

#[test]
fn test_parse_load_section() {
    let config = parse(
        r#"
[load]
files = [".env", ".env.local"]
override = true
"#,
    )
    .unwrap();

    assert!(config.load.override_existing);
    assert_eq!(
        config.dotenv_files(Path::new("/srv/app")),
        vec![
            PathBuf::from("/srv/app/.env"),
            PathBuf::from("/srv/app/.env.local"),
        ]
    );
}

#[test]
fn test_parse_global_section() {
    let config = parse(
        r#"
[global]
log_level = 4
log_file = "logs/dotload.log"
"#,
    )
    .unwrap();

    assert_eq!(config.global.log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file,
        Some(PathBuf::from("logs/dotload.log"))
    );
}

#[test]
fn test_parse_rejects_unknown_fields() {
    assert!(parse("[load]\nrecursive = true").is_err());
}

#[test]
fn test_parse_rejects_out_of_range_log_level() {
    assert!(parse("[global]\nlog_level = 9").is_err());
}

#[test]
fn test_config_serializes_override_key() {
    let config = Config::default();
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(value["load"]["override"], serde_json::json!(false));
}

// --- ConfigLoader Tests ---

#[test]
fn test_config_loader_add_toml_file_success() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(
        file,
        r#"
[load]
files = ["prod.env"]
"#
    )
    .expect("failed to write temp file");

    let loader = ConfigLoader::new().add_toml_file(file.path());
    assert_eq!(loader.loaded_files(), [file.path().to_path_buf()]);

    let config = loader.build().expect("build should succeed");
    assert_eq!(config.load.files, vec![PathBuf::from("prod.env")]);
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let loader = ConfigLoader::new().add_toml_file("/nonexistent/path/to/dotload.toml");
    assert!(loader.build().is_err());
}

#[test]
fn test_config_loader_optional_file_missing() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/dotload.toml");

    assert!(loader.loaded_files().is_empty());
    let config = loader.build().expect("build should succeed");
    assert_eq!(config.load.files, vec![PathBuf::from(".env")]);
}

#[test]
fn test_config_loader_layered_sources() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(
        file,
        r#"
[load]
files = ["base.env"]
override = false
"#
    )
    .expect("failed to write");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .add_toml_str("[load]\noverride = true")
        .build()
        .expect("build should succeed");

    assert_eq!(config.load.files, vec![PathBuf::from("base.env")]);
    assert!(config.load.override_existing);
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: no other test reads or writes this variable.
    unsafe {
        std::env::set_var("DOTLOADTEST_LOAD__OVERRIDE", "true");
    }

    let config = ConfigLoader::new()
        .add_toml_str("[load]\noverride = false")
        .with_env_prefix("DOTLOADTEST")
        .build()
        .expect("build should succeed");

    assert!(config.load.override_existing, "env var should override TOML value");

    // SAFETY: Same as above
    unsafe {
        std::env::remove_var("DOTLOADTEST_LOAD__OVERRIDE");
    }
}
