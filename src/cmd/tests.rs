// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::dotenv_files;
use super::run::{prepare_env, resolve_program};
use super::show::{collect_changes, format_assignment, render_raw, render_vars};
use crate::cli::show::ShowFormat;
use crate::config::Config;
use crate::core::env::container::Env;
use crate::dotenv::{Diagnostic, LoadOptions, parse_with};

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("failed to write test file");
    path
}

#[test]
fn test_dotenv_files_prefers_explicit() {
    let config = Config::default();
    let explicit = vec![PathBuf::from("a.env")];

    assert_eq!(
        dotenv_files(&explicit, &config, Path::new("/srv")),
        explicit
    );
    assert_eq!(
        dotenv_files(&[], &config, Path::new("/srv")),
        vec![PathBuf::from("/srv/.env")]
    );
}

#[test]
fn test_collect_changes_reports_only_new_or_changed() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, ".env", "KEEP=same\nNEW=1\nCHANGED=after\n");

    let mut base = Env::new();
    base.set("KEEP", "same").set("CHANGED", "before");

    let options = LoadOptions::builder().with_override(true).build();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let changes = collect_changes(&base, &[file], &options, &mut diagnostics).unwrap();

    insta::assert_debug_snapshot!(changes, @r#"
    {
        "CHANGED": "after",
        "NEW": "1",
    }
    "#);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_collect_changes_without_override_keeps_base() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, ".env", "CHANGED=after\n");

    let mut base = Env::new();
    base.set("CHANGED", "before");

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let changes =
        collect_changes(&base, &[file], &LoadOptions::default(), &mut diagnostics).unwrap();

    assert!(changes.is_empty());
}

#[test]
fn test_render_vars_dotenv() {
    let vars = BTreeMap::from([
        ("A".to_string(), "1".to_string()),
        ("B".to_string(), "two words".to_string()),
    ]);

    assert_eq!(
        render_vars(&vars, ShowFormat::Dotenv).unwrap(),
        "A='1'\nB='two words'\n"
    );
}

#[test]
fn test_render_vars_json() {
    let vars = BTreeMap::from([("A".to_string(), "1".to_string())]);
    let rendered = render_vars(&vars, ShowFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value, serde_json::json!({ "A": "1" }));
}

#[test]
fn test_format_assignment_reads_back_literally() {
    let line = format_assignment("GREETING", "it's $HOME");
    let parsed = parse_with(&line, &Env::new(), &mut Vec::<Diagnostic>::new());

    assert_eq!(parsed.get("GREETING"), Some("it's $HOME"));
}

#[test]
fn test_prepare_env_loads_in_order() {
    let dir = TempDir::new().unwrap();
    let base_file = write_file(&dir, "base.env", "A=base\nB=base\n");
    let local_file = write_file(&dir, "local.env", "B=local\nC=local\n");

    let (env, report) = prepare_env(
        Env::new(),
        &[base_file, local_file],
        &LoadOptions::default(),
    )
    .unwrap();

    assert_eq!(env.get("A"), Some("base"));
    assert_eq!(env.get("B"), Some("base"));
    assert_eq!(env.get("C"), Some("local"));
    assert_eq!(report.files_read, 2);
    assert_eq!(report.loaded, 3);
    assert_eq!(report.skipped_existing, 1);
}

#[test]
fn test_prepare_env_counts_missing_files() {
    let dir = TempDir::new().unwrap();
    let (env, report) = prepare_env(
        Env::new(),
        &[dir.path().join("absent.env")],
        &LoadOptions::default(),
    )
    .unwrap();

    assert!(env.is_empty());
    assert_eq!(report.missing, 1);
}

#[test]
fn test_resolve_program_not_found() {
    let dir = TempDir::new().unwrap();
    let mut env = Env::new();
    env.set("PATH", dir.path().display().to_string());

    let err = resolve_program("dotload-test-no-such-program", &env, dir.path()).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"executable not found: 'dotload-test-no-such-program' (not in PATH)"
    );
}

#[test]
fn test_render_raw_lists_includes_and_skips_missing() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, ".env", "B=2\nsource_env shared.env\nA=$B\n");
    let absent = dir.path().join("absent.env");

    let rendered = render_raw(&[file.clone(), absent], false, ShowFormat::Dotenv).unwrap();

    assert_eq!(
        rendered,
        format!("# {}\nA='2'\nB='2'\nsource_env shared.env\n", file.display())
    );
}
