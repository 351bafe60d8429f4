// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use dotload::cli::show::ShowFormat;
use dotload::cli::{Cli, Command};
use std::path::PathBuf;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["dotload", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
    assert!(cli.global.configs.is_empty());
    assert!(cli.global.log_level.is_none());
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["dotload"]).unwrap();
    assert!(cli.command.is_none());
}

// =============================================================================
// Show / Check Commands
// =============================================================================

#[test]
fn cli_show_defaults() {
    let cli = Cli::try_parse_from(["dotload", "show"]).unwrap();
    let Some(Command::Show(args)) = cli.command else {
        panic!("expected show command");
    };

    assert!(args.files.is_empty());
    assert_eq!(args.format, ShowFormat::Dotenv);
    assert!(!args.raw);
    assert!(!args.inherit_env);
}

#[test]
fn cli_show_inherit_env_short() {
    let cli = Cli::try_parse_from(["dotload", "show", "-e", "--format", "json"]).unwrap();
    let Some(Command::Show(args)) = cli.command else {
        panic!("expected show command");
    };

    assert!(args.inherit_env);
    assert_eq!(args.format, ShowFormat::Json);
}

#[test]
fn cli_show_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["dotload", "show", "--format", "yaml"]).is_err());
}

#[test]
fn cli_check_files() {
    let cli = Cli::try_parse_from(["dotload", "check", ".env", "config/.env.local"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };

    assert_eq!(
        args.files,
        vec![PathBuf::from(".env"), PathBuf::from("config/.env.local")]
    );
}

// =============================================================================
// Run Command
// =============================================================================

#[test]
fn cli_run_passes_hyphenated_arguments_through() {
    let cli = Cli::try_parse_from(["dotload", "run", "--clear", "env", "-i", "--null"]).unwrap();
    let Some(Command::Run(args)) = cli.command else {
        panic!("expected run command");
    };

    assert!(args.clear);
    assert!(!args.override_existing);
    assert!(args.files.is_empty());
    assert_eq!(args.command, vec!["env", "-i", "--null"]);
}

#[test]
fn cli_run_short_flags() {
    let cli = Cli::try_parse_from(["dotload", "run", "-o", "-f", "a.env", "make", "test"]).unwrap();
    let Some(Command::Run(args)) = cli.command else {
        panic!("expected run command");
    };

    assert!(args.override_existing);
    assert_eq!(args.files, vec![PathBuf::from("a.env")]);
    assert_eq!(args.command, vec!["make", "test"]);
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_full() {
    let cli = Cli::try_parse_from([
        "dotload",
        "--no-default-config",
        "--log-file",
        "logs/dotload.log",
        "-c",
        "ci.toml",
        "show",
    ])
    .unwrap();

    assert!(cli.global.no_default_config);
    assert_eq!(cli.global.log_file, Some(PathBuf::from("logs/dotload.log")));
    assert_eq!(cli.global.configs, vec![PathBuf::from("ci.toml")]);
}

#[test]
fn cli_dir_after_subcommand() {
    let cli = Cli::try_parse_from(["dotload", "check", "--dir", "/srv/app"]).unwrap();
    assert_eq!(cli.global.dir, Some(PathBuf::from("/srv/app")));
}
