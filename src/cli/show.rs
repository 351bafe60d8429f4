// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the read-only commands.
//!
//! ```text
//! show  [FILE..] [--format dotenv|json] [--raw]
//!   → print resolved variables (includes followed unless --raw)
//! check [FILE..]
//!   → report malformed lines and missing files, fail if any
//! ```

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ShowFormat {
    /// `KEY='value'` lines.
    #[default]
    Dotenv,
    /// A JSON object.
    Json,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Dotenv files to read (default: files from the config, usually `.env`).
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = ShowFormat::Dotenv)]
    pub format: ShowFormat,

    /// Print each file's parse result without following includes.
    #[arg(long)]
    pub raw: bool,

    /// Resolve references against the current process environment as well.
    #[arg(short = 'e', long = "inherit-env")]
    pub inherit_env: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Dotenv files to check (default: files from the config, usually `.env`).
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
