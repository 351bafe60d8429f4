// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `run` command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `run` command.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Dotenv file to load. Can be specified multiple times; files load in
    /// order (default: files from the config, usually `.env`).
    #[arg(short = 'f', long = "file", value_name = "FILE", action = clap::ArgAction::Append)]
    pub files: Vec<PathBuf>,

    /// Replace variables already present in the environment.
    #[arg(short = 'o', long = "override")]
    pub override_existing: bool,

    /// Start from an empty environment instead of the current one.
    #[arg(long)]
    pub clear: bool,

    /// Command to run, followed by its arguments.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}
