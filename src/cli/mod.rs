// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for dotload using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! dotload [global options] <command>
//! show [FILE..]
//! check [FILE..]
//! run [-f FILE].. [--override] -- COMMAND [ARGS..]
//! version
//! ```

pub mod global;
pub mod run;
pub mod show;


use crate::cli::global::GlobalOptions;
use crate::cli::run::RunArgs;
use crate::cli::show::{CheckArgs, ShowArgs};
use clap::{Parser, Subcommand};

/// Dotenv parser and loader.
#[derive(Debug, Parser)]
#[command(
    name = "dotload",
    author,
    version,
    about = "Load dotenv files into an environment",
    long_about = "dotload Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Parses dotenv files (KEY=value, quoting, $VAR substitution,\n\
                  source_env/source_up includes) and either prints the result\n\
                  or runs a command with it.",
    after_help = "DOTENV FILES:\n\n\
                  Without explicit files, dotload reads the files listed under\n\
                  [load] files in dotload.toml (default: .env), relative to --dir\n\
                  or the current directory. A directory argument loads the .env\n\
                  file inside it. Missing files are reported and skipped."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Prints the variables parsed from dotenv files.
    Show(ShowArgs),

    /// Reports malformed lines and missing files.
    Check(CheckArgs),

    /// Runs a command with dotenv files loaded into its environment.
    Run(RunArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
