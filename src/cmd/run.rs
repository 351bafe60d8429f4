// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `run` command implementation.
//!
//! ```text
//! current_env() | Env::new() (--clear)
//!        |
//!   load_file() for each dotenv file
//!        |
//!   which_in(program, PATH from the loaded Env)
//!        |
//!   tokio::process::Command  env_clear + envs(Env)
//!        |
//!   child exit code --> ExitCode
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{debug, info};

use crate::cli::run::RunArgs;
use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::dotenv::loader::{LoadOptions, load_file};
use crate::dotenv::{LoadReport, TracingSink};
use crate::error::{ProcessError, Result};

/// Builds the environment a `run` child process receives.
///
/// # Errors
///
/// Returns an error if an existing dotenv file cannot be read.
pub fn prepare_env(
    base: Env,
    files: &[PathBuf],
    options: &LoadOptions,
) -> Result<(Env, LoadReport)> {
    let mut env = base;
    let mut report = LoadReport::default();
    for file in files {
        report.merge(load_file(file, options, &mut env, &mut TracingSink)?);
    }
    Ok((env, report))
}

/// Resolves `program` against the `PATH` of `env`.
///
/// # Errors
///
/// Returns `ProcessError::ExecutableNotFound` if the program cannot be found.
pub fn resolve_program(program: &str, env: &Env, cwd: &Path) -> Result<PathBuf> {
    which::which_in(program, env.get("PATH"), cwd).map_err(|_| {
        ProcessError::ExecutableNotFound {
            name: program.to_string(),
        }
        .into()
    })
}

/// Main handler for the run command.
///
/// Returns the child's exit code.
///
/// # Errors
///
/// Returns an error if a dotenv file cannot be read, the program cannot be
/// found or spawned, or the child is terminated by a signal.
pub async fn run_run_command(
    args: &RunArgs,
    files: &[PathBuf],
    override_existing: bool,
    cwd: &Path,
) -> Result<ExitCode> {
    let Some((program, program_args)) = args.command.split_first() else {
        return Err(crate::error::bail_out("no command given").into());
    };

    let base = if args.clear { Env::new() } else { current_env() };
    let options = LoadOptions::builder()
        .with_override(args.override_existing || override_existing)
        .build();
    let (env, report) = prepare_env(base, files, &options)?;
    info!(
        files = report.files_read,
        loaded = report.loaded,
        skipped = report.skipped_existing,
        missing = report.missing,
        "environment prepared"
    );

    let path = resolve_program(program, &env, cwd)?;
    let command_line = args.command.join(" ");
    debug!(program = %path.display(), "spawning {command_line}");

    let status = tokio::process::Command::new(&path)
        .args(program_args)
        .current_dir(cwd)
        .env_clear()
        .envs(env.iter())
        .status()
        .await
        .map_err(|source| ProcessError::SpawnFailed {
            command: command_line.clone(),
            source,
        })?;

    let code = status.code().ok_or(ProcessError::Terminated {
        command: command_line,
    })?;
    debug!(code, "child exited");
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
