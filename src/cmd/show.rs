// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `show` and `check` command implementations.
//!
//! ```text
//! show       base Env (empty | current) --load_file--> Env --diff--> stdout
//! show --raw file --parse_with--> ParsedEnv::to_mapping() --> stdout
//! check      file --load_file (Vec<Diagnostic>)--> stdout, fail if any
//! ```

use anyhow::anyhow;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::show::{ShowArgs, ShowFormat};
use crate::core::env::container::{Env, ProcessLookup};
use crate::core::env::current_env;
use crate::core::env::types::EnvLookup;
use crate::dotenv::loader::{LoadOptions, load_file, read_existing, resolve_path};
use crate::dotenv::{Diagnostic, DiagnosticSink, ParsedValue, TracingSink, parse_with};
use crate::error::Result;

/// Main handler for the show command.
///
/// # Errors
///
/// Returns an error if an existing file cannot be read.
pub fn run_show_command(args: &ShowArgs, files: &[PathBuf], override_existing: bool) -> Result<()> {
    let output = if args.raw {
        render_raw(files, args.inherit_env, args.format)?
    } else {
        let base = if args.inherit_env {
            current_env()
        } else {
            Env::new()
        };
        let options = LoadOptions::builder()
            .with_override(override_existing)
            .build();
        let changes = collect_changes(&base, files, &options, &mut TracingSink)?;
        render_vars(&changes, args.format)?
    };
    print!("{output}");
    Ok(())
}

/// Main handler for the check command.
///
/// # Errors
///
/// Returns an error if any file is missing, has malformed lines or NUL-byte
/// values, or if an existing file cannot be read.
pub fn run_check_command(files: &[PathBuf]) -> Result<()> {
    let mut diagnostics = Vec::new();
    let mut store = Env::new();
    let options = LoadOptions::default();
    let mut files_read = 0;

    for file in files {
        files_read += load_file(file, &options, &mut store, &mut diagnostics)?.files_read;
    }

    for diagnostic in &diagnostics {
        println!("{diagnostic}");
    }

    if diagnostics.is_empty() {
        println!("{files_read} file(s) OK, {} variable(s)", store.len());
        Ok(())
    } else {
        Err(anyhow!("{} problem(s) found", diagnostics.len()))
    }
}

/// Loads `files` on top of `base` and returns the variables that were added
/// or changed.
///
/// # Errors
///
/// Returns an error if an existing file cannot be read.
pub fn collect_changes(
    base: &Env,
    files: &[PathBuf],
    options: &LoadOptions,
    sink: &mut impl DiagnosticSink,
) -> Result<BTreeMap<String, String>> {
    let mut store = base.clone();
    for file in files {
        load_file(file, options, &mut store, sink)?;
    }
    Ok(store
        .iter()
        .filter(|(k, v)| base.get(k) != Some(*v))
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect())
}

/// Renders each file's own mapping without following includes. Missing files
/// are logged and left out.
///
/// # Errors
///
/// Returns an error if an existing file cannot be read.
pub fn render_raw(files: &[PathBuf], inherit_env: bool, format: ShowFormat) -> Result<String> {
    if inherit_env {
        render_raw_with(files, &ProcessLookup, format)
    } else {
        render_raw_with(files, &Env::new(), format)
    }
}

fn render_raw_with(files: &[PathBuf], env: &impl EnvLookup, format: ShowFormat) -> Result<String> {
    let mut out = String::new();
    let mut json = BTreeMap::new();

    for file in files {
        let path = resolve_path(file);
        let Some(content) = read_existing(&path)? else {
            TracingSink.report(Diagnostic::MissingFile { path });
            continue;
        };
        let mapping = parse_with(&content, env, &mut TracingSink).to_mapping();

        match format {
            ShowFormat::Dotenv => {
                out.push_str(&format!("# {}\n", path.display()));
                for (key, value) in &mapping {
                    match value {
                        ParsedValue::Value(v) => {
                            out.push_str(&format_assignment(key, v));
                            out.push('\n');
                        }
                        ParsedValue::Include(paths) => {
                            for p in paths {
                                out.push_str(&format!("{key} {p}\n"));
                            }
                        }
                    }
                }
            }
            ShowFormat::Json => {
                json.insert(path.display().to_string(), mapping);
            }
        }
    }

    if format == ShowFormat::Json {
        out = serde_json::to_string_pretty(&json)?;
        out.push('\n');
    }
    Ok(out)
}

/// Renders variables in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_vars(vars: &BTreeMap<String, String>, format: ShowFormat) -> Result<String> {
    match format {
        ShowFormat::Dotenv => Ok(vars
            .iter()
            .map(|(k, v)| format_assignment(k, v) + "\n")
            .collect()),
        ShowFormat::Json => {
            let mut out = serde_json::to_string_pretty(vars)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Formats `KEY='value'`, which reads back literally.
#[must_use]
pub fn format_assignment(key: &str, value: &str) -> String {
    format!("{key}='{value}'")
}
