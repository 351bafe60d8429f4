// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loading dotenv files into an environment store.
//!
//! # Loader Pipeline
//!
//! ```text
//! load_file(path, options, store, sink)
//!   resolve_path()   dir containing .env --> dir/.env
//!        |
//!   exists? --no--> Diagnostic::MissingFile, Ok
//!        |
//!   read + decode_text()
//!        |
//!   parse_with(text, store, sink)
//!        |
//!   vars --> store   (override: always | default: only if absent)
//!                    NUL in value --> Diagnostic::InvalidValue, skipped
//!        |
//!   includes --> load_file(include, options, ...)   (no depth limit)
//! ```
//!
//! Include paths are used as written: relative paths resolve against the
//! working directory, not the including file. A cyclic include chain recurses
//! until the stack runs out.

use anyhow::Context;
use bon::Builder;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::parser::parse_with;
use super::types::{Diagnostic, DiagnosticSink, TracingSink};
use crate::core::env::container::ProcessEnv;
use crate::core::env::types::EnvStore;
use crate::error::{FsError, Result};
use crate::utility::encoding::{decode_text, sniff_encoding};

/// File name looked for when a directory is given.
pub const DOTENV_FILE_NAME: &str = ".env";

/// Options for [`load_file`].
#[derive(Debug, Clone, Copy, Default, Builder)]
pub struct LoadOptions {
    /// Replace variables that are already set.
    #[builder(setters(name = with_override), default = false)]
    override_existing: bool,
}

impl LoadOptions {
    /// Check if file values replace existing variables.
    #[must_use]
    pub const fn override_existing(&self) -> bool {
        self.override_existing
    }
}

/// Summary of a load, accumulated across includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Files read and parsed.
    pub files_read: usize,
    /// Variables written to the store.
    pub loaded: usize,
    /// Variables left alone because they were already set.
    pub skipped_existing: usize,
    /// Paths that did not exist.
    pub missing: usize,
    /// Variables rejected because their value holds a NUL byte.
    pub invalid: usize,
}

impl LoadReport {
    /// Adds the counts of `other` to this report.
    pub const fn merge(&mut self, other: Self) {
        self.files_read += other.files_read;
        self.loaded += other.loaded;
        self.skipped_existing += other.skipped_existing;
        self.missing += other.missing;
        self.invalid += other.invalid;
    }
}

/// Attaches the file being parsed to malformed-line diagnostics.
struct SourcedSink<'a, D> {
    path: &'a Path,
    inner: &'a mut D,
}

impl<D: DiagnosticSink> DiagnosticSink for SourcedSink<'_, D> {
    fn report(&mut self, mut diagnostic: Diagnostic) {
        if let Diagnostic::MalformedLine { source, .. } = &mut diagnostic
            && source.is_none()
        {
            *source = Some(self.path.to_path_buf());
        }
        self.inner.report(diagnostic);
    }
}

/// Returns the default dotenv path inside `base_dir`.
#[must_use]
pub fn default_path(base_dir: &Path) -> PathBuf {
    base_dir.join(DOTENV_FILE_NAME)
}

/// Descends into `path` when it is a directory holding a `.env` file.
#[must_use]
pub fn resolve_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        let candidate = default_path(path);
        if candidate.is_file() {
            return candidate;
        }
    }
    path.to_path_buf()
}

/// Reads and decodes an already resolved dotenv path.
///
/// Returns `Ok(None)` when nothing exists at `path`.
pub(crate) fn read_existing(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = std::fs::read(path).map_err(|source| FsError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), encoding = ?sniff_encoding(&bytes), "reading dotenv file");
    Ok(Some(decode_text(&bytes).into_owned()))
}

/// Loads a dotenv file and everything it includes into `store`.
///
/// # Errors
///
/// Returns `FsError::ReadFailed` if a path exists but cannot be read, such as
/// a directory without a `.env` file. A missing path is not an error; it is
/// reported to `sink` instead.
pub fn load_file<S, D>(
    path: &Path,
    options: &LoadOptions,
    store: &mut S,
    sink: &mut D,
) -> Result<LoadReport>
where
    S: EnvStore,
    D: DiagnosticSink,
{
    let path = resolve_path(path);
    let mut report = LoadReport::default();

    let Some(content) = read_existing(&path)? else {
        report.missing += 1;
        sink.report(Diagnostic::MissingFile { path });
        return Ok(report);
    };
    report.files_read += 1;

    let parsed = parse_with(
        &content,
        &*store,
        &mut SourcedSink {
            path: &path,
            inner: sink,
        },
    );

    for (key, value) in parsed.vars() {
        if value.contains('\0') {
            report.invalid += 1;
            sink.report(Diagnostic::InvalidValue {
                source: path.clone(),
                key: key.clone(),
            });
        } else if options.override_existing() || !store.contains(key) {
            trace!(key = %key, "set");
            store.set(key, value);
            report.loaded += 1;
        } else {
            trace!(key = %key, "already set, skipped");
            report.skipped_existing += 1;
        }
    }

    for include in parsed.all_include_paths() {
        debug!(from = %path.display(), include, "following include");
        let nested = load_file(Path::new(include), options, store, sink)?;
        report.merge(nested);
    }

    Ok(report)
}

/// Loads a dotenv file into the process environment.
///
/// Without a path, `.env` in the current working directory is used.
/// Diagnostics are logged through `tracing`.
///
/// # Errors
///
/// Returns an error if the working directory cannot be determined or if an
/// existing file cannot be read.
///
/// # Safety
///
/// Writes the process environment with [`std::env::set_var`]. No other thread
/// may read or write the environment during the call; call this at startup
/// before spawning threads.
///
/// # Example
///
/// ```no_run
/// // SAFETY: single-threaded program start.
/// unsafe { dotload::load(None, false) }?;
/// assert!(std::env::var("DATABASE_URL").is_ok());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub unsafe fn load(path: Option<&Path>, override_existing: bool) -> Result<LoadReport> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_path(
            &std::env::current_dir().context("failed to determine the working directory")?,
        ),
    };
    let options = LoadOptions::builder()
        .with_override(override_existing)
        .build();
    // SAFETY: forwarded to the caller.
    let mut store = unsafe { ProcessEnv::new() };
    load_file(&path, &options, &mut store, &mut TracingSink)
}
