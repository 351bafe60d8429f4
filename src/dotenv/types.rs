// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parse results, include directives and diagnostics.
//!
//! ```text
//! ParsedEnv
//!   vars:     BTreeMap<key, value>        (installed into the env)
//!   includes: [(Directive, [path..])..]   (first-appearance order)
//!
//! Diagnostic: MissingFile | MalformedLine | InvalidValue
//!   --> DiagnosticSink: Vec<Diagnostic> | TracingSink
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Reserved pseudo-keys that pull another dotenv file in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Directive {
    /// `source_env <path>`
    #[serde(rename = "source_env")]
    SourceEnv,
    /// `source_up <path>`
    #[serde(rename = "source_up")]
    SourceUp,
}

impl Directive {
    /// All directives, in the order lines are matched against them.
    pub const ALL: [Self; 2] = [Self::SourceEnv, Self::SourceUp];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SourceEnv => "source_env",
            Self::SourceUp => "source_up",
        }
    }

    /// Returns the directive whose name is exactly `key`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == key)
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value in the combined mapping returned by [`ParsedEnv::to_mapping`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParsedValue {
    /// A resolved variable value.
    Value(String),
    /// The paths recorded under an include directive.
    Include(Vec<String>),
}

/// The result of parsing one dotenv file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEnv {
    vars: BTreeMap<String, String>,
    includes: Vec<(Directive, Vec<String>)>,
}

impl ParsedEnv {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
            includes: Vec::new(),
        }
    }

    /// Returns the value assigned to `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns the assigned variables.
    #[must_use]
    pub const fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// Returns the include lists, grouped by directive in first-appearance order.
    #[must_use]
    pub fn includes(&self) -> &[(Directive, Vec<String>)] {
        &self.includes
    }

    /// Returns the paths recorded under `directive`.
    #[must_use]
    pub fn include_paths(&self, directive: Directive) -> &[String] {
        self.includes
            .iter()
            .find(|(d, _)| *d == directive)
            .map(|(_, paths)| paths.as_slice())
            .unwrap_or_default()
    }

    /// Iterates over every include path in load order.
    pub fn all_include_paths(&self) -> impl Iterator<Item = &str> {
        self.includes
            .iter()
            .flat_map(|(_, paths)| paths.iter().map(String::as_str))
    }

    /// Returns true if no variables and no includes were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty() && self.includes.is_empty()
    }

    /// Combines variables and include lists into a single mapping, keyed by
    /// variable name or directive name.
    #[must_use]
    pub fn to_mapping(&self) -> BTreeMap<String, ParsedValue> {
        let mut mapping: BTreeMap<String, ParsedValue> = self
            .vars
            .iter()
            .map(|(k, v)| (k.clone(), ParsedValue::Value(v.clone())))
            .collect();
        for (directive, paths) in &self.includes {
            mapping.insert(
                directive.as_str().to_string(),
                ParsedValue::Include(paths.clone()),
            );
        }
        mapping
    }

    pub(super) fn insert_var(&mut self, key: &str, value: String) {
        self.vars.insert(key.to_string(), value);
    }

    pub(super) fn push_include(&mut self, directive: Directive, path: String) {
        if let Some((_, paths)) = self.includes.iter_mut().find(|(d, _)| *d == directive) {
            paths.push(path);
        } else {
            self.includes.push((directive, vec![path]));
        }
    }
}

/// A non-fatal problem found while parsing or loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The dotenv file does not exist; nothing was loaded from it.
    MissingFile { path: PathBuf },
    /// A line is neither an assignment, a comment, nor an include directive.
    ///
    /// `source` is filled in by the loader; [`parse_with`](super::parse_with)
    /// leaves it empty.
    MalformedLine {
        source: Option<PathBuf>,
        line_number: usize,
        line: String,
    },
    /// A value holds a NUL byte, which no process environment can store. The
    /// variable was not set.
    InvalidValue { source: PathBuf, key: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFile { path } => {
                write!(f, "not reading {} - it doesn't exist", path.display())
            }
            Self::MalformedLine {
                source: Some(path),
                line_number,
                line,
            } => write!(
                f,
                "{}:{line_number}: {line:?} doesn't match format",
                path.display()
            ),
            Self::MalformedLine {
                source: None,
                line_number,
                line,
            } => write!(f, "line {line_number} {line:?} doesn't match format"),
            Self::InvalidValue { source, key } => write!(
                f,
                "{}: value of {key} contains a NUL byte, not setting it",
                source.display()
            ),
        }
    }
}

/// Receives diagnostics as they are produced.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::MissingFile { path } => {
                tracing::warn!(path = %path.display(), "{diagnostic}");
            }
            Diagnostic::MalformedLine { line_number, .. } => {
                tracing::warn!(line = line_number, "{diagnostic}");
            }
            Diagnostic::InvalidValue { key, .. } => {
                tracing::warn!(key = %key, "{diagnostic}");
            }
        }
    }
}
