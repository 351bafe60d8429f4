// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dotenv parsing and loading.
//!
//! # File Format
//!
//! ```text
//! # comment
//! export KEY=value          # export prefix is ignored
//! KEY: value                # YAML-like separator
//! KEY='literal $NOT_EXPANDED'
//! KEY="tab\tless, \$ESCAPED, ${EXPANDED}"
//! KEY=unquoted $EXPANDED    # trailing comment dropped
//! source_env ~/shared.env   # include, also source_up / source_env=path
//! ```
//!
//! # Modules
//!
//! ```text
//! parser      text --> ParsedEnv          (pure, injected lookup + sink)
//! substitute  $VAR / ${VAR} / \$VAR, unescape, ~ expansion
//! loader      file --> EnvStore, recursive includes
//! types       ParsedEnv, Directive, Diagnostic, DiagnosticSink
//! ```

pub mod loader;
pub mod parser;
pub mod substitute;
pub mod types;


pub use loader::{LoadOptions, LoadReport, load_file};
pub use parser::{parse, parse_with};
pub use types::{Diagnostic, DiagnosticSink, Directive, ParsedEnv, ParsedValue, TracingSink};
