// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |             show / check / run
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!                         dotenv
//!               parser --> substitute
//!                  |
//!               loader --> includes (recursive)
//!
//!   +-----------------------------------------+
//!   |  core   env (EnvLookup / EnvStore)      |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```
//!
//! # Library Use
//!
//! ```
//! use dotload::core::env::container::Env;
//! use dotload::dotenv::{Diagnostic, parse_with};
//!
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let parsed = parse_with("export NAME='world'\nGREETING=\"hi $NAME\"\n", &Env::new(), &mut diagnostics);
//!
//! assert_eq!(parsed.get("GREETING"), Some("hi world"));
//! assert!(diagnostics.is_empty());
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod dotenv;
pub mod error;
pub mod logging;
pub mod utility;

pub use dotenv::loader::load;
pub use dotenv::{
    Diagnostic, DiagnosticSink, LoadOptions, LoadReport, ParsedEnv, ParsedValue, load_file,
    parse, parse_with,
};
