// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for dotload.
//!
//! # Config Structure
//!
//! ```text
//! [global]  log_level, log_file
//! [load]    files, override
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::dotenv::loader::DOTENV_FILE_NAME;
use crate::logging::LogLevel;

/// Global options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Console log level (0-5).
    pub log_level: LogLevel,
    /// Log file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Which dotenv files to load and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadConfig {
    /// Dotenv files loaded when none are given on the command line, relative
    /// to the base directory.
    pub files: Vec<PathBuf>,
    /// Replace variables that are already set.
    #[serde(rename = "override")]
    pub override_existing: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            files: vec![PathBuf::from(DOTENV_FILE_NAME)],
            override_existing: false,
        }
    }
}
