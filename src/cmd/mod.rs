// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   show, check (read-only, in-memory Env)
//!   run         (Env snapshot --> child process)
//! ```

pub mod run;
pub mod show;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use crate::config::Config;

/// Picks the dotenv files a command works on.
///
/// Explicit files are used as given; otherwise the configured files are
/// resolved against `base_dir`.
#[must_use]
pub fn dotenv_files(explicit: &[PathBuf], config: &Config, base_dir: &Path) -> Vec<PathBuf> {
    if explicit.is_empty() {
        config.dotenv_files(base_dir)
    } else {
        explicit.to_vec()
    }
}
